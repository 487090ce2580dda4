use std::time::Duration;

use clap::Parser;
use mock_petstore::MockPetstore;
use serde_json::json;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// In-memory stand-in for the public pet store API
#[derive(Parser, Debug)]
#[command(name = "mock-petstore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, short = 'H', default_value = "127.0.0.1", env = "MOCK_PETSTORE_HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "4010", env = "MOCK_PETSTORE_PORT")]
    port: u16,

    /// Start with a few demo pets (ids 1 to 3)
    #[arg(long)]
    seed: bool,

    /// Delay every response by this many milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_petstore=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mock = MockPetstore::new();
    if cli.seed {
        seed(&mock).await;
    }
    mock.set_delay(cli.delay_ms.map(Duration::from_millis)).await;

    let listener = TcpListener::bind(format!("{}:{}", cli.host, cli.port)).await?;
    tracing::info!("mock petstore listening on {}", listener.local_addr()?);

    mock.run(listener).await?;
    Ok(())
}

async fn seed(mock: &MockPetstore) {
    let pets = [
        json!({
            "id": 1,
            "name": "Rex",
            "category": {"id": 1, "name": "Dogs"},
            "photoUrls": ["https://images.example.com/rex.png"],
            "tags": [{"id": 1, "name": "friendly"}],
            "status": "available"
        }),
        json!({"id": 2, "name": "Misty", "photoUrls": [], "status": "pending"}),
        json!({"id": 3, "name": "Goldie", "photoUrls": [], "tags": [], "status": "sold"}),
    ];
    for pet in pets {
        mock.insert_pet(pet).await;
    }
    tracing::info!("seeded 3 pets");
}

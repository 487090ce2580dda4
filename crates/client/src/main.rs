//! petstore-client CLI entry point.

use std::time::Duration;

use clap::Parser;
use petstore_client::cli::pets::{create_form, update_form, PetsAction};
use petstore_client::cli::{Cli, Commands};
use petstore_client::client::PetstoreClient;
use petstore_client::output::{format_pet, pretty};
use petstore_client::ClientError;
use petstore_core::pet::{validate_new_pet, validate_pet_update};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e {
            ClientError::Validation(errors) => {
                eprintln!("{}", pretty::format_validation_errors(&errors))
            }
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> petstore_client::Result<()> {
    let client = PetstoreClient::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;

    match cli.command {
        Commands::Pets(pets_cmd) => match pets_cmd.action {
            PetsAction::Get { id } => {
                let pet = client.get_pet(id).await?;
                println!("{}", format_pet(&pet, cli.format, None));
            }
            PetsAction::Create {
                id,
                name,
                category_id,
                category_name,
                photo_urls,
                tags,
                status,
            } => {
                let form = create_form(
                    id,
                    name,
                    category_id,
                    category_name,
                    photo_urls,
                    tags,
                    status,
                );
                let new_pet = validate_new_pet(&form)?;
                let pet = client.create_pet(&new_pet).await?;
                println!("{}", format_pet(&pet, cli.format, Some("Created")));
            }
            PetsAction::Update { id, name, status } => {
                let update = validate_pet_update(&update_form(name, status))?;
                let pet = client.update_pet(id, &update).await?;
                println!("{}", format_pet(&pet, cli.format, Some("Updated")));
            }
            PetsAction::Delete { id } => {
                client.delete_pet(id).await?;
                if !cli.quiet {
                    println!("Deleted pet {}", id);
                }
            }
        },
    }

    Ok(())
}

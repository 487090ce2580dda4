//! Fake of the upstream pet store API for tests and local development.
//!
//! Serves the four pet endpoints over an in-memory map using the upstream's
//! status conventions: 400 for an id that is not an integer, 404 for a
//! missing pet, 405 for a body that cannot be read. Tests can force a status
//! per endpoint, slow every response down, and count requests.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use axum::{
    body::Bytes,
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// Upstream endpoints, for fault injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Get,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Default)]
struct Inner {
    pets: RwLock<HashMap<i64, Value>>,
    faults: RwLock<HashMap<Endpoint, u16>>,
    delay: RwLock<Option<Duration>>,
    requests: AtomicUsize,
}

/// Handle to a fake pet store. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MockPetstore {
    inner: Arc<Inner>,
}

impl MockPetstore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Router serving the pet endpoints at the root (`/pet`, `/pet/{id}`).
    pub fn router(&self) -> Router {
        Router::new()
            .route("/pet", post(create_pet))
            .route("/pet/{id}", get(get_pet).post(update_pet).delete(delete_pet))
            .with_state(self.clone())
    }

    /// Serve on an already bound listener until the task is dropped.
    pub async fn run(&self, listener: TcpListener) -> Result<(), std::io::Error> {
        axum::serve(listener, self.router()).await
    }

    /// Bind an ephemeral localhost port and serve in the background.
    pub async fn spawn(&self) -> Result<SocketAddr, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let mock = self.clone();
        tokio::spawn(async move {
            if let Err(e) = mock.run(listener).await {
                tracing::error!(error = %e, "Mock petstore stopped");
            }
        });
        Ok(addr)
    }

    /// Store a pet. The value must carry an integer `id`.
    pub async fn insert_pet(&self, pet: Value) {
        if let Some(id) = pet.get("id").and_then(Value::as_i64) {
            self.inner.pets.write().await.insert(id, pet);
        }
    }

    /// Current stored representation of a pet.
    pub async fn pet(&self, id: i64) -> Option<Value> {
        self.inner.pets.read().await.get(&id).cloned()
    }

    /// Answer every request to `endpoint` with `status` until cleared.
    pub async fn fail(&self, endpoint: Endpoint, status: u16) {
        self.inner.faults.write().await.insert(endpoint, status);
    }

    pub async fn clear_faults(&self) {
        self.inner.faults.write().await.clear();
    }

    /// Delay every response by `delay`.
    pub async fn set_delay(&self, delay: Option<Duration>) {
        *self.inner.delay.write().await = delay;
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.inner.requests.load(Ordering::SeqCst)
    }

    /// Count the request, apply the delay, and return the forced response if any.
    async fn intercept(&self, endpoint: Endpoint) -> Option<Response> {
        self.inner.requests.fetch_add(1, Ordering::SeqCst);

        let delay = *self.inner.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let status = self.inner.faults.read().await.get(&endpoint).copied()?;
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Some(api_response(status, "forced failure"))
    }
}

/// Upstream-style `{code, type, message}` body.
fn api_response(status: StatusCode, message: impl Into<String>) -> Response {
    let kind = if status.is_success() { "unknown" } else { "error" };
    (
        status,
        Json(json!({
            "code": status.as_u16(),
            "type": kind,
            "message": message.into(),
        })),
    )
        .into_response()
}

fn parse_id(raw: &str) -> Result<i64, Response> {
    raw.parse()
        .map_err(|_| api_response(StatusCode::BAD_REQUEST, "Invalid ID supplied"))
}

async fn get_pet(State(mock): State<MockPetstore>, Path(id): Path<String>) -> Response {
    if let Some(forced) = mock.intercept(Endpoint::Get).await {
        return forced;
    }
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match mock.pet(id).await {
        Some(pet) => Json(pet).into_response(),
        None => api_response(StatusCode::NOT_FOUND, "Pet not found"),
    }
}

async fn create_pet(State(mock): State<MockPetstore>, body: Bytes) -> Response {
    if let Some(forced) = mock.intercept(Endpoint::Create).await {
        return forced;
    }

    let pet: Value = match serde_json::from_slice(&body) {
        Ok(pet) => pet,
        Err(_) => return api_response(StatusCode::METHOD_NOT_ALLOWED, "Invalid input"),
    };
    let Some(id) = pet.get("id").and_then(Value::as_i64) else {
        return api_response(StatusCode::METHOD_NOT_ALLOWED, "Invalid input");
    };

    mock.inner.pets.write().await.insert(id, pet.clone());
    tracing::debug!(pet_id = id, "Mock stored pet");
    Json(pet).into_response()
}

async fn update_pet(
    State(mock): State<MockPetstore>,
    Path(id): Path<String>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    if let Some(forced) = mock.intercept(Endpoint::Update).await {
        return forced;
    }
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Ok(Form(fields)) = form else {
        return api_response(StatusCode::METHOD_NOT_ALLOWED, "Invalid input");
    };

    let mut pets = mock.inner.pets.write().await;
    let Some(pet) = pets.get_mut(&id) else {
        return api_response(StatusCode::NOT_FOUND, "Pet not found");
    };
    for key in ["name", "status"] {
        if let Some(value) = fields.get(key) {
            pet[key] = Value::String(value.clone());
        }
    }

    api_response(StatusCode::OK, id.to_string())
}

async fn delete_pet(State(mock): State<MockPetstore>, Path(id): Path<String>) -> Response {
    if let Some(forced) = mock.intercept(Endpoint::Delete).await {
        return forced;
    }
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match mock.inner.pets.write().await.remove(&id) {
        Some(_) => api_response(StatusCode::OK, id.to_string()),
        None => api_response(StatusCode::NOT_FOUND, "Pet not found"),
    }
}

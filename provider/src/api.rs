//! Provider HTTP API — the host-facing call surface.
//!
//! Exposes three routes:
//! - `POST /api/configure` — install the Airbyte connection (`{"host", "username", "password"}`)
//! - `GET /api/resources` — list registered resource type names
//! - `POST /api/resources/:type_name/:operation` — run create/read/update/delete

use crate::registry::Registry;
use crate::resource::{ServiceRequest, ServiceResponse};
use airbyte::{Client, ClientConfig};
use anyhow::Result;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// Shared state for the provider API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub registry: Arc<Registry>,
    client: Arc<RwLock<Option<Arc<Client>>>>,
}

impl ApiState {
    /// State with an optional pre-configured client.
    pub fn new(registry: Registry, client: Option<Client>) -> Self {
        Self {
            registry: Arc::new(registry),
            client: Arc::new(RwLock::new(client.map(Arc::new))),
        }
    }

    /// Replace the Airbyte client used by subsequent calls.
    pub fn configure(&self, config: ClientConfig) -> Result<()> {
        let host = config.host.clone();
        let client = Client::new(config)?;
        *self.client.write().unwrap_or_else(|e| e.into_inner()) = Some(Arc::new(client));
        info!(host = %host, "Provider configured");
        Ok(())
    }

    pub fn client(&self) -> Option<Arc<Client>> {
        self.client
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(Arc::clone)
    }
}

/// The four calls a resource answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s {
            "create" => Ok(Operation::Create),
            "read" => Ok(Operation::Read),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            _ => Err(()),
        }
    }
}

/// Response for `GET /api/resources`.
#[derive(Serialize)]
pub struct ResourceList {
    pub provider: String,
    pub resources: Vec<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// ---------------------------------------------------------------------------
// Business logic (called from HTTP handlers and unit tests)
// ---------------------------------------------------------------------------

/// Decode the host's resource data and install the client it describes.
pub fn handle_configure(state: &ApiState, resource_data: &str) -> Result<()> {
    let config = ClientConfig::from_resource_data(resource_data)?;
    state.configure(config)
}

/// Dispatch one operation to the resource registered under `type_name`.
pub async fn handle_operation(
    state: &ApiState,
    type_name: &str,
    operation: Operation,
    req: ServiceRequest,
) -> std::result::Result<ServiceResponse, AppError> {
    let client = state.client().ok_or(AppError::NotConfigured)?;
    let resource = state
        .registry
        .build(type_name, client)
        .ok_or_else(|| AppError::NotFound(format!("unknown resource type: {}", type_name)))?;

    let result = match operation {
        Operation::Create => resource.create(&req).await,
        Operation::Read => resource.read(&req).await,
        Operation::Update => resource.update(&req).await,
        Operation::Delete => resource.delete(&req).await,
    };

    result.map_err(|e| {
        let message = format!("{:#}", e);
        warn!(type_name, ?operation, error = %message, "Resource operation failed");
        AppError::from(e)
    })
}

// ---------------------------------------------------------------------------
// HTTP handlers
// ---------------------------------------------------------------------------

async fn post_configure(
    State(state): State<ApiState>,
    body: String,
) -> std::result::Result<StatusCode, AppError> {
    handle_configure(&state, &body).map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_resources(State(state): State<ApiState>) -> Json<ResourceList> {
    Json(ResourceList {
        provider: state.registry.provider().to_string(),
        resources: state
            .registry
            .type_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

async fn post_operation(
    State(state): State<ApiState>,
    Path((type_name, operation)): Path<(String, String)>,
    payload: std::result::Result<Json<ServiceRequest>, JsonRejection>,
) -> std::result::Result<Json<ServiceResponse>, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let operation = operation
        .parse::<Operation>()
        .map_err(|_| AppError::NotFound(format!("unknown operation: {}", operation)))?;
    let response = handle_operation(&state, &type_name, operation, req).await?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    NotConfigured,
    /// Airbyte was unreachable or rejected the call.
    Upstream(String),
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        let upstream = e
            .chain()
            .filter_map(|cause| cause.downcast_ref::<airbyte::Error>())
            .any(airbyte::Error::is_upstream);
        let message = format!("{:#}", e);
        if upstream {
            AppError::Upstream(message)
        } else {
            AppError::Internal(message)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotConfigured => (
                StatusCode::PRECONDITION_FAILED,
                "provider is not configured".to_string(),
            ),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse { error: msg })).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/configure", post(post_configure))
        .route("/api/resources", get(list_resources))
        .route("/api/resources/:type_name/:operation", post(post_operation))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

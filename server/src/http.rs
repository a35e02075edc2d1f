use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use entity::employees;
use platform_db::DbPool;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::AppConfig,
    service::{EmployeeService, ServiceError},
    store::EmployeeFields,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub service: EmployeeService,
    pub config: Arc<AppConfig>,
}

#[derive(Clone, Debug)]
pub struct ServeConfig {
    addr: SocketAddr,
}

impl ServeConfig {
    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            addr: SocketAddr::from((host, port)),
        }
    }
}

pub async fn serve(config: ServeConfig, state: AppState) -> anyhow::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(%config.addr, "employee server listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };
    CorsLayer::new()
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_origin(allow_origin)
}

pub fn build_router(state: AppState) -> Router {
    let request_id = MakeRequestUuid;
    let header_name = HeaderName::from_static("x-request-id");
    Router::new()
        .route("/health", get(health_handler))
        .route("/employees/", get(list_handler).post(create_handler))
        .route("/employees/{id}", get(get_handler).put(update_handler))
        .route("/employees/delete/{id}", delete(delete_handler))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), request_id))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config.cors_allowed_origins)),
        )
        .with_state(state)
}

async fn list_handler(State(state): State<AppState>) -> HttpResult<Json<Vec<employees::Model>>> {
    let records = state.service.find_all().await?;
    Ok(Json(records))
}

async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<employees::Model>> {
    let record = state.service.get_by_id(id).await?;
    Ok(Json(record))
}

// The only route that translates failures: anything that goes wrong while
// saving collapses to 400 with an empty body.
async fn create_handler(
    State(state): State<AppState>,
    Json(fields): Json<EmployeeFields>,
) -> Response {
    match state.service.create(fields).await {
        Ok(record) => {
            let location = format!("/employees/{}", record.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(record),
            )
                .into_response()
        }
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<EmployeeFields>,
) -> HttpResult<Json<employees::Model>> {
    let record = state.service.update(id, patch).await?;
    Ok(Json(record))
}

// Idempotent: a missing id deletes nothing and still succeeds. The body
// reports whether the id resolves to a record after the deletion.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<bool>> {
    state.service.delete_by_id(id).await?;
    let gone = !state.service.exists_by_id(id).await?;
    Ok(Json(gone))
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_ok = state.pool.ping().await.is_ok();
    Json(HealthResponse {
        ok: db_ok,
        db_ok,
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    db_ok: bool,
    version: &'static str,
}

type HttpResult<T> = Result<T, HttpError>;

/// Service failures outside the create route surface untranslated: a 500
/// with the error text for a body, not-found included.
#[derive(Debug)]
struct HttpError {
    status: StatusCode,
    message: String,
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    ctrl_c.await;

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };
}

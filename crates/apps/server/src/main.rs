use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use catalog::{CategoryTable, InMemoryMarkerStore, MarkerStore};

mod categories;
mod geocoding;
mod pins;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MarkerStore + Send + Sync>,
    pub categories: Arc<CategoryTable>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = env::var("PINS_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()
        .expect("invalid PINS_ADDR");

    // Markers are ingested once at startup and never mutated afterwards.
    let store = match env::var("MARKERS_PATH") {
        Ok(path) => match load_markers(&path).await {
            Ok(store) => store,
            Err(err) => {
                error!("failed to load markers from {path}: {err}");
                std::process::exit(1);
            }
        },
        Err(_) => InMemoryMarkerStore::builtin(),
    };
    info!("serving {} markers", store.markers().len());

    let state = AppState {
        store: Arc::new(store),
        categories: Arc::new(CategoryTable::builtin()),
    };

    let app = router(state);

    info!("pins server listening on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn load_markers(path: &str) -> Result<InMemoryMarkerStore, String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| e.to_string())?;
    InMemoryMarkerStore::from_json_str(&text).map_err(|e| e.to_string())
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/pins", get(pins::get_pins))
        .route("/api/categories", get(categories::get_categories))
        .route("/api/geocode", get(geocoding::get_geocode))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message.into() })))
}

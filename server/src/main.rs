//! Pokedex HTTP server.
//!
//! One endpoint: POST /graphql takes `{"operation": .., "arguments": {..}}`
//! and answers `{"data": {<operation>: ..}}` or `{"errors": [{"message": ..}]}`.
//! The catalog lives behind a single mutex so concurrent requests see each
//! mutation as one atomic step.

use std::sync::{Arc, Mutex, PoisonError};

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

use pokedex_schema::execute;
use pokedex_store::CatalogStore;

#[derive(Clone)]
struct AppState {
    catalog: Arc<Mutex<CatalogStore>>,
}

#[derive(Deserialize)]
struct OperationRequest {
    operation: String,
    #[serde(default)]
    arguments: Map<String, Value>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("pokedex=info,tower_http=debug")
        .init();

    let state = AppState {
        catalog: Arc::new(Mutex::new(pokedex_store::seed())),
    };

    let app = create_router(state);

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "4000".to_string())
        .parse::<u16>()
        .unwrap_or(4000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Serving the pokedex at {}/graphql", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/graphql", post(dispatch))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

async fn dispatch(
    State(state): State<AppState>,
    Json(request): Json<OperationRequest>,
) -> (StatusCode, Json<Value>) {
    debug!(operation = %request.operation, "dispatching");

    // Lock poisoning only means a previous request panicked mid-dispatch;
    // the catalog itself is still usable.
    let mut catalog = state
        .catalog
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    match execute(&mut catalog, &request.operation, &request.arguments) {
        Ok(result) => {
            let mut data = Map::new();
            data.insert(request.operation, result);
            (StatusCode::OK, Json(json!({"data": data})))
        }
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"errors": [{"message": err.to_string()}]})),
        ),
    }
}

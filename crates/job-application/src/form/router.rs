use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::{error, info};

use super::domain::Application;
use super::store::DocumentStore;

/// Router exposing the save and load endpoints used by the form.
pub fn form_router<S>(store: Arc<S>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route("/api/save-data", post(save_handler::<S>))
        .route("/api/load-data", get(load_handler::<S>))
        .with_state(store)
}

pub(crate) async fn save_handler<S>(
    State(store): State<Arc<S>>,
    axum::Json(document): axum::Json<Application>,
) -> Response
where
    S: DocumentStore + 'static,
{
    match store.save(&document).await {
        Ok(()) => {
            info!("application document saved");
            let payload = json!({
                "message": "Data saved successfully",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => {
            error!(error = %err, "error saving data");
            let payload = json!({
                "message": "Error saving data",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn load_handler<S>(State(store): State<Arc<S>>) -> Response
where
    S: DocumentStore + 'static,
{
    match store.load().await {
        Ok(document) => (StatusCode::OK, axum::Json(document)).into_response(),
        Err(err) => {
            error!(error = %err, "error loading data");
            let payload = json!({
                "message": "Error loading data",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

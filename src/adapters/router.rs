use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::adapters::{
    controllers::{file_controller::FileController, health_controller::HealthController},
    state::AppState,
};

// Multipart framing and base64 inflation sit on top of the file itself.
const ENVELOPE_ALLOWANCE: usize = 64 * 1024;

fn body_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes
        .saturating_add(max_upload_bytes / 3 + 4)
        .saturating_add(ENVELOPE_ALLOWANCE)
}

fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    match allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        // Allow all origins if not specified (only for development)
        None => CorsLayer::permissive(),
    }
}

pub fn build_router(app_state: AppState) -> Router {
    let receive_file = || -> MethodRouter<AppState> {
        get(FileController::receive_file_form).post(FileController::receive_file)
    };

    let limit = body_limit(app_state.config.max_upload_bytes);
    let cors = cors_layer(app_state.config.cors_allowed_origins.as_deref());

    Router::new()
        .route("/file/receive_file", receive_file())
        .route("/File/receive_file", receive_file())
        .route(
            "/file/stored/{stored_name}",
            get(FileController::download_stored_file),
        )
        .route("/health", get(HealthController::health_check))
        .layer(DefaultBodyLimit::max(limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

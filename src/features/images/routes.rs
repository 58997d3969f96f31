//! Image routes

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::images::handlers;
use crate::features::images::services::ImageService;

/// Create routes for the images feature
pub fn routes(service: Arc<ImageService>) -> Router {
    Router::new()
        .route(
            "/api/images",
            post(handlers::submit_image).get(handlers::list_images),
        )
        .route("/api/images/{id}", get(handlers::get_image))
        .with_state(service)
}

//! CareBridge Server - voice-agent calls and medical image analysis API
//!
//! This library provides the HTTP surface of CareBridge: outbound call
//! dispatch through a voice-agent platform, and X-ray, prescription and
//! patient-guidance requests answered by a multimodal model.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::*;
pub use server::CareBridgeServer;

use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Create the main application router with all routes and middleware
pub fn create_app(server: CareBridgeServer) -> Router {
    let max_upload_bytes = server.config.max_upload_bytes;

    routes::create_routes()
        .layer(DefaultBodyLimit::disable())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer(&server.config.allowed_origins))
                .layer(from_fn(middleware::request_timing_middleware))
                .layer(RequestBodyLimitLayer::new(max_upload_bytes)),
        )
        .with_state(server)
}

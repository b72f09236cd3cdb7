// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::post,
};
use chat::chat_handler;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

pub fn create_router(allowed_origin: HeaderValue) -> Router<SharedState> {
    // Browsers may only call /chat from the one configured frontend.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new().route("/chat", post(chat_handler)).layer(
        ServiceBuilder::new()
            // Provider failures are already logged once by AppError.
            .layer(
                TraceLayer::new_for_http().on_failure(DefaultOnFailure::new().level(Level::DEBUG)),
            )
            .layer(cors),
    )
}

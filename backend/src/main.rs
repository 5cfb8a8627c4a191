use axum::{
    routing::{any, get},
    Router,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod utils {
    pub mod mailer;
}

use handlers::contact_handlers;
use utils::mailer::{Mailer, SmtpMailer};

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    mailer: Arc<dyn Mailer>,
}

pub fn validate_env() {
    let _ = std::env::var("EMAIL_USER").expect("EMAIL_USER must be set");
    let _ = std::env::var("EMAIL_PASS").expect("EMAIL_PASS must be set");
    // EMAIL_TO is optional and falls back to the business inbox
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    validate_env();

    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mailer = SmtpMailer::from_env().expect("Failed to configure SMTP mailer");

    let state = Arc::new(AppState {
        mailer: Arc::new(mailer),
    });

    // Create router with CORS; the contact endpoint takes any method so
    // it can answer non-POST requests with its own 405 body.
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/send-message", any(contact_handlers::send_message))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // Be cautious with `Any` in production; restrict to your frontend origin
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state)
        .fallback_service(ServeDir::new("../frontend/dist"));

    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:3000").await.unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}

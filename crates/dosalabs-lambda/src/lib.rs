//! dosalabs-lambda
//!
//! The HTTP-facing booking service: an Axum router run under `lambda_http`.
//! Handlers are stateless — every piece of booking state lives in S3.

pub mod error;
pub mod middleware;
pub mod notify;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the API router. Booking routes are POST-only; other methods get a
/// 405 from Axum's method routing.
pub fn router(state: AppState) -> Router {
    // The SPA is served from a different origin (including preview domains)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/submitBooking", post(routes::bookings::submit_booking))
        .route(
            "/resendBookingEmail",
            post(routes::bookings::resend_booking_email),
        )
        .route("/getBooking", post(routes::bookings::get_booking))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}

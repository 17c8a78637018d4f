use crate::interface_adapters::handlers::{fetch_guest, list_guests, submit_guest};
use crate::interface_adapters::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/guests/", get(list_guests).post(submit_guest))
        .route("/guests/{guest_id}", get(fetch_guest))
        // Photos travel inline as base64, so submissions have no size cap.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

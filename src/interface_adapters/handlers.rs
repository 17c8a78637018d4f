use crate::domain::errors::GuestError;
use crate::interface_adapters::protocol::{GuestForm, GuestsResponse, SubmitGuestResponse};
use crate::interface_adapters::state::{AppState, UuidGenerator};
use crate::use_cases::fetch_guests::{FetchGuestsResponse, FetchGuestsUseCase};
use crate::use_cases::submit_guest::SubmitGuestUseCase;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    Form, Json,
};
use tracing::{debug, info, warn};

// Handler for listing every guest.
#[tracing::instrument(name = "list_guests", skip_all)]
pub async fn list_guests(State(state): State<AppState>) -> Json<GuestsResponse> {
    fetch(state, None).await
}

// Handler for fetching one guest; unknown ids fall back to the full list.
#[tracing::instrument(name = "fetch_guest", skip_all, fields(guest_id = %guest_id))]
pub async fn fetch_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<String>,
) -> Json<GuestsResponse> {
    fetch(state, Some(guest_id.as_str())).await
}

async fn fetch(state: AppState, guest_id: Option<&str>) -> Json<GuestsResponse> {
    let use_case = FetchGuestsUseCase { store: state.store };

    match use_case.execute(guest_id).await {
        FetchGuestsResponse::One(guest) => Json(GuestsResponse::Guest(guest)),
        FetchGuestsResponse::All(guests) => {
            debug!(count = guests.len(), "returning guest list");
            Json(GuestsResponse::Guests(guests))
        }
    }
}

// Handler for creating or updating a guest from the `guest` form field.
#[tracing::instrument(name = "submit_guest", skip_all)]
pub async fn submit_guest(
    State(state): State<AppState>,
    form: Result<Form<GuestForm>, FormRejection>,
) -> Json<SubmitGuestResponse> {
    // An unreadable form is treated like a missing field.
    let raw = match form {
        Ok(Form(form)) => form.into_guest(),
        Err(rejection) => {
            debug!(error = %rejection, "guest form rejected");
            None
        }
    };

    let use_case = SubmitGuestUseCase {
        ids: UuidGenerator,
        store: state.store,
    };

    match use_case.execute(raw).await {
        Ok(result) => {
            info!(guest_id = %result.guest_id, "guest saved");
            Json(SubmitGuestResponse::success(result.guest_id))
        }
        Err(err) => {
            warn!(error = %err, "guest submission failed");
            Json(SubmitGuestResponse::fail(failure_reason(&err)))
        }
    }
}

// Maps domain errors to the reason codes clients match on.
fn failure_reason(err: &GuestError) -> &'static str {
    match err {
        GuestError::NoData => "no_data",
        GuestError::InvalidData => "invalid_data",
        GuestError::FailedSaving => "failed_saving",
    }
}

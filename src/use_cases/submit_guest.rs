use tracing::warn;

use crate::domain::entities::GuestSubmission;
use crate::domain::errors::GuestError;
use crate::domain::ports::{GuestStore, IdGenerator};
use crate::use_cases::reconcile::reconcile;

// Response returned by the submit guest use case.
pub struct SubmitGuestResponse {
    pub guest_id: String,
}

// Create-or-update use case with injected dependencies.
pub struct SubmitGuestUseCase<G, S> {
    pub ids: G,
    pub store: S,
}

impl<G, S> SubmitGuestUseCase<G, S>
where
    G: IdGenerator,
    S: GuestStore,
{
    pub async fn execute(&self, raw: Option<String>) -> Result<SubmitGuestResponse, GuestError> {
        let submission = parse_submission(raw.as_deref())?;

        let mut guests = self.store.load().await;
        let (guest_id, record) = reconcile(submission, &guests, &self.ids)?;
        guests.insert(guest_id.clone(), record);

        self.store.save(&guests).await.map_err(|err| {
            warn!(error = %err, guest_id = %guest_id, "failed to save guests");
            GuestError::FailedSaving
        })?;

        Ok(SubmitGuestResponse { guest_id })
    }
}

// Turn the raw form field into a submission. Emptiness is checked before
// trimming, so a whitespace-only value is invalid rather than missing.
pub fn parse_submission(raw: Option<&str>) -> Result<GuestSubmission, GuestError> {
    let raw = raw.filter(|value| !value.is_empty()).ok_or(GuestError::NoData)?;
    serde_json::from_str(raw.trim()).map_err(|_| GuestError::InvalidData)
}

use serde::{Deserialize, Serialize};

use crate::domain::entities::{GuestCollection, GuestRecord};

// Form body for guest submissions; `guest` holds JSON text.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct GuestForm {
    pairs: Vec<(String, String)>,
}

impl GuestForm {
    // A repeated `guest` field resolves to its first value.
    pub fn into_guest(self) -> Option<String> {
        self.pairs
            .into_iter()
            .find(|(key, _)| key == "guest")
            .map(|(_, value)| value)
    }
}

// Outcome envelope for guest submissions.
#[derive(Debug, Serialize)]
pub struct SubmitGuestResponse {
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl SubmitGuestResponse {
    pub fn success(id: String) -> Self {
        Self {
            result: "success",
            id: Some(id),
            reason: None,
        }
    }

    pub fn fail(reason: &'static str) -> Self {
        Self {
            result: "fail",
            id: None,
            reason: Some(reason),
        }
    }
}

// Read responses are either a bare record or the whole id -> record map.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GuestsResponse {
    Guest(GuestRecord),
    Guests(GuestCollection),
}

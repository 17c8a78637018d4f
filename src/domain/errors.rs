use thiserror::Error;

// Domain-level errors for guest submissions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuestError {
    #[error("no guest data submitted")]
    NoData,
    #[error("guest data is not a valid guest object")]
    InvalidData,
    #[error("failed to save guests")]
    FailedSaving,
}

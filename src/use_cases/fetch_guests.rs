use crate::domain::entities::{GuestCollection, GuestRecord};
use crate::domain::ports::GuestStore;

// Response returned by the fetch guests use case.
#[derive(Debug, PartialEq)]
pub enum FetchGuestsResponse {
    One(GuestRecord),
    All(GuestCollection),
}

// Read use case; an unknown or blank id yields the whole collection.
pub struct FetchGuestsUseCase<S> {
    pub store: S,
}

impl<S> FetchGuestsUseCase<S>
where
    S: GuestStore,
{
    pub async fn execute(&self, guest_id: Option<&str>) -> FetchGuestsResponse {
        let mut guests = self.store.load().await;

        let requested = guest_id.filter(|id| !id.trim().is_empty());
        match requested.and_then(|id| guests.shift_remove(id)) {
            Some(guest) => FetchGuestsResponse::One(guest),
            None => FetchGuestsResponse::All(guests),
        }
    }
}

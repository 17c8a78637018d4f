use async_trait::async_trait;

use crate::domain::entities::GuestCollection;

// Port for whole-collection guest persistence.
#[async_trait]
pub trait GuestStore: Send + Sync {
    // Never fails; unreadable data is reported as an empty collection.
    async fn load(&self) -> GuestCollection;
    async fn save(&self, guests: &GuestCollection) -> Result<(), String>;
}

// Port for minting identifiers of new guests.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

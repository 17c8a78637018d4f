use uuid::Uuid;

use crate::domain::ports::IdGenerator;
use crate::interface_adapters::json_store::JsonFileGuestStore;

// Application state: only the location of the guests file.
#[derive(Clone)]
pub struct AppState {
    pub store: JsonFileGuestStore,
}

// Random UUID v4 identifiers for new guests.
#[derive(Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

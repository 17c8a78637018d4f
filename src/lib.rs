pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::server::{run, serve};
pub use interface_adapters::json_store::JsonFileGuestStore;
pub use interface_adapters::state::AppState;

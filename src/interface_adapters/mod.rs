pub mod handlers;
pub mod json_store;
pub mod protocol;
pub mod routes;
pub mod state;

pub mod fetch_guests;
pub mod reconcile;
pub mod submit_guest;

#[cfg(test)]
pub(crate) mod test_support;

use crate::domain::entities::{GuestCollection, GuestRecord, GuestSubmission};
use crate::domain::errors::GuestError;
use crate::domain::ports::IdGenerator;

/// Decide where a submission lands in the collection.
///
/// Resolution order:
/// 1. a non-empty `id` already present in the collection: the stored record
///    is kept and the submission's present fields are merged over it;
/// 2. the first stored record (in collection order) whose `name` equals the
///    submission's `name`: the submission replaces it under the same key;
/// 3. otherwise a freshly generated identifier for a brand new record.
///
/// The returned record always carries the resolved identifier in `id`.
/// A submission that reaches name matching without a `name` is rejected
/// with [`GuestError::InvalidData`].
pub fn reconcile<G>(
    submission: GuestSubmission,
    guests: &GuestCollection,
    ids: &G,
) -> Result<(String, GuestRecord), GuestError>
where
    G: IdGenerator + ?Sized,
{
    if let Some(guest_id) = submission.explicit_id().map(str::to_string) {
        if let Some(stored) = guests.get(&guest_id) {
            let mut merged = stored.clone();
            submission.merge_into(&mut merged);
            merged.id = guest_id.clone();
            return Ok((guest_id, merged));
        }
    }

    let name = submission.name.as_deref().ok_or(GuestError::InvalidData)?;

    let guest_id = match find_by_name(guests, name) {
        Some(existing_id) => existing_id.to_string(),
        None => fresh_id(guests, ids),
    };

    let record = submission.into_record(guest_id.clone());
    Ok((guest_id, record))
}

fn find_by_name<'a>(guests: &'a GuestCollection, name: &str) -> Option<&'a str> {
    guests
        .iter()
        .find(|(_, guest)| guest.name == name)
        .map(|(guest_id, _)| guest_id.as_str())
}

fn fresh_id<G>(guests: &GuestCollection, ids: &G) -> String
where
    G: IdGenerator + ?Sized,
{
    loop {
        let candidate = ids.next_id();
        if !guests.contains_key(&candidate) {
            return candidate;
        }
    }
}

//! Simulated person lookup backed by a fixed membership set.
//!
//! There is no storage behind this API; the set of "existing" person ids
//! is a process-wide constant that is only ever read.

use thiserror::Error;

/// Person ids that exist in the directory.
pub const KNOWN_PERSON_IDS: [i64; 5] = [1, 2, 3, 4, 5];

/// Returned when a person id is not in the membership set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("This person does not exists")]
pub struct UnknownPersonError {
    pub person_id: i64,
}

/// Check whether `person_id` belongs to the membership set.
pub fn find_person(person_id: i64) -> Result<(), UnknownPersonError> {
    if KNOWN_PERSON_IDS.contains(&person_id) {
        Ok(())
    } else {
        Err(UnknownPersonError { person_id })
    }
}

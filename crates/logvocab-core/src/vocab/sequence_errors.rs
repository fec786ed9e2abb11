//! Sequence error events.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

/// A user reached part of the application out of sequence.
///
/// **Level:** `WARN`
#[must_use]
pub fn sequence_fail(user_id: impl Display) -> String {
    EventWriter::new(EventKind::SequenceFail)
        .field(user_id)
        .finish()
}

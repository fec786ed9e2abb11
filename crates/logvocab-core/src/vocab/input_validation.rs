//! Input validation events.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

/// Server-side validation of `field` failed for a user's submission.
///
/// Either client-side validation was missing or it was bypassed.
///
/// **Level:** `WARN`
#[must_use]
pub fn input_validation_fail(field: impl Display, user_id: impl Display) -> String {
    EventWriter::new(EventKind::InputValidationFail)
        .field(field)
        .field(user_id)
        .finish()
}

//! Excessive use events.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

/// A service limit ceiling of `max` requests was exceeded.
///
/// **Level:** `WARN`
#[must_use]
pub fn excess_rate_limit_exceeded(user_id: impl Display, max: impl Display) -> String {
    EventWriter::new(EventKind::ExcessRateLimitExceeded)
        .field(user_id)
        .field(max)
        .finish()
}

//! Session management events.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

/// A new authenticated session was created.
///
/// **Level:** `INFO`
#[must_use]
pub fn session_created(user_id: impl Display) -> String {
    EventWriter::new(EventKind::SessionCreated)
        .field(user_id)
        .finish()
}

/// A session was extended.
///
/// **Level:** `INFO`
#[must_use]
pub fn session_renewed(user_id: impl Display) -> String {
    EventWriter::new(EventKind::SessionRenewed)
        .field(user_id)
        .finish()
}

/// A session expired, e.g. on `logout`, `timeout` or `revoked`.
///
/// **Level:** `INFO`
#[must_use]
pub fn session_expired(user_id: impl Display, reason: impl Display) -> String {
    EventWriter::new(EventKind::SessionExpired)
        .field(user_id)
        .field(reason)
        .finish()
}

/// An expired session was used.
///
/// **Level:** `WARN`
#[must_use]
pub fn session_use_after_expire(user_id: impl Display) -> String {
    EventWriter::new(EventKind::SessionUseAfterExpire)
        .field(user_id)
        .finish()
}

//! Authorization events.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

/// An attempt to access a resource without entitlement.
///
/// **Level:** `CRITICAL`
#[must_use]
pub fn authz_fail(user_id: impl Display, resource: impl Display) -> String {
    EventWriter::new(EventKind::AuthzFail)
        .field(user_id)
        .field(resource)
        .finish()
}

/// The entitlements of a user or entity changed from `from` to `to`.
///
/// **Level:** `WARN`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::authz_change;
///
/// assert_eq!(
///     authz_change("joebob1", "user", "admin"),
///     "authz_change:joebob1,user,admin"
/// );
/// ```
#[must_use]
pub fn authz_change(user_id: impl Display, from: impl Display, to: impl Display) -> String {
    EventWriter::new(EventKind::AuthzChange)
        .field(user_id)
        .field(from)
        .field(to)
        .finish()
}

/// Activity by a privileged user such as an administrator.
///
/// **Level:** `WARN`
#[must_use]
pub fn authz_admin(user_id: impl Display, event: impl Display) -> String {
    EventWriter::new(EventKind::AuthzAdmin)
        .field(user_id)
        .field(event)
        .finish()
}

//! Privilege change events.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

/// Permissions on a file or object changed from `from_level` to `to_level`.
///
/// Renders the `malicious_direct` literal with a space after the first comma,
/// exactly as the vocabulary defines it. Consumers match on this text, so it
/// must not be normalised.
///
/// **Level:** `WARN`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::privilege_permissions_changed;
///
/// assert_eq!(
///     privilege_permissions_changed("u", "f", "r", "w"),
///     "malicious_direct:u, f,r,w"
/// );
/// ```
#[must_use]
pub fn privilege_permissions_changed(
    user_id: impl Display,
    file_or_object: impl Display,
    from_level: impl Display,
    to_level: impl Display,
) -> String {
    EventWriter::new(EventKind::MaliciousDirect)
        .field(user_id)
        .spaced_field(file_or_object)
        .field(from_level)
        .field(to_level)
        .finish()
}

//! Sensitive data change events.
//!
//! All four events render a space after the first comma, as the vocabulary
//! defines them.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

fn sensitive(kind: EventKind, user_id: impl Display, file_or_object: impl Display) -> String {
    EventWriter::new(kind)
        .field(user_id)
        .spaced_field(file_or_object)
        .finish()
}

/// Sensitive data was created.
///
/// **Level:** `WARN`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::sensitive_create;
///
/// assert_eq!(sensitive_create("u", "f"), "sensitive_create:u, f");
/// ```
#[must_use]
pub fn sensitive_create(user_id: impl Display, file_or_object: impl Display) -> String {
    sensitive(EventKind::SensitiveCreate, user_id, file_or_object)
}

/// Sensitive data was read.
///
/// **Level:** `WARN`
#[must_use]
pub fn sensitive_read(user_id: impl Display, file_or_object: impl Display) -> String {
    sensitive(EventKind::SensitiveRead, user_id, file_or_object)
}

/// Sensitive data was updated.
///
/// **Level:** `WARN`
#[must_use]
pub fn sensitive_update(user_id: impl Display, file_or_object: impl Display) -> String {
    sensitive(EventKind::SensitiveUpdate, user_id, file_or_object)
}

/// Sensitive data was marked for deletion.
///
/// **Level:** `WARN`
#[must_use]
pub fn sensitive_delete(user_id: impl Display, file_or_object: impl Display) -> String {
    sensitive(EventKind::SensitiveDelete, user_id, file_or_object)
}

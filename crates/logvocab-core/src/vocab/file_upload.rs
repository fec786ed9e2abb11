//! File upload events.
//!
//! An upload moves through completion, storage under a new name, and
//! validation (type checks, virus scans) before it is served back.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::{EventKind, EventLevel};

/// A file upload completed, type not recorded.
///
/// **Level:** `INFO`
#[must_use]
pub fn upload_complete(user_id: impl Display, filename: impl Display) -> String {
    EventWriter::new(EventKind::UploadComplete)
        .field(user_id)
        .field(filename)
        .finish()
}

/// A file upload of the given content type completed.
///
/// **Level:** `INFO`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::upload_complete_with_type;
///
/// assert_eq!(
///     upload_complete_with_type("joebob1", "user_generated_content.png", "PNG"),
///     "upload_complete:joebob1,user_generated_content.png,PNG"
/// );
/// ```
#[must_use]
pub fn upload_complete_with_type(
    user_id: impl Display,
    filename: impl Display,
    file_type: impl Display,
) -> String {
    EventWriter::new(EventKind::UploadComplete)
        .field(user_id)
        .field(filename)
        .field(file_type)
        .finish()
}

/// An uploaded file was moved or renamed to `to`.
///
/// **Level:** `INFO`
#[must_use]
pub fn upload_stored(filename: impl Display, to: impl Display) -> String {
    EventWriter::new(EventKind::UploadStored)
        .field(filename)
        .field(to)
        .finish()
}

/// An uploaded file was validated by `vendor` with the given status.
///
/// Typical statuses are `PASSED`, `INCOMPLETE` and `FAILED`. Use
/// [`upload_validation_level`] to pick the level for a status.
///
/// **Level:** `INFO` or `CRITICAL`
#[must_use]
pub fn upload_validation(
    filename: impl Display,
    vendor: impl Display,
    status: impl Display,
) -> String {
    EventWriter::new(EventKind::UploadValidation)
        .field(filename)
        .field(vendor)
        .field(status)
        .finish()
}

/// Level for an [`upload_validation`] event: `CRITICAL` when the scan failed.
#[must_use]
pub fn upload_validation_level(status: &str) -> EventLevel {
    if status.eq_ignore_ascii_case("FAILED") {
        EventLevel::Critical
    } else {
        EventKind::UploadValidation.level()
    }
}

/// A file was deleted for normal reasons.
///
/// **Level:** `INFO`
#[must_use]
pub fn upload_delete(user_id: impl Display, file_id: impl Display) -> String {
    EventWriter::new(EventKind::UploadDelete)
        .field(user_id)
        .field(file_id)
        .finish()
}

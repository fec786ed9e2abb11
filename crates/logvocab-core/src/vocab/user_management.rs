//! User management events.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

fn account(
    kind: EventKind,
    user_id: impl Display,
    target_user_id: impl Display,
    role: impl Display,
) -> EventWriter {
    EventWriter::new(kind)
        .field(user_id)
        .field(target_user_id)
        .field(role)
}

/// `user_id` created the account `new_user_id` with `role`.
///
/// **Level:** `WARN`
#[must_use]
pub fn user_created(
    user_id: impl Display,
    new_user_id: impl Display,
    role: impl Display,
) -> String {
    account(EventKind::UserCreated, user_id, new_user_id, role).finish()
}

/// Like [`user_created`], followed by `:` and the attributes joined with `,`.
///
/// An empty attribute list still renders the trailing `:`.
///
/// **Level:** `WARN`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::user_created_with_attributes;
///
/// assert_eq!(
///     user_created_with_attributes(1, 2, "user", ["a", "b"]),
///     "user_created:1,2,user:a,b"
/// );
/// assert_eq!(
///     user_created_with_attributes(1, 2, "user", Vec::<&str>::new()),
///     "user_created:1,2,user:"
/// );
/// ```
#[must_use]
pub fn user_created_with_attributes<I>(
    user_id: impl Display,
    new_user_id: impl Display,
    role: impl Display,
    attributes: I,
) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    account(EventKind::UserCreated, user_id, new_user_id, role)
        .sublist(attributes)
        .finish()
}

/// `user_id` updated the account `new_user_id`, which now has `role`.
///
/// **Level:** `WARN`
#[must_use]
pub fn user_updated(
    user_id: impl Display,
    new_user_id: impl Display,
    role: impl Display,
) -> String {
    account(EventKind::UserUpdated, user_id, new_user_id, role).finish()
}

/// Like [`user_updated`], followed by `:` and the attributes joined with `,`.
///
/// **Level:** `WARN`
#[must_use]
pub fn user_updated_with_attributes<I>(
    user_id: impl Display,
    new_user_id: impl Display,
    role: impl Display,
    attributes: I,
) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    account(EventKind::UserUpdated, user_id, new_user_id, role)
        .sublist(attributes)
        .finish()
}

/// `user_id` archived the account `archived_user_id`.
///
/// **Level:** `WARN`
#[must_use]
pub fn user_archived(user_id: impl Display, archived_user_id: impl Display) -> String {
    EventWriter::new(EventKind::UserArchived)
        .field(user_id)
        .field(archived_user_id)
        .finish()
}

/// `user_id` deleted the account `deleted_user_id`.
///
/// **Level:** `WARN`
#[must_use]
pub fn user_deleted(user_id: impl Display, deleted_user_id: impl Display) -> String {
    EventWriter::new(EventKind::UserDeleted)
        .field(user_id)
        .field(deleted_user_id)
        .finish()
}

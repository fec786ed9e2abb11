//! Authentication events: logins, password changes and service tokens.
//!
//! Every login attempt should be recorded, successful or not, together with
//! lockouts and the lifecycle of tokens issued for service access.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

/// A successful login.
///
/// **Level:** `INFO`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::authn_login_success;
///
/// assert_eq!(authn_login_success("joebob1"), "authn_login_success:joebob1");
/// ```
#[must_use]
pub fn authn_login_success(user_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnLoginSuccess)
        .field(user_id)
        .finish()
}

/// A successful login after `retries` previous failures.
///
/// **Level:** `INFO`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::authn_login_successafterfail;
///
/// assert_eq!(
///     authn_login_successafterfail("joebob1", 2),
///     "authn_login_successafterfail:joebob1,2"
/// );
/// ```
#[must_use]
pub fn authn_login_successafterfail(user_id: impl Display, retries: impl Display) -> String {
    EventWriter::new(EventKind::AuthnLoginSuccessAfterFail)
        .field(user_id)
        .field(retries)
        .finish()
}

/// A failed login.
///
/// **Level:** `WARN`
#[must_use]
pub fn authn_login_fail(user_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnLoginFail)
        .field(user_id)
        .finish()
}

/// The login failure limit was reached, limit not recorded.
///
/// **Level:** `WARN`
#[must_use]
pub fn authn_login_fail_max(user_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnLoginFailMax)
        .field(user_id)
        .finish()
}

/// The login failure limit of `max_limit` attempts was reached.
///
/// **Level:** `WARN`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::authn_login_fail_max_with_limit;
///
/// assert_eq!(
///     authn_login_fail_max_with_limit("joebob1", 3),
///     "authn_login_fail_max:joebob1,3"
/// );
/// ```
#[must_use]
pub fn authn_login_fail_max_with_limit(user_id: impl Display, max_limit: impl Display) -> String {
    EventWriter::new(EventKind::AuthnLoginFailMax)
        .field(user_id)
        .field(max_limit)
        .finish()
}

/// An account was locked, reason not recorded.
///
/// **Level:** `WARN`
#[must_use]
pub fn authn_login_lock(user_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnLoginLock)
        .field(user_id)
        .finish()
}

/// An account was locked.
///
/// Reasons used by the vocabulary are `maxretries`, `suspicious`, `customer`
/// and `other`.
///
/// **Level:** `WARN`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::authn_login_lock_with_reason;
///
/// assert_eq!(
///     authn_login_lock_with_reason("joebob1", "maxretries"),
///     "authn_login_lock:joebob1,maxretries"
/// );
/// ```
#[must_use]
pub fn authn_login_lock_with_reason(user_id: impl Display, reason: impl Display) -> String {
    EventWriter::new(EventKind::AuthnLoginLock)
        .field(user_id)
        .field(reason)
        .finish()
}

/// A password was changed.
///
/// **Level:** `INFO`
#[must_use]
pub fn authn_password_change(user_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnPasswordChange)
        .field(user_id)
        .finish()
}

/// A password change attempt failed. May accompany [`authn_login_lock`].
///
/// **Level:** `INFO`
#[must_use]
pub fn authn_password_change_fail(user_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnPasswordChangeFail)
        .field(user_id)
        .finish()
}

/// The same user was seen in two locations too far apart to travel between.
///
/// Often indicates an account takeover.
///
/// **Level:** `CRITICAL`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::authn_impossible_travel;
///
/// assert_eq!(
///     authn_impossible_travel("joebob1", "US-OR", "CN-SH"),
///     "authn_impossible_travel:joebob1,US-OR,CN-SH"
/// );
/// ```
#[must_use]
pub fn authn_impossible_travel(
    user_id: impl Display,
    location1: impl Display,
    location2: impl Display,
) -> String {
    EventWriter::new(EventKind::AuthnImpossibleTravel)
        .field(user_id)
        .field(location1)
        .field(location2)
        .finish()
}

/// A token was created for service access with the given entitlements.
///
/// The entitlements follow the user id as one comma-joined field. An empty
/// list still renders the separating comma.
///
/// **Level:** `INFO`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::authn_token_created;
///
/// assert_eq!(
///     authn_token_created("app.foobarapi.prod", ["create", "read", "update"]),
///     "authn_token_created:app.foobarapi.prod,create,read,update"
/// );
/// ```
#[must_use]
pub fn authn_token_created<I>(user_id: impl Display, entitlements: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    EventWriter::new(EventKind::AuthnTokenCreated)
        .field(user_id)
        .joined(entitlements)
        .finish()
}

/// A token was revoked for the account, token id not recorded.
///
/// **Level:** `INFO`
#[must_use]
pub fn authn_token_revoked(user_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnTokenRevoked)
        .field(user_id)
        .finish()
}

/// Token `token_id` was revoked for the account.
///
/// **Level:** `INFO`
#[must_use]
pub fn authn_token_revoked_with_token(user_id: impl Display, token_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnTokenRevoked)
        .field(user_id)
        .field(token_id)
        .finish()
}

/// A previously revoked token was used again, token id not recorded.
///
/// **Level:** `CRITICAL`
#[must_use]
pub fn authn_token_reuse(user_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnTokenReuse)
        .field(user_id)
        .finish()
}

/// Previously revoked token `token_id` was used again.
///
/// **Level:** `CRITICAL`
#[must_use]
pub fn authn_token_reuse_with_token(user_id: impl Display, token_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnTokenReuse)
        .field(user_id)
        .field(token_id)
        .finish()
}

/// The token held by an application was deleted.
///
/// **Level:** `WARN`
#[must_use]
pub fn authn_token_delete(app_id: impl Display) -> String {
    EventWriter::new(EventKind::AuthnTokenDelete)
        .field(app_id)
        .finish()
}

//! Malicious behavior events.
//!
//! Indicators of probing or attack: force-browsing, unexpected input, known
//! attack tools, cross-origin abuse and direct object reference attempts.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

/// Numerous requests for files that do not exist.
///
/// Renders the `malicious_excess404` literal, without an underscore before
/// `404`.
///
/// **Level:** `WARN`
///
/// # Examples
///
/// ```rust
/// use logvocab_core::malicious_excess_404;
///
/// assert_eq!(
///     malicious_excess_404("123", "UA"),
///     "malicious_excess404:123,UA"
/// );
/// ```
#[must_use]
pub fn malicious_excess_404(user_id_or_ip: impl Display, user_agent: impl Display) -> String {
    EventWriter::new(EventKind::MaliciousExcess404)
        .field(user_id_or_ip)
        .field(user_agent)
        .finish()
}

/// Data was submitted for an input the backend does not handle.
///
/// **Level:** `WARN`
#[must_use]
pub fn malicious_extraneous(
    user_id_or_ip: impl Display,
    input_name: impl Display,
    user_agent: impl Display,
) -> String {
    EventWriter::new(EventKind::MaliciousExtraneous)
        .field(user_id_or_ip)
        .field(input_name)
        .field(user_agent)
        .finish()
}

/// An attack tool was identified by signature or user agent.
///
/// **Level:** `CRITICAL`
#[must_use]
pub fn malicious_attack_tool(
    user_id_or_ip: impl Display,
    tool_name: impl Display,
    user_agent: impl Display,
) -> String {
    EventWriter::new(EventKind::MaliciousAttackTool)
        .field(user_id_or_ip)
        .field(tool_name)
        .field(user_agent)
        .finish()
}

/// A request arrived from an unauthorized origin.
///
/// **Level:** `CRITICAL`
#[must_use]
pub fn malicious_cors(
    user_id_or_ip: impl Display,
    user_agent: impl Display,
    referer: impl Display,
) -> String {
    EventWriter::new(EventKind::MaliciousCors)
        .field(user_id_or_ip)
        .field(user_agent)
        .field(referer)
        .finish()
}

/// An attempt to access an object by a reference the user does not own.
///
/// Renders the `malicious_direct` literal.
///
/// **Level:** `CRITICAL`
#[must_use]
pub fn malicious_direct_reference(
    user_id_or_ip: impl Display,
    user_agent: impl Display,
) -> String {
    EventWriter::new(EventKind::MaliciousDirect)
        .field(user_id_or_ip)
        .field(user_agent)
        .finish()
}

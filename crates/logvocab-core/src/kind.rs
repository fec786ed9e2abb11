//! Event kinds, categories and recommended levels.
//!
//! Every formatter in [`crate::vocab`] renders exactly one [`EventKind`]. The
//! kind's literal is the text before the first `:` of the rendered event.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Recommended severity of an event, as given by the vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventLevel {
    /// Informational event
    #[default]
    Info,
    /// Warning event
    Warn,
    /// Critical event requiring immediate attention
    Critical,
}

impl EventLevel {
    /// Returns the upper-case label used in log records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Critical => "CRITICAL",
        }
    }

    /// Returns the level for a rendered event.
    ///
    /// Usually the kind's level. Two kinds depend on the fields:
    /// `malicious_direct` is `WARN` in its permission-change form (a space
    /// after the first comma), and `upload_validation` is `CRITICAL` when the
    /// status is `FAILED`.
    ///
    /// # Errors
    ///
    /// Returns an error if `event` does not start with a known kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvocab_core::{malicious_direct_reference, privilege_permissions_changed, EventLevel};
    ///
    /// let changed = privilege_permissions_changed("joebob1", "/admin", "0511", "0777");
    /// assert_eq!(EventLevel::of_event(&changed).unwrap(), EventLevel::Warn);
    ///
    /// let probed = malicious_direct_reference("joebob1", "Mozilla/5.0");
    /// assert_eq!(EventLevel::of_event(&probed).unwrap(), EventLevel::Critical);
    /// ```
    pub fn of_event(event: &str) -> Result<Self> {
        let kind = EventKind::of_event(event)?;
        let fields = event.split_once(':').map_or("", |(_, fields)| fields);

        let level = match kind {
            EventKind::MaliciousDirect
                if fields
                    .split_once(',')
                    .is_some_and(|(_, rest)| rest.starts_with(' ')) =>
            {
                Self::Warn
            }
            EventKind::UploadValidation => {
                crate::vocab::upload_validation_level(fields.rsplit(',').next().unwrap_or(""))
            }
            _ => kind.level(),
        };
        Ok(level)
    }
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vocabulary section an event kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Login, password and token lifecycle
    Authentication,
    /// Access decisions and entitlement changes
    Authorization,
    /// Rate and quota ceilings
    ExcessiveUse,
    /// File upload pipeline
    FileUpload,
    /// Server-side input validation
    InputValidation,
    /// Probing and attack indicators
    MaliciousBehavior,
    /// Access to sensitive data
    SensitiveDataChanges,
    /// Business logic sequence violations
    SequenceErrors,
    /// Session lifecycle
    SessionManagement,
    /// Process and monitoring agent lifecycle
    SystemEvents,
    /// Account lifecycle
    UserManagement,
}

macro_rules! event_kinds {
    ($($variant:ident => $literal:tt, $category:ident, $level:ident;)+) => {
        /// A kind of security event, identified by its literal prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum EventKind {
            $(
                #[doc = concat!("`", $literal, "`")]
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl EventKind {
            /// Every kind in the vocabulary, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the literal prefix rendered before the first `:`.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal,)+
                }
            }

            /// Returns the vocabulary section this kind belongs to.
            #[must_use]
            pub const fn category(self) -> Category {
                match self {
                    $(Self::$variant => Category::$category,)+
                }
            }

            /// Returns the level the vocabulary recommends logging this kind at.
            #[must_use]
            pub const fn level(self) -> EventLevel {
                match self {
                    $(Self::$variant => EventLevel::$level,)+
                }
            }
        }

        impl FromStr for EventKind {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($literal => Ok(Self::$variant),)+
                    other => Err(Error::UnknownKind {
                        kind: other.to_string(),
                    }),
                }
            }
        }
    };
}

event_kinds! {
    AuthnLoginSuccess => "authn_login_success", Authentication, Info;
    AuthnLoginSuccessAfterFail => "authn_login_successafterfail", Authentication, Info;
    AuthnLoginFail => "authn_login_fail", Authentication, Warn;
    AuthnLoginFailMax => "authn_login_fail_max", Authentication, Warn;
    AuthnLoginLock => "authn_login_lock", Authentication, Warn;
    AuthnPasswordChange => "authn_password_change", Authentication, Info;
    AuthnPasswordChangeFail => "authn_password_change_fail", Authentication, Info;
    AuthnImpossibleTravel => "authn_impossible_travel", Authentication, Critical;
    AuthnTokenCreated => "authn_token_created", Authentication, Info;
    AuthnTokenRevoked => "authn_token_revoked", Authentication, Info;
    AuthnTokenReuse => "authn_token_reuse", Authentication, Critical;
    AuthnTokenDelete => "authn_token_delete", Authentication, Warn;
    AuthzFail => "authz_fail", Authorization, Critical;
    AuthzChange => "authz_change", Authorization, Warn;
    AuthzAdmin => "authz_admin", Authorization, Warn;
    ExcessRateLimitExceeded => "excess_rate_limit_exceeded", ExcessiveUse, Warn;
    UploadComplete => "upload_complete", FileUpload, Info;
    UploadStored => "upload_stored", FileUpload, Info;
    UploadValidation => "upload_validation", FileUpload, Info;
    UploadDelete => "upload_delete", FileUpload, Info;
    InputValidationFail => "input_validation_fail", InputValidation, Warn;
    MaliciousExcess404 => "malicious_excess404", MaliciousBehavior, Warn;
    MaliciousExtraneous => "malicious_extraneous", MaliciousBehavior, Warn;
    MaliciousAttackTool => "malicious_attack_tool", MaliciousBehavior, Critical;
    MaliciousCors => "malicious_cors", MaliciousBehavior, Critical;
    MaliciousDirect => "malicious_direct", MaliciousBehavior, Critical;
    SensitiveCreate => "sensitive_create", SensitiveDataChanges, Warn;
    SensitiveRead => "sensitive_read", SensitiveDataChanges, Warn;
    SensitiveUpdate => "sensitive_update", SensitiveDataChanges, Warn;
    SensitiveDelete => "sensitive_delete", SensitiveDataChanges, Warn;
    SequenceFail => "sequence_fail", SequenceErrors, Warn;
    SessionCreated => "session_created", SessionManagement, Info;
    SessionRenewed => "session_renewed", SessionManagement, Info;
    SessionExpired => "session_expired", SessionManagement, Info;
    SessionUseAfterExpire => "session_use_after_expire", SessionManagement, Warn;
    SysStartup => "sys_startup", SystemEvents, Warn;
    SysShutdown => "sys_shutdown", SystemEvents, Warn;
    SysRestart => "sys_restart", SystemEvents, Warn;
    SysCrash => "sys_crash", SystemEvents, Warn;
    SysMonitorDisabled => "sys_monitor_disabled", SystemEvents, Warn;
    SysMonitorEnabled => "sys_monitor_enabled", SystemEvents, Warn;
    UserCreated => "user_created", UserManagement, Warn;
    UserUpdated => "user_updated", UserManagement, Warn;
    UserArchived => "user_archived", UserManagement, Warn;
    UserDeleted => "user_deleted", UserManagement, Warn;
}

impl EventKind {
    /// Reads the kind of an already rendered event string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSeparator`] if `event` contains no `:`, and
    /// [`Error::UnknownKind`] if the prefix is not in the vocabulary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logvocab_core::{sys_restarted, EventKind};
    ///
    /// let kind = EventKind::of_event(&sys_restarted("joebob1")).unwrap();
    /// assert_eq!(kind, EventKind::SysRestart);
    /// ```
    pub fn of_event(event: &str) -> Result<Self> {
        let Some((prefix, _)) = event.split_once(':') else {
            return Err(Error::MissingSeparator {
                event: event.to_string(),
            });
        };
        prefix.parse()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

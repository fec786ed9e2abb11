//! System events.

use std::fmt::Display;

use crate::format::EventWriter;
use crate::kind::EventKind;

/// The system was started by `user_id`.
///
/// **Level:** `WARN`
#[must_use]
pub fn sys_startup(user_id: impl Display) -> String {
    EventWriter::new(EventKind::SysStartup)
        .field(user_id)
        .finish()
}

/// The system was shut down by `user_id`.
///
/// **Level:** `WARN`
#[must_use]
pub fn sys_shutdown(user_id: impl Display) -> String {
    EventWriter::new(EventKind::SysShutdown)
        .field(user_id)
        .finish()
}

/// The system was restarted by `user_id`.
///
/// Renders the `sys_restart` literal.
///
/// **Level:** `WARN`
#[must_use]
pub fn sys_restarted(user_id: impl Display) -> String {
    EventWriter::new(EventKind::SysRestart)
        .field(user_id)
        .finish()
}

/// The system crashed, e.g. `outofmemory`.
///
/// **Level:** `WARN`
#[must_use]
pub fn sys_crash(reason: impl Display) -> String {
    EventWriter::new(EventKind::SysCrash).field(reason).finish()
}

/// A monitoring agent (file integrity, logging, antivirus, ...) was disabled.
///
/// **Level:** `WARN`
#[must_use]
pub fn sys_monitor_disabled(user_id: impl Display, agent: impl Display) -> String {
    EventWriter::new(EventKind::SysMonitorDisabled)
        .field(user_id)
        .field(agent)
        .finish()
}

/// A monitoring agent was enabled.
///
/// **Level:** `WARN`
#[must_use]
pub fn sys_monitor_enabled(user_id: impl Display, agent: impl Display) -> String {
    EventWriter::new(EventKind::SysMonitorEnabled)
        .field(user_id)
        .field(agent)
        .finish()
}

//! Emits security records through `tracing`.
//!
//! The recorder does not own a transport. Records go to whatever subscriber
//! the host application installed, which also decides what to filter.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::kind::EventLevel;
use crate::record::SecurityRecord;

/// Default application id when none is configured.
pub const DEFAULT_APP_ID: &str = "logvocab";

/// Recorder settings, loadable from the host application's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Application id stamped on every record
    pub app_id: String,

    /// Whether records are emitted
    pub enabled: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID.to_string(),
            enabled: true,
        }
    }
}

impl RecorderConfig {
    /// Creates a config for the given application id.
    #[must_use]
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            ..Default::default()
        }
    }

    /// Enables or disables emission.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Builds [`SecurityRecord`]s and emits them as `tracing` events.
///
/// `INFO` records are emitted with `info!`, `WARN` with `warn!` and
/// `CRITICAL` with `error!`. The event string is attached as the `event`
/// field.
///
/// # Examples
///
/// ```rust
/// use logvocab_core::{authn_login_fail, Recorder};
///
/// let recorder = Recorder::builder().app_id("foobar.netportal_auth").build();
/// let record = recorder
///     .record(authn_login_fail("joebob1"), "User joebob1 login failed")
///     .unwrap();
///
/// assert_eq!(record.app_id, "foobar.netportal_auth");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    config: RecorderConfig,
}

impl Recorder {
    /// Creates a recorder from configuration.
    #[must_use]
    pub const fn new(config: RecorderConfig) -> Self {
        Self { config }
    }

    /// Creates a builder for configuring the recorder.
    #[must_use]
    pub fn builder() -> RecorderBuilder {
        RecorderBuilder::new()
    }

    /// Returns the configured application id.
    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.config.app_id
    }

    /// Returns whether records are emitted.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Builds a record for `event` and emits it.
    ///
    /// The level comes from [`EventLevel::of_event`], so a permission change
    /// is emitted as a warning and a failed upload scan as an error.
    ///
    /// The record is returned even when the recorder is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if `event` does not start with a known kind.
    pub fn record(
        &self,
        event: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<SecurityRecord> {
        let record = SecurityRecord::new(self.config.app_id.as_str(), event, description)?;
        self.emit(&record);
        Ok(record)
    }

    /// Emits an existing record at its level.
    pub fn emit(&self, record: &SecurityRecord) {
        if !self.config.enabled {
            debug!("Security recorder disabled, skipping event");
            return;
        }

        match record.level {
            EventLevel::Info => info!(
                event = %record.event,
                appid = %record.app_id,
                request_id = %record.request_id,
                "{}",
                record.description
            ),
            EventLevel::Warn => warn!(
                event = %record.event,
                appid = %record.app_id,
                request_id = %record.request_id,
                "{}",
                record.description
            ),
            EventLevel::Critical => error!(
                event = %record.event,
                appid = %record.app_id,
                request_id = %record.request_id,
                "{}",
                record.description
            ),
        }
    }
}

/// Builder for configuring a [`Recorder`].
#[derive(Debug, Default)]
pub struct RecorderBuilder {
    config: RecorderConfig,
}

impl RecorderBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application id.
    #[must_use]
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.config.app_id = app_id.into();
        self
    }

    /// Enables or disables emission.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Builds the recorder.
    #[must_use]
    pub fn build(self) -> Recorder {
        Recorder::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{
        authn_login_success, authn_token_reuse_with_token, privilege_permissions_changed, sys_crash,
    };
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture<F: FnOnce()>(f: F) -> String {
        let writer = CaptureWriter::default();
        let make_writer = writer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || make_writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        writer.contents()
    }

    #[test]
    fn test_config_default() {
        let config = RecorderConfig::default();
        assert_eq!(config.app_id, DEFAULT_APP_ID);
        assert!(config.enabled);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: RecorderConfig =
            serde_json::from_str(r#"{"app_id":"foobar.netportal_auth"}"#).unwrap();
        assert_eq!(config, RecorderConfig::new("foobar.netportal_auth"));

        let config: RecorderConfig = serde_json::from_str(r#"{"enabled":false}"#).unwrap();
        assert_eq!(config.app_id, DEFAULT_APP_ID);
        assert!(!config.enabled);
    }

    #[test]
    fn test_builder() {
        let recorder = Recorder::builder().app_id("svc").enabled(false).build();
        assert_eq!(recorder.app_id(), "svc");
        assert!(!recorder.is_enabled());
    }

    #[test]
    fn test_record_emits_event_field() {
        let recorder = Recorder::new(RecorderConfig::new("foobar.netportal_auth"));
        let output = capture(|| {
            recorder
                .record(authn_login_success("joebob1"), "User joebob1 login successfully")
                .unwrap();
        });

        assert!(output.contains("INFO"));
        assert!(output.contains("event=authn_login_success:joebob1"));
        assert!(output.contains("appid=foobar.netportal_auth"));
        assert!(output.contains("User joebob1 login successfully"));
    }

    #[test]
    fn test_levels_map_to_tracing_levels() {
        let recorder = Recorder::default();

        let warn_output = capture(|| {
            recorder.record(sys_crash("outofmemory"), "crashed").unwrap();
        });
        assert!(warn_output.contains("WARN"));

        let critical_output = capture(|| {
            recorder
                .record(authn_token_reuse_with_token("joebob1", "xyz"), "token reused")
                .unwrap();
        });
        assert!(critical_output.contains("ERROR"));
        assert!(critical_output.contains("event=authn_token_reuse:joebob1,xyz"));
    }

    #[test]
    fn test_permission_change_emitted_as_warning() {
        let recorder = Recorder::default();
        let output = capture(|| {
            let record = recorder
                .record(
                    privilege_permissions_changed("joebob1", "/p", "0511", "0777"),
                    "permissions changed",
                )
                .unwrap();
            assert_eq!(record.level, EventLevel::Warn);
        });

        assert!(output.contains("WARN"));
        assert!(!output.contains("ERROR"));
    }

    #[test]
    fn test_disabled_recorder_emits_nothing() {
        let recorder = Recorder::builder().enabled(false).build();
        let output = capture(|| {
            let record = recorder
                .record(sys_crash("outofmemory"), "crashed")
                .unwrap();
            assert_eq!(record.event, "sys_crash:outofmemory");
        });

        assert!(!output.contains("sys_crash"));
    }

    #[test]
    fn test_record_rejects_unknown_kind() {
        let recorder = Recorder::default();
        assert!(recorder.record("not_an_event:1", "nope").is_err());
    }
}

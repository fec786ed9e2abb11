//! Structured security log records.
//!
//! [`SecurityRecord`] is the record shape the vocabulary uses in its
//! examples: the rendered event travels in the `event` field next to the
//! application id, level, human description and request id.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::{Timestamp, Uuid};

use crate::error::Result;
use crate::kind::{EventKind, EventLevel};

/// Generates a new v7 UUID for request ids.
fn new_request_id() -> Uuid {
    let ts = Timestamp::now(uuid::NoContext);
    Uuid::new_v7(ts)
}

/// A security log record carrying one vocabulary event.
///
/// # Examples
///
/// ```rust
/// use logvocab_core::{authn_login_success, EventLevel, SecurityRecord};
///
/// let record = SecurityRecord::new(
///     "foobar.netportal_auth",
///     authn_login_success("joebob1"),
///     "User joebob1 login successfully",
/// )
/// .unwrap();
///
/// assert_eq!(record.level, EventLevel::Info);
/// assert_eq!(record.event, "authn_login_success:joebob1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityRecord {
    /// When the event happened, millisecond precision
    #[serde(with = "datetime_format")]
    pub datetime: DateTime<Utc>,

    /// Application identifier
    #[serde(rename = "appid")]
    pub app_id: String,

    /// Rendered vocabulary event
    pub event: String,

    /// Log level
    pub level: EventLevel,

    /// Human-readable description
    pub description: String,

    /// Request correlation id
    #[serde(rename = "requestId")]
    pub request_id: Uuid,
}

impl SecurityRecord {
    /// Creates a record for an already rendered event.
    ///
    /// The level is the one recommended for the event, see
    /// [`EventLevel::of_event`].
    ///
    /// # Errors
    ///
    /// Returns an error if `event` does not start with a known kind.
    pub fn new(
        app_id: impl Into<String>,
        event: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let event = event.into();
        let level = EventLevel::of_event(&event)?;

        Ok(Self {
            datetime: Utc::now().trunc_subsecs(3),
            app_id: app_id.into(),
            event,
            level,
            description: description.into(),
            request_id: new_request_id(),
        })
    }

    /// Overrides the level.
    #[must_use]
    pub const fn with_level(mut self, level: EventLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the request id.
    #[must_use]
    pub const fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }

    /// Sets the timestamp, truncated to milliseconds.
    #[must_use]
    pub fn with_datetime(mut self, datetime: DateTime<Utc>) -> Self {
        self.datetime = datetime.trunc_subsecs(3);
        self
    }

    /// Returns the kind of the carried event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event was replaced with an unknown one.
    pub fn kind(&self) -> Result<EventKind> {
        EventKind::of_event(&self.event)
    }

    /// Serializes the record to a JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `2019-01-01 00:00:00,000` timestamps.
mod datetime_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

    pub fn serialize<S>(datetime: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&datetime.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

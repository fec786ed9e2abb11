//! # logvocab core
//!
//! Event formatters for the OWASP Logging Vocabulary.
//!
//! Each formatter renders one security-relevant occurrence into a canonical
//! event string such as `authn_login_fail:joebob1`. The string is meant to
//! be attached as the `event` field of a structured log record produced by
//! the caller's logger.
//!
//! This crate provides:
//!
//! - [`vocab`] - one pure formatter per event kind
//! - [`EventKind`] - the closed set of kind literals with recommended levels
//! - [`EventSchema`] - field layout of each kind
//! - [`SecurityRecord`] and [`Recorder`] - a record shape and `tracing`
//!   emission for callers without their own record type
//!
//! ## Example
//!
//! ```rust
//! use logvocab_core::{authn_login_fail_max_with_limit, user_created_with_attributes};
//!
//! assert_eq!(
//!     authn_login_fail_max_with_limit("joebob1", 3),
//!     "authn_login_fail_max:joebob1,3"
//! );
//! assert_eq!(
//!     user_created_with_attributes("joebob1", "user1", "admin", ["email", "name"]),
//!     "user_created:joebob1,user1,admin:email,name"
//! );
//! ```
//!
//! Values are embedded verbatim. Callers must escape anything that could
//! break their downstream log parsing, such as `,` or `:` inside a field.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
mod format;
pub mod kind;
pub mod record;
pub mod recorder;
pub mod schema;
pub mod vocab;


pub use error::{Error, Result};
pub use kind::{Category, EventKind, EventLevel};
pub use record::SecurityRecord;
pub use recorder::{Recorder, RecorderBuilder, RecorderConfig, DEFAULT_APP_ID};
pub use schema::{EventSchema, FieldDefinition, FieldType};
pub use vocab::*;

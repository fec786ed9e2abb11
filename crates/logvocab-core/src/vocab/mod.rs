//! Event formatters, one module per vocabulary section.
//!
//! Every function is pure: it renders its arguments into a new event string
//! and has no other effect. Scalar arguments take any [`std::fmt::Display`]
//! value, so `"123"`, `123` and `123u128` render the same text.
//!
//! Optional trailing fields are expressed as a base function plus a
//! `*_with_*` companion that always renders the extra segment.

pub mod authentication;
pub mod authorization;
pub mod excessive_use;
pub mod file_upload;
pub mod input_validation;
pub mod malicious_behavior;
pub mod privilege_changes;
pub mod sensitive_data;
pub mod sequence_errors;
pub mod session_management;
pub mod system_events;
pub mod user_management;

pub use authentication::{
    authn_impossible_travel, authn_login_fail, authn_login_fail_max,
    authn_login_fail_max_with_limit, authn_login_lock, authn_login_lock_with_reason,
    authn_login_success, authn_login_successafterfail, authn_password_change,
    authn_password_change_fail, authn_token_created, authn_token_delete, authn_token_reuse,
    authn_token_reuse_with_token, authn_token_revoked, authn_token_revoked_with_token,
};
pub use authorization::{authz_admin, authz_change, authz_fail};
pub use excessive_use::excess_rate_limit_exceeded;
pub use file_upload::{
    upload_complete, upload_complete_with_type, upload_delete, upload_stored, upload_validation,
    upload_validation_level,
};
pub use input_validation::input_validation_fail;
pub use malicious_behavior::{
    malicious_attack_tool, malicious_cors, malicious_direct_reference, malicious_excess_404,
    malicious_extraneous,
};
pub use privilege_changes::privilege_permissions_changed;
pub use sensitive_data::{sensitive_create, sensitive_delete, sensitive_read, sensitive_update};
pub use sequence_errors::sequence_fail;
pub use session_management::{
    session_created, session_expired, session_renewed, session_use_after_expire,
};
pub use system_events::{
    sys_crash, sys_monitor_disabled, sys_monitor_enabled, sys_restarted, sys_shutdown,
    sys_startup,
};
pub use user_management::{
    user_archived, user_created, user_created_with_attributes, user_deleted, user_updated,
    user_updated_with_attributes,
};

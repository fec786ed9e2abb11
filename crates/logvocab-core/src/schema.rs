//! Field schemas for each event kind, for documentation and validation.

use serde::{Deserialize, Serialize};

use crate::kind::{EventKind, EventLevel};

/// Field layout of one event kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSchema {
    /// Event kind this schema describes
    pub kind: EventKind,

    /// What the event records
    pub description: String,

    /// Recommended level
    pub level: EventLevel,

    /// Required fields, in call order
    pub required_fields: Vec<FieldDefinition>,

    /// Optional trailing fields, in call order
    pub optional_fields: Vec<FieldDefinition>,
}

/// Field definition within a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,

    /// Field type
    pub field_type: FieldType,

    /// Example value
    pub example: Option<String>,
}

/// Supported field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// String or integer of any width
    Scalar,
    /// Free text
    Text,
    /// List of values joined with `,`
    List,
}

impl EventSchema {
    /// Creates an empty schema for `kind`.
    #[must_use]
    pub fn new(kind: EventKind, description: &str) -> Self {
        Self {
            kind,
            description: description.to_string(),
            level: kind.level(),
            required_fields: Vec::new(),
            optional_fields: Vec::new(),
        }
    }

    /// Adds a required field with an example value.
    #[must_use]
    pub fn required(mut self, name: &str, field_type: FieldType, example: &str) -> Self {
        self.required_fields
            .push(FieldDefinition::new(name, field_type).with_example(example));
        self
    }

    /// Adds an optional field with an example value.
    #[must_use]
    pub fn optional(mut self, name: &str, field_type: FieldType, example: &str) -> Self {
        self.optional_fields
            .push(FieldDefinition::new(name, field_type).with_example(example));
        self
    }

    /// Returns all field names, required first.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.required_fields
            .iter()
            .chain(&self.optional_fields)
            .map(|f| f.name.as_str())
    }
}

impl FieldDefinition {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            example: None,
        }
    }

    /// Sets an example value.
    #[must_use]
    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }
}

impl EventKind {
    /// Returns the field schema of this kind.
    ///
    /// `malicious_direct` is rendered by two formatters; its schema describes
    /// the direct object reference form.
    #[must_use]
    pub fn schema(self) -> EventSchema {
        use FieldType::{List, Scalar, Text};

        let schema = EventSchema::new(self, self.description());
        match self {
            Self::AuthnLoginSuccess
            | Self::AuthnLoginFail
            | Self::AuthnPasswordChange
            | Self::AuthnPasswordChangeFail
            | Self::SequenceFail
            | Self::SessionCreated
            | Self::SessionRenewed
            | Self::SessionUseAfterExpire
            | Self::SysStartup
            | Self::SysShutdown
            | Self::SysRestart => schema.required("userId", Scalar, "joebob1"),
            Self::AuthnLoginSuccessAfterFail => schema
                .required("userId", Scalar, "joebob1")
                .required("retries", Scalar, "2"),
            Self::AuthnLoginFailMax => schema
                .required("userId", Scalar, "joebob1")
                .optional("maxLimit", Scalar, "3"),
            Self::AuthnLoginLock => schema
                .required("userId", Scalar, "joebob1")
                .optional("reason", Scalar, "maxretries"),
            Self::AuthnImpossibleTravel => schema
                .required("userId", Scalar, "joebob1")
                .required("location1", Text, "US-OR")
                .required("location2", Text, "CN-SH"),
            Self::AuthnTokenCreated => schema
                .required("userId", Scalar, "app.foobarapi.prod")
                .required("entitlements", List, "create,read,update"),
            Self::AuthnTokenRevoked | Self::AuthnTokenReuse => schema
                .required("userId", Scalar, "app.foobarapi.prod")
                .optional("tokenId", Scalar, "xyz-abc-123-gfk"),
            Self::AuthnTokenDelete => schema.required("appId", Scalar, "foobarapi"),
            Self::AuthzFail => schema
                .required("userId", Scalar, "joebob1")
                .required("resource", Scalar, "resource"),
            Self::AuthzChange => schema
                .required("userId", Scalar, "joebob1")
                .required("from", Scalar, "user")
                .required("to", Scalar, "admin"),
            Self::AuthzAdmin => schema
                .required("userId", Scalar, "joebob1")
                .required("event", Text, "user_privilege_change"),
            Self::ExcessRateLimitExceeded => schema
                .required("userId", Scalar, "app.foobarapi.prod")
                .required("max", Scalar, "100000"),
            Self::UploadComplete => schema
                .required("userId", Scalar, "joebob1")
                .required("filename", Text, "user_generated_content.png")
                .optional("type", Text, "PNG"),
            Self::UploadStored => schema
                .required("filename", Text, "user_generated_content.png")
                .required("to", Text, "kjsdhkrjhwijhsiuhdf000010202002"),
            Self::UploadValidation => schema
                .required("filename", Text, "filename")
                .required("vendor", Text, "virusscan")
                .required("status", Text, "FAILED"),
            Self::UploadDelete => schema
                .required("userId", Scalar, "joebob1")
                .required("fileId", Scalar, "32"),
            Self::InputValidationFail => schema
                .required("field", Text, "date_of_birth")
                .required("userId", Scalar, "joebob1"),
            Self::MaliciousExcess404 => schema
                .required("userIdOrIp", Scalar, "123.456.789.101")
                .required("userAgent", Text, "M@l1c10us-Hax0rB0t0-v1"),
            Self::MaliciousDirect => schema
                .required("userIdOrIp", Scalar, "joebob1")
                .required("userAgent", Text, "Mozilla/5.0"),
            Self::MaliciousExtraneous => schema
                .required("userIdOrIp", Scalar, "dr@evil.com")
                .required("inputName", Text, "creditcardnum")
                .required("userAgent", Text, "Mozilla/5.0"),
            Self::MaliciousAttackTool => schema
                .required("userIdOrIp", Scalar, "127.0.0.1")
                .required("toolName", Text, "nikto")
                .required("userAgent", Text, "Mozilla/5.0"),
            Self::MaliciousCors => schema
                .required("userIdOrIp", Scalar, "127.0.0.1")
                .required("userAgent", Text, "Mozilla/5.0")
                .required("referer", Text, "http://attack.evil.com"),
            Self::SensitiveCreate
            | Self::SensitiveRead
            | Self::SensitiveUpdate
            | Self::SensitiveDelete => schema
                .required("userId", Scalar, "joebob1")
                .required("fileOrObject", Text, "/users/admin/some/important/path"),
            Self::SessionExpired => schema
                .required("userId", Scalar, "joebob1")
                .required("reason", Text, "revoked"),
            Self::SysCrash => schema.required("reason", Text, "outofmemory"),
            Self::SysMonitorDisabled | Self::SysMonitorEnabled => schema
                .required("userId", Scalar, "joebob1")
                .required("agent", Text, "crowdstrike"),
            Self::UserCreated | Self::UserUpdated => schema
                .required("userId", Scalar, "joebob1")
                .required("newUserId", Scalar, "user1")
                .required("role", Text, "admin")
                .optional("attributes", List, "email,name"),
            Self::UserArchived => schema
                .required("userId", Scalar, "joebob1")
                .required("archivedUserId", Scalar, "user1"),
            Self::UserDeleted => schema
                .required("userId", Scalar, "joebob1")
                .required("deletedUserId", Scalar, "user1"),
        }
    }

    /// One-line description of what the event records.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthnLoginSuccess => "Successful login",
            Self::AuthnLoginSuccessAfterFail => "Successful login after previous failures",
            Self::AuthnLoginFail => "Failed login",
            Self::AuthnLoginFailMax => "Login failure limit reached",
            Self::AuthnLoginLock => "Account locked",
            Self::AuthnPasswordChange => "Password changed",
            Self::AuthnPasswordChangeFail => "Password change failed",
            Self::AuthnImpossibleTravel => "Same user seen in two distant locations",
            Self::AuthnTokenCreated => "Service access token created",
            Self::AuthnTokenRevoked => "Token revoked",
            Self::AuthnTokenReuse => "Revoked token used again",
            Self::AuthnTokenDelete => "Application token deleted",
            Self::AuthzFail => "Unauthorized resource access attempt",
            Self::AuthzChange => "Entitlements changed",
            Self::AuthzAdmin => "Privileged user activity",
            Self::ExcessRateLimitExceeded => "Service limit ceiling exceeded",
            Self::UploadComplete => "File upload completed",
            Self::UploadStored => "Uploaded file stored under a new name",
            Self::UploadValidation => "Uploaded file validated",
            Self::UploadDelete => "File deleted",
            Self::InputValidationFail => "Server-side input validation failed",
            Self::MaliciousExcess404 => "Excessive requests for missing files",
            Self::MaliciousExtraneous => "Unexpected input submitted",
            Self::MaliciousAttackTool => "Attack tool identified",
            Self::MaliciousCors => "Request from unauthorized origin",
            Self::MaliciousDirect => "Direct object reference attempt",
            Self::SensitiveCreate => "Sensitive data created",
            Self::SensitiveRead => "Sensitive data read",
            Self::SensitiveUpdate => "Sensitive data updated",
            Self::SensitiveDelete => "Sensitive data marked for deletion",
            Self::SequenceFail => "Application reached out of sequence",
            Self::SessionCreated => "Session created",
            Self::SessionRenewed => "Session renewed",
            Self::SessionExpired => "Session expired",
            Self::SessionUseAfterExpire => "Expired session used",
            Self::SysStartup => "System started",
            Self::SysShutdown => "System shut down",
            Self::SysRestart => "System restarted",
            Self::SysCrash => "System crashed",
            Self::SysMonitorDisabled => "Monitoring agent disabled",
            Self::SysMonitorEnabled => "Monitoring agent enabled",
            Self::UserCreated => "User account created",
            Self::UserUpdated => "User account updated",
            Self::UserArchived => "User account archived",
            Self::UserDeleted => "User account deleted",
        }
    }
}

//! Integration tests for the event catalog.
//!
//! Every formatter is checked against the exact string the vocabulary
//! defines, including the literal prefixes that differ from function names.

use logvocab_core::*;

/// One rendered event per formatter, with the kind it must carry.
#[rustfmt::skip]
fn catalog() -> Vec<(String, &'static str, EventKind)> {
    vec![
        (authn_login_success("joebob1"), "authn_login_success:joebob1", EventKind::AuthnLoginSuccess),
        (authn_login_successafterfail("joebob1", 2), "authn_login_successafterfail:joebob1,2", EventKind::AuthnLoginSuccessAfterFail),
        (authn_login_fail("joebob1"), "authn_login_fail:joebob1", EventKind::AuthnLoginFail),
        (authn_login_fail_max("joebob1"), "authn_login_fail_max:joebob1", EventKind::AuthnLoginFailMax),
        (authn_login_fail_max_with_limit("joebob1", 3), "authn_login_fail_max:joebob1,3", EventKind::AuthnLoginFailMax),
        (authn_login_lock("joebob1"), "authn_login_lock:joebob1", EventKind::AuthnLoginLock),
        (authn_login_lock_with_reason("joebob1", "maxretries"), "authn_login_lock:joebob1,maxretries", EventKind::AuthnLoginLock),
        (authn_password_change("joebob1"), "authn_password_change:joebob1", EventKind::AuthnPasswordChange),
        (authn_password_change_fail("joebob1"), "authn_password_change_fail:joebob1", EventKind::AuthnPasswordChangeFail),
        (authn_impossible_travel("joebob1", "US-OR", "CN-SH"), "authn_impossible_travel:joebob1,US-OR,CN-SH", EventKind::AuthnImpossibleTravel),
        (authn_token_created("app.foobarapi.prod", ["create", "read", "update"]), "authn_token_created:app.foobarapi.prod,create,read,update", EventKind::AuthnTokenCreated),
        (authn_token_revoked("app.foobarapi.prod"), "authn_token_revoked:app.foobarapi.prod", EventKind::AuthnTokenRevoked),
        (authn_token_revoked_with_token("app.foobarapi.prod", "xyz-abc-123-gfk"), "authn_token_revoked:app.foobarapi.prod,xyz-abc-123-gfk", EventKind::AuthnTokenRevoked),
        (authn_token_reuse("app.foobarapi.prod"), "authn_token_reuse:app.foobarapi.prod", EventKind::AuthnTokenReuse),
        (authn_token_reuse_with_token("app.foobarapi.prod", "xyz-abc-123-gfk"), "authn_token_reuse:app.foobarapi.prod,xyz-abc-123-gfk", EventKind::AuthnTokenReuse),
        (authn_token_delete("foobarapi"), "authn_token_delete:foobarapi", EventKind::AuthnTokenDelete),
        (authz_fail("joebob1", "resource"), "authz_fail:joebob1,resource", EventKind::AuthzFail),
        (authz_change("joebob1", "user", "admin"), "authz_change:joebob1,user,admin", EventKind::AuthzChange),
        (authz_admin("joebob1", "user_privilege_change"), "authz_admin:joebob1,user_privilege_change", EventKind::AuthzAdmin),
        (excess_rate_limit_exceeded("app.foobarapi.prod", 100_000), "excess_rate_limit_exceeded:app.foobarapi.prod,100000", EventKind::ExcessRateLimitExceeded),
        (upload_complete("joebob1", "user_generated_content.png"), "upload_complete:joebob1,user_generated_content.png", EventKind::UploadComplete),
        (upload_complete_with_type("joebob1", "user_generated_content.png", "PNG"), "upload_complete:joebob1,user_generated_content.png,PNG", EventKind::UploadComplete),
        (upload_stored("user_generated_content.png", "kjsdhkrjhwijhsiuhdf000010202002"), "upload_stored:user_generated_content.png,kjsdhkrjhwijhsiuhdf000010202002", EventKind::UploadStored),
        (upload_validation("filename", "virusscan", "FAILED"), "upload_validation:filename,virusscan,FAILED", EventKind::UploadValidation),
        (upload_delete("joebob1", 32), "upload_delete:joebob1,32", EventKind::UploadDelete),
        (input_validation_fail("date_of_birth", "joebob1"), "input_validation_fail:date_of_birth,joebob1", EventKind::InputValidationFail),
        (malicious_excess_404("123.456.789.101", "M@l1c10us-Hax0rB0t0-v1"), "malicious_excess404:123.456.789.101,M@l1c10us-Hax0rB0t0-v1", EventKind::MaliciousExcess404),
        (malicious_extraneous("dr@evil.com", "creditcardnum", "Mozilla/5.0"), "malicious_extraneous:dr@evil.com,creditcardnum,Mozilla/5.0", EventKind::MaliciousExtraneous),
        (malicious_attack_tool("127.0.0.1", "nikto", "Mozilla/5.0"), "malicious_attack_tool:127.0.0.1,nikto,Mozilla/5.0", EventKind::MaliciousAttackTool),
        (malicious_cors("127.0.0.1", "Mozilla/5.0", "http://attack.evil.com"), "malicious_cors:127.0.0.1,Mozilla/5.0,http://attack.evil.com", EventKind::MaliciousCors),
        (malicious_direct_reference("joebob1", "Mozilla/5.0"), "malicious_direct:joebob1,Mozilla/5.0", EventKind::MaliciousDirect),
        (privilege_permissions_changed("joebob1", "/users/admin/some/important/path", "0511", "0777"), "malicious_direct:joebob1, /users/admin/some/important/path,0511,0777", EventKind::MaliciousDirect),
        (sensitive_create("joebob1", "/users/admin/some/important/path"), "sensitive_create:joebob1, /users/admin/some/important/path", EventKind::SensitiveCreate),
        (sensitive_read("joebob1", "/users/admin/some/important/path"), "sensitive_read:joebob1, /users/admin/some/important/path", EventKind::SensitiveRead),
        (sensitive_update("joebob1", "/users/admin/some/important/path"), "sensitive_update:joebob1, /users/admin/some/important/path", EventKind::SensitiveUpdate),
        (sensitive_delete("joebob1", "/users/admin/some/important/path"), "sensitive_delete:joebob1, /users/admin/some/important/path", EventKind::SensitiveDelete),
        (sequence_fail("joebob1"), "sequence_fail:joebob1", EventKind::SequenceFail),
        (session_created("joebob1"), "session_created:joebob1", EventKind::SessionCreated),
        (session_renewed("joebob1"), "session_renewed:joebob1", EventKind::SessionRenewed),
        (session_expired("joebob1", "revoked"), "session_expired:joebob1,revoked", EventKind::SessionExpired),
        (session_use_after_expire("joebob1"), "session_use_after_expire:joebob1", EventKind::SessionUseAfterExpire),
        (sys_startup("joebob1"), "sys_startup:joebob1", EventKind::SysStartup),
        (sys_shutdown("joebob1"), "sys_shutdown:joebob1", EventKind::SysShutdown),
        (sys_restarted("joebob1"), "sys_restart:joebob1", EventKind::SysRestart),
        (sys_crash("outofmemory"), "sys_crash:outofmemory", EventKind::SysCrash),
        (sys_monitor_disabled("joebob1", "crowdstrike"), "sys_monitor_disabled:joebob1,crowdstrike", EventKind::SysMonitorDisabled),
        (sys_monitor_enabled("joebob1", "crowdstrike"), "sys_monitor_enabled:joebob1,crowdstrike", EventKind::SysMonitorEnabled),
        (user_created("joebob1", "user1", "admin"), "user_created:joebob1,user1,admin", EventKind::UserCreated),
        (user_created_with_attributes("joebob1", "user1", "admin", ["email", "name"]), "user_created:joebob1,user1,admin:email,name", EventKind::UserCreated),
        (user_updated("joebob1", "user1", "admin"), "user_updated:joebob1,user1,admin", EventKind::UserUpdated),
        (user_updated_with_attributes("joebob1", "user1", "admin", ["email"]), "user_updated:joebob1,user1,admin:email", EventKind::UserUpdated),
        (user_archived("joebob1", "user1"), "user_archived:joebob1,user1", EventKind::UserArchived),
        (user_deleted("joebob1", "user1"), "user_deleted:joebob1,user1", EventKind::UserDeleted),
    ]
}

#[test]
fn test_catalog_strings() {
    for (actual, expected, _) in catalog() {
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_catalog_kinds() {
    for (event, _, kind) in catalog() {
        assert_eq!(EventKind::of_event(&event).unwrap(), kind, "{event}");
    }
}

#[test]
fn test_catalog_covers_every_kind() {
    let rendered: Vec<EventKind> = catalog().into_iter().map(|(_, _, kind)| kind).collect();
    for kind in EventKind::ALL {
        assert!(rendered.contains(kind), "{kind} has no formatter");
    }
}

#[test]
fn test_schema_arity_matches_short_forms() {
    // Fields without commas or spaces, so every separator is structural.
    let short_forms = [
        authn_login_success("u"),
        authn_login_successafterfail("u", 1),
        authn_login_fail_max("u"),
        authn_impossible_travel("u", "a", "b"),
        authz_change("u", "a", "b"),
        upload_complete("u", "f"),
        upload_validation("f", "v", "s"),
        malicious_cors("u", "a", "r"),
        sys_crash("r"),
        user_created("u", "n", "r"),
        user_deleted("u", "n"),
    ];

    for event in short_forms {
        let kind = EventKind::of_event(&event).unwrap();
        let (_, fields) = event.split_once(':').unwrap();
        assert_eq!(
            fields.split(',').count(),
            kind.schema().required_fields.len(),
            "{event}"
        );
    }
}

#[test]
fn test_scalar_equivalence() {
    assert_eq!(sequence_fail("123"), sequence_fail(123));
    assert_eq!(sequence_fail(123), sequence_fail(123_u128));
    assert_eq!(
        user_archived(u128::MAX, 1),
        format!("user_archived:{},1", u128::MAX)
    );
}

#[test]
fn test_record_from_catalog_event() {
    let recorder = Recorder::new(RecorderConfig::new("foobar.netportal_auth"));
    let record = recorder
        .record(
            authz_fail("joebob1", "resource"),
            "User joebob1 attempted to access a resource without entitlement",
        )
        .unwrap();

    assert_eq!(record.level, EventLevel::Critical);
    assert_eq!(record.kind().unwrap().category(), Category::Authorization);

    let json = record.to_json().unwrap();
    assert!(json.contains("\"event\":\"authz_fail:joebob1,resource\""));
    assert!(json.contains("\"appid\":\"foobar.netportal_auth\""));
}

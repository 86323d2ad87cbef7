use shop_env::{
    AmbientSignals, Environment, InMemoryMemberStore, InMemoryUserStore, Member, MemberId,
    MemberStore, ScriptKind, User, UserId,
};
use std::sync::Arc;

fn member_store() -> InMemoryMemberStore {
    InMemoryMemberStore::new()
        .with_member(
            Member::new(MemberId::new(10).unwrap(), "customer")
                .with_email("customer@example.com")
                .with_groups(r#"a:3:{i:0;s:1:"1";i:1;s:1:"4";i:2;i:8;}"#),
        )
        .with_member(Member::new(MemberId::new(11).unwrap(), "broken").with_groups("b:1;"))
}

fn user_store() -> InMemoryUserStore {
    InMemoryUserStore::new().with_user(
        User::new(UserId::new(1).unwrap(), "admin")
            .with_admin(true)
            .with_groups(r#"["2","3"]"#),
    )
}

#[test]
fn test_anonymous_cron_run() {
    let signals = AmbientSignals::anonymous().with_script("/system/cron/cron.php");
    let env = Environment::from_signals(&signals, member_store(), user_store());

    assert!(!env.has_member());
    assert!(!env.has_user());
    assert!(!env.can_see_unpublished());
    assert!(!env.is_frontend_preview());
    assert!(env.is_cron_script());
    assert!(!env.is_install_script());
    assert!(!env.is_postsale_script());
}

#[test]
fn test_logged_in_member_with_backend_preview() {
    let signals = AmbientSignals::anonymous()
        .with_member(MemberId::new(10).unwrap())
        .with_user(UserId::new(1).unwrap())
        .with_backend_login(true)
        .with_preview(true)
        .with_script("/index.php");

    let env = Environment::from_signals(&signals, member_store(), user_store());

    assert_eq!(env.member().unwrap().email.as_deref(), Some("customer@example.com"));
    assert_eq!(env.member_groups(), vec!["1", "4", "8"]);
    assert_eq!(env.user_groups(), vec!["2", "3"]);
    assert!(env.can_see_unpublished());
    assert!(env.is_frontend_preview());
    assert_eq!(env.script_kind(), None);
}

#[test]
fn test_member_with_non_sequence_groups() {
    let signals = AmbientSignals::anonymous().with_member(MemberId::new(11).unwrap());
    let env = Environment::from_signals(&signals, member_store(), user_store());

    assert!(env.has_member());
    assert!(env.member_groups().is_empty());
}

#[test]
fn test_script_markers_anywhere_in_path() {
    let cases = [
        ("/install.php", ScriptKind::Install),
        ("/contao/install.php?step=2", ScriptKind::Install),
        ("/shop/system/modules/isotope/postsale.php?mod=payment&id=1", ScriptKind::Postsale),
        ("/index.php?from=postsale.php", ScriptKind::Postsale),
        ("cron.php", ScriptKind::Cron),
        ("/var/www/my-cron.php-backup/index.php", ScriptKind::Cron),
    ];

    for (path, kind) in cases {
        let env = Environment::from_signals(
            &AmbientSignals::anonymous().with_script(path),
            member_store(),
            user_store(),
        );
        assert_eq!(env.script_kind(), Some(kind), "path {path}");
        assert_eq!(env.is_install_script(), kind == ScriptKind::Install, "path {path}");
        assert_eq!(env.is_postsale_script(), kind == ScriptKind::Postsale, "path {path}");
        assert_eq!(env.is_cron_script(), kind == ScriptKind::Cron, "path {path}");
    }
}

#[test]
fn test_set_member_without_reset() {
    let mut env = Environment::new(member_store(), user_store());
    assert!(!env.has_member());

    let member = Member::new(MemberId::new(50).unwrap(), "walk-in").with_groups("a:1:{i:0;i:6;}");
    assert!(env.set_member(member).has_member());
    assert_eq!(env.member_groups(), vec!["6"]);
}

#[test]
fn test_shared_stores_between_requests() {
    let members: Arc<dyn MemberStore> = Arc::new(member_store());
    let users = Arc::new(user_store());

    let first = Environment::from_signals(
        &AmbientSignals::anonymous().with_member(MemberId::new(10).unwrap()),
        Arc::clone(&members),
        Arc::clone(&users),
    );
    let second = Environment::from_signals(&AmbientSignals::anonymous(), members, users);

    assert!(first.has_member());
    assert!(!second.has_member());
}

#[test]
fn test_report_json() {
    let signals = AmbientSignals::anonymous()
        .with_user(UserId::new(1).unwrap())
        .with_script("/postsale.php");
    let env = Environment::from_signals(&signals, member_store(), user_store());

    let json = serde_json::to_value(env.report()).unwrap();
    assert_eq!(json["script_kind"], "postsale");
    assert_eq!(json["user"]["username"], "admin");
    assert_eq!(json["user"]["admin"], true);
    assert_eq!(json["member"], serde_json::Value::Null);
    assert_eq!(json["user_groups"], serde_json::json!(["2", "3"]));
}

#[test]
fn test_stored_groups_with_trailing_newline() {
    let mut env = Environment::new(member_store(), user_store());
    env.set_member(
        Member::new(MemberId::new(12).unwrap(), "imported")
            .with_groups("a:2:{i:0;s:1:\"2\";i:1;s:1:\"5\";}\n"),
    );
    env.set_user(User::new(UserId::new(9).unwrap(), "padded").with_groups(" a:1:{i:0;i:3;}"));

    assert_eq!(env.member_groups(), vec!["2", "5"]);
    assert!(env.user_groups().is_empty());
}

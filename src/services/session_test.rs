use super::*;

fn guard() -> SessionGuard {
    SessionGuard::initialize(KvStore::in_memory())
}

// =============================================================================
// UserRecord derivation
// =============================================================================

#[test]
fn user_record_name_is_email_local_part() {
    let user = UserRecord::from_identifier("alice@example.com");
    assert_eq!(user.name, "alice");
    assert_eq!(user.email, "alice@example.com");
}

#[test]
fn user_record_without_at_uses_whole_identifier() {
    let user = UserRecord::from_identifier("alice");
    assert_eq!(user.name, "alice");
    assert_eq!(user.email, "alice");
}

#[test]
fn user_record_constants() {
    let user = UserRecord::from_identifier("bob@example.com");
    assert_eq!(user.id, "1");
    assert_eq!(user.role, "Admin");
}

#[test]
fn user_record_avatar_embeds_name() {
    let user = UserRecord::from_identifier("carol@example.com");
    assert_eq!(user.avatar_url, "https://ui-avatars.com/api/?name=carol&background=random");
}

// =============================================================================
// login / logout transitions
// =============================================================================

#[test]
fn fresh_guard_is_logged_out() {
    let guard = guard();
    assert!(!guard.is_authenticated());
    assert_eq!(guard.current_user(), None);
}

#[test]
fn login_authenticates() {
    let guard = guard();
    guard.login("alice@example.com", "x");
    assert!(guard.is_authenticated());
}

#[test]
fn login_returns_current_user() {
    let guard = guard();
    let user = guard.login("alice@example.com", "x");
    assert_eq!(guard.current_user(), Some(user));
}

#[test]
fn logout_clears_session() {
    let guard = guard();
    guard.login("alice@example.com", "x");
    guard.logout();
    assert!(!guard.is_authenticated());
    assert_eq!(guard.current_user(), None);
}

#[test]
fn logout_is_idempotent() {
    let guard = guard();
    guard.login("alice@example.com", "x");
    guard.logout();
    guard.logout();
    assert!(!guard.is_authenticated());
}

#[test]
fn logout_without_login_is_noop() {
    let guard = guard();
    guard.logout();
    assert!(!guard.is_authenticated());
}

#[test]
fn second_login_replaces_user() {
    let guard = guard();
    guard.login("alice@example.com", "x");
    let user = guard.login("bob@example.com", "y");
    assert_eq!(user.name, "bob");
    assert_eq!(guard.current_user().unwrap().email, "bob@example.com");
}

// =============================================================================
// persistence across restarts (shared store simulates one)
// =============================================================================

#[test]
fn login_survives_restart() {
    let store = KvStore::in_memory();
    let first = SessionGuard::initialize(store.clone());
    let user = first.login("alice@example.com", "x");

    let restarted = SessionGuard::initialize(store);
    assert!(restarted.is_authenticated());
    assert_eq!(restarted.current_user(), Some(user));
}

#[test]
fn logout_survives_restart() {
    let store = KvStore::in_memory();
    let first = SessionGuard::initialize(store.clone());
    first.login("alice@example.com", "x");
    first.logout();

    let restarted = SessionGuard::initialize(store);
    assert!(!restarted.is_authenticated());
}

#[test]
fn login_writes_both_store_keys() {
    let store = KvStore::in_memory();
    let guard = SessionGuard::initialize(store.clone());
    guard.login("alice@example.com", "x");

    assert_eq!(store.get(AUTH_KEY), Some(AUTH_VALID.to_owned()));
    let raw = store.get(USER_KEY).unwrap();
    let user: UserRecord = serde_json::from_str(&raw).unwrap();
    assert_eq!(user.name, "alice");
}

#[test]
fn logout_removes_both_store_keys() {
    let store = KvStore::in_memory();
    let guard = SessionGuard::initialize(store.clone());
    guard.login("alice@example.com", "x");
    guard.logout();

    assert_eq!(store.get(AUTH_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

// =============================================================================
// malformed persisted state degrades to logged out
// =============================================================================

#[test]
fn flag_without_user_record_is_logged_out() {
    let store = KvStore::in_memory();
    store.set(AUTH_KEY, AUTH_VALID);

    let guard = SessionGuard::initialize(store);
    assert!(!guard.is_authenticated());
}

#[test]
fn user_record_without_flag_is_logged_out() {
    let store = KvStore::in_memory();
    let user = UserRecord::from_identifier("alice@example.com");
    store.set(USER_KEY, &serde_json::to_string(&user).unwrap());

    let guard = SessionGuard::initialize(store);
    assert!(!guard.is_authenticated());
}

#[test]
fn wrong_flag_value_is_logged_out() {
    let store = KvStore::in_memory();
    let user = UserRecord::from_identifier("alice@example.com");
    store.set(USER_KEY, &serde_json::to_string(&user).unwrap());
    store.set(AUTH_KEY, "yes");

    let guard = SessionGuard::initialize(store);
    assert!(!guard.is_authenticated());
}

#[test]
fn malformed_user_record_is_logged_out() {
    let store = KvStore::in_memory();
    store.set(USER_KEY, "{not valid json");
    store.set(AUTH_KEY, AUTH_VALID);

    let guard = SessionGuard::initialize(store);
    assert!(!guard.is_authenticated());
}

#[test]
fn partial_user_record_is_logged_out() {
    let store = KvStore::in_memory();
    store.set(USER_KEY, r#"{"id":"1","name":"alice"}"#);
    store.set(AUTH_KEY, AUTH_VALID);

    let guard = SessionGuard::initialize(store);
    assert!(!guard.is_authenticated());
}

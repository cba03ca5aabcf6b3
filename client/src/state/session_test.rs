use super::*;
use crate::error::ResolveError;
use crate::state::current_user::{CurrentUserState, resolve_current_user};
use crate::test_support::{spawn_default_gateway, spawn_gateway};
use server::state::Catalog;

async fn live_session() -> Arc<Session> {
    let base_url = spawn_default_gateway().await;
    Arc::new(Session::new(ApiClient::new(&base_url).unwrap()))
}

// =============================================================
// Login / logout
// =============================================================

#[tokio::test]
async fn new_session_is_unauthenticated() {
    let session = live_session().await;
    assert!(!session.is_authenticated());
    assert_eq!(session.access_token(), None);
}

#[tokio::test]
async fn authenticate_stores_token_and_flips_flag() {
    let session = live_session().await;
    let mut flag = session.subscribe();

    session.authenticate("login", "password").await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.access_token().as_deref(), Some("some bs"));
    assert!(flag.has_changed().unwrap());
    assert!(*flag.borrow_and_update());
}

#[tokio::test]
async fn rejected_login_leaves_session_untouched() {
    let session = live_session().await;
    let err = session.authenticate("login", "letmein").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidGrant), "got {err:?}");
    assert!(!session.is_authenticated());
    assert_eq!(session.access_token(), None);
}

#[tokio::test]
async fn invalidate_clears_token() {
    let session = live_session().await;
    session.authenticate("login", "password").await.unwrap();
    session.invalidate();
    assert!(!session.is_authenticated());
    assert_eq!(session.access_token(), None);
}

#[tokio::test]
async fn repeated_login_does_not_notify_again() {
    let session = live_session().await;
    session.authenticate("login", "password").await.unwrap();
    let flag = session.subscribe();
    session.authenticate("login", "password").await.unwrap();
    assert!(!flag.has_changed().unwrap());
}

// =============================================================
// Authorized reads
// =============================================================

#[tokio::test]
async fn codes_require_login_without_request() {
    let session = live_session().await;
    let err = session.codes().await.unwrap_err();
    assert!(matches!(err, ClientError::NotAuthenticated), "got {err:?}");
}

#[tokio::test]
async fn codes_after_login() {
    let session = live_session().await;
    session.authenticate("login", "password").await.unwrap();
    let codes = session.codes().await.unwrap();
    assert_eq!(codes.len(), 2);
    assert_eq!(codes[0].id, "1");
    assert_eq!(codes[0].description, "Bitcoin keeps hitting record highs");
    assert_eq!(codes[1].id, "2");
}

#[tokio::test]
async fn codes_unavailable_after_invalidate() {
    let session = live_session().await;
    session.authenticate("login", "password").await.unwrap();
    session.invalidate();
    assert!(matches!(session.codes().await, Err(ClientError::NotAuthenticated)));
}

// =============================================================
// Current user
// =============================================================

#[tokio::test]
async fn resolve_directly_against_gateway() {
    let session = live_session().await;
    assert_eq!(resolve_current_user(session.as_ref(), session.is_authenticated()).await, Ok(None));

    session.authenticate("login", "password").await.unwrap();
    let user = resolve_current_user(session.as_ref(), session.is_authenticated()).await.unwrap();
    assert_eq!(user, Some(User::new("1", "test@example.com")));
}

#[tokio::test]
async fn current_user_follows_login_and_logout() {
    let session = live_session().await;
    let current = session.current_user();
    assert_eq!(current.state(), CurrentUserState::Anonymous);

    session.authenticate("login", "password").await.unwrap();
    let state = current.wait_for(|s| matches!(s, CurrentUserState::Resolved(_))).await;
    assert_eq!(state, CurrentUserState::Resolved(User::new("1", "test@example.com")));

    session.invalidate();
    let state = current.wait_for(|s| matches!(s, CurrentUserState::Anonymous)).await;
    assert_eq!(state, CurrentUserState::Anonymous);
}

#[tokio::test]
async fn current_user_after_login_starts_pending() {
    let session = live_session().await;
    session.authenticate("login", "password").await.unwrap();
    let current = session.current_user();
    assert_eq!(current.state(), CurrentUserState::Pending);
    assert_eq!(current.settled().await.user().map(|u| u.id.clone()), Some("1".to_owned()));
}

#[tokio::test]
async fn empty_user_collection_fails_with_no_match() {
    let base_url = spawn_gateway(Catalog { users: Vec::new(), codes: Vec::new() }).await;
    let session = Arc::new(Session::new(ApiClient::new(&base_url).unwrap()));
    session.authenticate("login", "password").await.unwrap();

    let current = session.current_user();
    assert_eq!(current.settled().await, CurrentUserState::Failed(ResolveError::NoMatch));
}

#[tokio::test]
async fn login_then_codes_scenario() {
    let session = live_session().await;
    session.authenticate("login", "password").await.unwrap();
    assert_eq!(session.access_token().as_deref(), Some("some bs"));
    let ids: Vec<String> = session.codes().await.unwrap().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, ["1", "2"]);
}

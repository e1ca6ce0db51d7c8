use super::*;
use gate::RoleParseError;

fn user(email: &str, role: &str) -> SessionUser {
    SessionUser {
        id: "u-7".to_owned(),
        email: email.to_owned(),
        display_name: Some("Sam".to_owned()),
        role: role.to_owned(),
    }
}

fn config() -> AppConfig {
    AppConfig { admin_emails: vec!["admin@learnhub.edu".to_owned()], ..AppConfig::default() }
}

#[test]
fn new_session_is_pending() {
    let session = AuthSession::pending();
    assert!(session.status.loading());
    assert_eq!(session.role(), None);
    assert_eq!(session.display_name(), None);
}

#[test]
fn resolved_user_is_signed_in_with_claimed_role() {
    let session = session_from_resolution(Ok(Some(user("sam@learnhub.edu", "student"))), &config());
    assert_eq!(session.status, AuthState::signed_in(Role::Student));
    assert_eq!(session.display_name(), Some("Sam"));
}

#[test]
fn listed_admin_is_promoted() {
    let session = session_from_resolution(Ok(Some(user("Admin@LearnHub.edu", "lecturer"))), &config());
    assert_eq!(session.role(), Some(Role::Admin));
}

#[test]
fn no_session_signs_out() {
    assert_eq!(session_from_resolution(Ok(None), &config()), AuthSession::signed_out());
}

#[test]
fn failures_sign_out() {
    let session = session_from_resolution(Err(AuthError::Network("offline".to_owned())), &config());
    assert_eq!(session, AuthSession::signed_out());
    assert!(!session.status.loading());
    assert!(!session.status.is_authenticated());

    let malformed = session_from_resolution(Err(AuthError::MalformedIdentity(RoleParseError("x".to_owned()))), &config());
    assert_eq!(malformed, AuthSession::signed_out());
}

#[test]
fn unknown_role_signs_out() {
    let session = session_from_resolution(Ok(Some(user("sam@learnhub.edu", "dean"))), &config());
    assert_eq!(session, AuthSession::signed_out());
}

struct FixedResolver(Option<SessionUser>);

impl AuthResolver for FixedResolver {
    async fn resolve(&self) -> Result<Option<SessionUser>, AuthError> {
        Ok(self.0.clone())
    }
}

#[test]
fn resolver_output_feeds_session() {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let resolver = FixedResolver(Some(user("lee@learnhub.edu", "lecturer")));
    let mut future = pin!(resolver.resolve());
    let Poll::Ready(result) = future.as_mut().poll(&mut Context::from_waker(Waker::noop())) else {
        panic!("fixed resolver should be ready immediately");
    };
    assert_eq!(session_from_resolution(result, &config()).role(), Some(Role::Lecturer));
}

use super::*;
use crate::net::types::SessionUser;

fn session(role: Role) -> AuthSession {
    AuthSession::signed_in(
        SessionUser {
            id: "u-9".to_owned(),
            email: "jo@learnhub.edu".to_owned(),
            display_name: Some("Jo".to_owned()),
            role: role.as_str().to_owned(),
        },
        role,
    )
}

#[test]
fn greeting_includes_role_label() {
    assert_eq!(greeting(&session(Role::Admin)), "Hello, Jo (Administrator)");
    assert_eq!(greeting(&AuthSession::pending()), "Hello");
}

#[test]
fn every_role_has_tiles() {
    for role in Role::ALL {
        assert!(!tiles_for(role).is_empty(), "{role} has no tiles");
    }
    assert_eq!(tiles_for(Role::Student)[0].title, "My courses");
}

#[test]
fn lecturer_area_admits_admins() {
    assert!(LECTURER_AREA_ROLES.contains(&Role::Admin));
    assert!(!LECTURER_AREA_ROLES.contains(&Role::Student));
}

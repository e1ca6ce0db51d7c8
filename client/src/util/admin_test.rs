use super::*;

fn admins() -> Vec<String> {
    vec!["admin@learnhub.edu".to_owned(), "registrar@learnhub.edu".to_owned()]
}

#[test]
fn listed_email_is_admin() {
    assert!(is_admin_email("admin@learnhub.edu", &admins()));
}

#[test]
fn lookup_ignores_case_and_whitespace() {
    assert!(is_admin_email("  Registrar@LearnHub.EDU ", &admins()));
}

#[test]
fn unlisted_and_empty_emails_are_not_admin() {
    assert!(!is_admin_email("student@learnhub.edu", &admins()));
    assert!(!is_admin_email("   ", &admins()));
    assert!(!is_admin_email("admin@learnhub.edu", &[]));
}

#[test]
fn effective_role_promotes_listed_accounts() {
    assert_eq!(effective_role(Role::Student, "admin@learnhub.edu", &admins()), Role::Admin);
}

#[test]
fn effective_role_keeps_claimed_role_otherwise() {
    assert_eq!(effective_role(Role::Lecturer, "prof@learnhub.edu", &admins()), Role::Lecturer);
    assert_eq!(effective_role(Role::Admin, "prof@learnhub.edu", &admins()), Role::Admin);
}

use super::*;

#[test]
fn role_picker_offers_only_self_service_roles() {
    assert_eq!(role_options(), vec![("student", "Student"), ("lecturer", "Lecturer")]);
}

#[test]
fn greeting_uses_first_name() {
    assert_eq!(
        account_created_message("Ada Lovelace", "LearnHub"),
        "Welcome to LearnHub, Ada! Your account is ready."
    );
    assert_eq!(account_created_message("Cher", "LearnHub"), "Welcome to LearnHub, Cher! Your account is ready.");
}

use super::*;

fn signup() -> SignupForm {
    SignupForm {
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@learnhub.edu".to_owned(),
        password: "Analytical1".to_owned(),
        confirm_password: "Analytical1".to_owned(),
        role: "student".to_owned(),
    }
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_valid_email("ada@learnhub.edu"));
    assert!(is_valid_email("first.last+tag@mail.uni.ac.uk"));
}

#[test]
fn rejects_malformed_addresses() {
    for bad in ["", "ada", "ada@", "@learnhub.edu", "ada@localhost", "a@b@c.edu", "ada @x.edu", "ada@.edu", "ada@x..edu", "ada@x.edu."] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn rejects_overlong_local_part() {
    let local = "a".repeat(65);
    assert!(!is_valid_email(&format!("{local}@x.edu")));
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_trims_and_lowercases_email() {
    let form = LoginForm { email: "  Ada@LearnHub.EDU ".to_owned(), password: "x".to_owned() };
    assert_eq!(
        form.validate(),
        Ok(Credentials { email: "ada@learnhub.edu".to_owned(), password: "x".to_owned() })
    );
}

#[test]
fn login_reports_every_missing_field() {
    let errors = LoginForm::default().validate().err().unwrap_or_default();
    assert_eq!(errors.get(Field::Email), Some("Email is required"));
    assert_eq!(errors.get(Field::Password), Some("Password is required"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn login_rejects_bad_email_shape() {
    let form = LoginForm { email: "ada".to_owned(), password: "secret".to_owned() };
    let errors = form.validate().err().unwrap_or_default();
    assert_eq!(errors.get(Field::Email), Some("Enter a valid email address"));
    assert_eq!(errors.get(Field::Password), None);
}

#[test]
fn login_does_not_apply_signup_password_rules() {
    let form = LoginForm { email: "ada@learnhub.edu".to_owned(), password: "short".to_owned() };
    assert!(form.validate().is_ok());
}

// =============================================================
// Signup
// =============================================================

#[test]
fn valid_signup_produces_typed_data() {
    let data = signup().validate();
    assert_eq!(
        data,
        Ok(SignupData {
            full_name: "Ada Lovelace".to_owned(),
            email: "ada@learnhub.edu".to_owned(),
            password: "Analytical1".to_owned(),
            role: Role::Student,
        })
    );
}

#[test]
fn signup_name_length_bounds() {
    let errors = SignupForm { full_name: " A ".to_owned(), ..signup() }.validate().err().unwrap_or_default();
    assert_eq!(errors.get(Field::FullName), Some("Full name must be at least 2 characters"));

    let errors = SignupForm { full_name: "x".repeat(61), ..signup() }.validate().err().unwrap_or_default();
    assert_eq!(errors.get(Field::FullName), Some("Full name must be at most 60 characters"));

    let errors = SignupForm { full_name: "   ".to_owned(), ..signup() }.validate().err().unwrap_or_default();
    assert_eq!(errors.get(Field::FullName), Some("Full name is required"));
}

#[test]
fn signup_password_rules_report_first_failure() {
    let cases = [
        ("", "Password is required"),
        ("Ab1", "Password must be at least 8 characters"),
        ("analytical1", "Password must contain an uppercase letter"),
        ("ANALYTICAL1", "Password must contain a lowercase letter"),
        ("Analytical", "Password must contain a number"),
    ];
    for (password, expected) in cases {
        let form = SignupForm {
            password: password.to_owned(),
            confirm_password: password.to_owned(),
            ..signup()
        };
        let errors = form.validate().err().unwrap_or_default();
        assert_eq!(errors.get(Field::Password), Some(expected), "password {password:?}");
    }
}

#[test]
fn signup_confirmation_must_match() {
    let errors = SignupForm { confirm_password: "Analytical2".to_owned(), ..signup() }
        .validate()
        .err()
        .unwrap_or_default();
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords do not match"));
    assert_eq!(errors.len(), 1);

    let errors = SignupForm { confirm_password: String::new(), ..signup() }.validate().err().unwrap_or_default();
    assert_eq!(errors.get(Field::ConfirmPassword), Some("Please confirm your password"));
}

#[test]
fn signup_role_must_be_self_service() {
    let lecturer = SignupForm { role: "Lecturer".to_owned(), ..signup() }.validate();
    assert_eq!(lecturer.map(|data| data.role), Ok(Role::Lecturer));

    for role in ["admin", "", "dean"] {
        let errors = SignupForm { role: role.to_owned(), ..signup() }.validate().err().unwrap_or_default();
        assert_eq!(errors.get(Field::Role), Some("Select a valid role"), "role {role:?}");
    }
}

#[test]
fn empty_signup_flags_every_field() {
    let errors = SignupForm::default().validate().err().unwrap_or_default();
    let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(
        fields,
        vec![Field::FullName, Field::Email, Field::Password, Field::ConfirmPassword, Field::Role]
    );
}

#[test]
fn field_names_match_form_inputs() {
    assert_eq!(Field::ConfirmPassword.name(), "confirm_password");
    assert_eq!(Field::FullName.name(), "full_name");
}

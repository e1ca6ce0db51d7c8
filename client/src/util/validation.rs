//! Signup and login form schemas.
//!
//! Each schema checks every field and reports the first failing rule per
//! field, so the form can show all problems at once.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use gate::Role;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 60;
const MIN_PASSWORD_LENGTH: usize = 8;

/// Roles a visitor may pick for themselves at signup.
pub const SELF_SERVICE_ROLES: [Role; 2] = [Role::Student, Role::Lecturer];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Role,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::Role => "role",
        }
    }
}

/// Field -> message for every field that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Record `message` unless the field already has one.
    fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Owned copy of the message, convenient for reactive closures.
    pub fn message(&self, field: Field) -> Option<String> {
        self.0.get(&field).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// Loose email shape check; the auth provider has the final word.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > MAX_LOCAL_PART_LENGTH || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') && !domain.contains("..")
}

fn check_email(raw: &str, errors: &mut FieldErrors) -> String {
    let email = raw.trim().to_ascii_lowercase();
    if email.is_empty() {
        errors.add(Field::Email, "Email is required");
    } else if !is_valid_email(&email) {
        errors.add(Field::Email, "Enter a valid email address");
    }
    email
}

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login input that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the per-field messages when any field is invalid.
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.add(Field::Password, "Password is required");
        }
        let password = self.password.clone();
        errors.into_result(|| Credentials { email, password })
    }
}

/// Raw signup form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

/// Signup input that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupData {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns the per-field messages when any field is invalid.
    pub fn validate(&self) -> Result<SignupData, FieldErrors> {
        let mut errors = FieldErrors::default();

        let full_name = self.full_name.trim().to_owned();
        let name_length = full_name.chars().count();
        if name_length == 0 {
            errors.add(Field::FullName, "Full name is required");
        } else if name_length < MIN_NAME_LENGTH {
            errors.add(Field::FullName, "Full name must be at least 2 characters");
        } else if name_length > MAX_NAME_LENGTH {
            errors.add(Field::FullName, "Full name must be at most 60 characters");
        }

        let email = check_email(&self.email, &mut errors);

        if let Some(message) = password_rule_violation(&self.password) {
            errors.add(Field::Password, message);
        }

        if self.confirm_password.is_empty() {
            errors.add(Field::ConfirmPassword, "Please confirm your password");
        } else if self.confirm_password != self.password {
            errors.add(Field::ConfirmPassword, "Passwords do not match");
        }

        let role = self
            .role
            .parse::<Role>()
            .ok()
            .filter(|role| SELF_SERVICE_ROLES.contains(role));
        if role.is_none() {
            errors.add(Field::Role, "Select a valid role");
        }

        let password = self.password.clone();
        errors.into_result(|| SignupData {
            full_name,
            email,
            password,
            role: role.unwrap_or(Role::Student),
        })
    }
}

fn password_rule_violation(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Some("Password must be at least 8 characters")
    } else if !password.chars().any(char::is_uppercase) {
        Some("Password must contain an uppercase letter")
    } else if !password.chars().any(char::is_lowercase) {
        Some("Password must contain a lowercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain a number")
    } else {
        None
    }
}

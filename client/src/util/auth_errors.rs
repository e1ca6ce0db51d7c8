//! User-facing text for authentication failures.
//!
//! Every page that surfaces an auth error goes through this table so the
//! wording stays consistent and provider codes never leak to the UI.

#[cfg(test)]
#[path = "auth_errors_test.rs"]
mod auth_errors_test;

/// Failure codes reported by the auth provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorCode {
    InvalidEmail,
    UserNotFound,
    WrongPassword,
    InvalidCredential,
    EmailAlreadyInUse,
    WeakPassword,
    TooManyRequests,
    NetworkRequestFailed,
    UserDisabled,
    PopupClosedByUser,
    Unknown,
}

impl AuthErrorCode {
    /// Parse a provider code; the `auth/` prefix is optional.
    pub fn parse(code: &str) -> Self {
        let code = code.trim();
        let code = code.strip_prefix("auth/").unwrap_or(code);
        match code {
            "invalid-email" => Self::InvalidEmail,
            "user-not-found" => Self::UserNotFound,
            "wrong-password" => Self::WrongPassword,
            "invalid-credential" | "invalid-login-credentials" => Self::InvalidCredential,
            "email-already-in-use" => Self::EmailAlreadyInUse,
            "weak-password" => Self::WeakPassword,
            "too-many-requests" => Self::TooManyRequests,
            "network-request-failed" => Self::NetworkRequestFailed,
            "user-disabled" => Self::UserDisabled,
            "popup-closed-by-user" => Self::PopupClosedByUser,
            _ => Self::Unknown,
        }
    }

    /// Best guess when the provider answered without a code.
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::InvalidCredential,
            409 => Self::EmailAlreadyInUse,
            429 => Self::TooManyRequests,
            _ => Self::Unknown,
        }
    }

    pub const fn friendly_message(self) -> &'static str {
        match self {
            Self::InvalidEmail => "That email address doesn't look right.",
            // Do not reveal which half of the credentials was wrong.
            Self::UserNotFound | Self::WrongPassword | Self::InvalidCredential => "Incorrect email or password.",
            Self::EmailAlreadyInUse => "An account with this email already exists.",
            Self::WeakPassword => "Password is too weak. Use at least 8 characters with letters and numbers.",
            Self::TooManyRequests => "Too many attempts. Please wait a moment and try again.",
            Self::NetworkRequestFailed => "Network error. Check your connection and try again.",
            Self::UserDisabled => "This account has been disabled. Contact an administrator.",
            Self::PopupClosedByUser => "Sign-in was cancelled.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

/// Translate a raw provider code into the message shown to the user.
pub fn friendly_message(code: &str) -> &'static str {
    AuthErrorCode::parse(code).friendly_message()
}

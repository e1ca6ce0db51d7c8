//! Wire types for the auth provider's JSON API.
//!
//! DESIGN
//! ======
//! The provider reports roles as free-form strings. `SessionUser` keeps the raw
//! value and exposes `parsed_role` so a bad role is detected at the session
//! boundary rather than failing the whole response decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use gate::{Role, RoleParseError};
use serde::{Deserialize, Serialize};

use crate::util::validation::{Credentials, SignupData};

/// The signed-in account as reported by `GET {base}/me` and the login and
/// signup endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub role: String,
}

impl SessionUser {
    /// # Errors
    ///
    /// Returns an error when the provider reported a role outside the known set.
    pub fn parsed_role(&self) -> Result<Role, RoleParseError> {
        self.role.parse()
    }

    /// Name shown in the header: the display name, or the local part of the
    /// email when the provider has none.
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<Credentials> for LoginRequest {
    fn from(credentials: Credentials) -> Self {
        Self { email: credentials.email, password: credentials.password }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl From<SignupData> for SignupRequest {
    fn from(data: SignupData) -> Self {
        Self { full_name: data.full_name, email: data.email, password: data.password, role: data.role }
    }
}

/// Error body returned by the provider alongside a non-2xx status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthFailureBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

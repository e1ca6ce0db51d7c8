//! HTTP calls to the external auth provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `AuthError::Unavailable`, since the
//! session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, AuthError>`. Pages show
//! `AuthError::user_message()` and never the raw provider text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gate::RoleParseError;

use super::types::{LoginRequest, SessionUser, SignupRequest};
use crate::util::auth_errors::AuthErrorCode;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth request failed: {0}")]
    Network(String),
    #[error("auth provider rejected request ({status}): {code:?}")]
    Rejected { status: u16, code: AuthErrorCode },
    #[error("unreadable auth response: {0}")]
    Decode(String),
    #[error("auth provider returned a malformed identity: {0}")]
    MalformedIdentity(#[from] RoleParseError),
    #[error("auth provider is only reachable from the browser")]
    Unavailable,
}

impl AuthError {
    pub const fn code(&self) -> AuthErrorCode {
        match self {
            Self::Network(_) => AuthErrorCode::NetworkRequestFailed,
            Self::Rejected { code, .. } => *code,
            Self::Decode(_) | Self::MalformedIdentity(_) | Self::Unavailable => AuthErrorCode::Unknown,
        }
    }

    /// Text to show the user for this failure.
    pub const fn user_message(&self) -> &'static str {
        self.code().friendly_message()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Build the error for a non-2xx answer, preferring the provider's code over
/// the status.
#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: Option<super::types::AuthFailureBody>) -> AuthError {
    let code = body
        .and_then(|body| body.code)
        .map(|code| AuthErrorCode::parse(&code))
        .filter(|code| *code != AuthErrorCode::Unknown)
        .unwrap_or_else(|| AuthErrorCode::from_status(status));
    AuthError::Rejected { status, code }
}

/// Statuses that mean "no session" for `GET /me` rather than a failure.
#[cfg(any(test, feature = "hydrate"))]
const fn is_signed_out_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

#[cfg(feature = "hydrate")]
async fn session_user_from(resp: gloo_net::http::Response) -> Result<SessionUser, AuthError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<super::types::AuthFailureBody>().await.ok();
        return Err(rejection(status, body));
    }
    resp.json::<SessionUser>()
        .await
        .map_err(|e| AuthError::Decode(e.to_string()))
}

/// Fetch the signed-in user from `GET {base}/me`. `Ok(None)` means nobody is
/// signed in.
///
/// # Errors
///
/// Returns an error when the provider is unreachable or answers unexpectedly.
pub async fn fetch_current_user(base: &str) -> Result<Option<SessionUser>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint(base, "me"))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if is_signed_out_status(resp.status()) {
            return Ok(None);
        }
        session_user_from(resp).await.map(Some)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(AuthError::Unavailable)
    }
}

/// Sign in with `POST {base}/login`.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] for bad credentials and other provider
/// refusals.
pub async fn sign_in(base: &str, request: &LoginRequest) -> Result<SessionUser, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(base, "login"))
            .json(request)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        session_user_from(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, request);
        Err(AuthError::Unavailable)
    }
}

/// Create an account with `POST {base}/signup`. The provider signs the new
/// account in on success.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] when the email is taken or the provider
/// refuses the password.
pub async fn sign_up(base: &str, request: &SignupRequest) -> Result<SessionUser, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(base, "signup"))
            .json(request)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        session_user_from(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, request);
        Err(AuthError::Unavailable)
    }
}

/// End the session with `POST {base}/logout`.
///
/// # Errors
///
/// Returns an error when the provider cannot be reached or refuses.
pub async fn sign_out(base: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(base, "logout"))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if resp.ok() { Ok(()) } else { Err(rejection(resp.status(), None)) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(AuthError::Unavailable)
    }
}

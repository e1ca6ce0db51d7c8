//! Admin account lookup.
//!
//! The configured admin list is authoritative: a listed address is treated
//! as an administrator whatever role the auth provider reports for it.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use gate::Role;

/// Whether `email` belongs to a configured admin account.
///
/// `admins` is expected to be lowercased already (see `AppConfig::from_json`).
pub fn is_admin_email(email: &str, admins: &[String]) -> bool {
    let email = email.trim().to_ascii_lowercase();
    !email.is_empty() && admins.iter().any(|admin| *admin == email)
}

/// Role the shell should act on for a user the provider reported as `claimed`.
pub fn effective_role(claimed: Role, email: &str, admins: &[String]) -> Role {
    if is_admin_email(email, admins) { Role::Admin } else { claimed }
}

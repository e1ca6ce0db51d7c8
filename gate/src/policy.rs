//! Per-page access policy and the role -> default destination table.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::FALLBACK_PATH;
use crate::role::{Role, RoleParseError};

/// Which roles may view a page, and where to send everyone else.
///
/// Built once when the page mounts and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    allowed_roles: BTreeSet<Role>,
    override_redirect: Option<String>,
}

impl AccessPolicy {
    #[must_use]
    pub fn new(allowed_roles: impl IntoIterator<Item = Role>) -> Self {
        Self { allowed_roles: allowed_roles.into_iter().collect(), override_redirect: None }
    }

    /// Send denied users to `path` instead of their role's default page.
    #[must_use]
    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.override_redirect = Some(path.into());
        self
    }

    /// Build a policy from the string role list a page declares.
    ///
    /// # Errors
    ///
    /// Returns the first role name that is not a known [`Role`].
    pub fn from_role_names<I, S>(names: I, redirect_to: Option<String>) -> Result<Self, RoleParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_roles = names
            .into_iter()
            .map(|name| name.as_ref().parse::<Role>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { allowed_roles, override_redirect: redirect_to })
    }

    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    pub fn allowed_roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.allowed_roles.iter().copied()
    }

    #[must_use]
    pub fn override_redirect(&self) -> Option<&str> {
        self.override_redirect.as_deref()
    }
}

/// Static mapping from role to that role's home page.
///
/// Loaded once at startup. Entries may be missing; lookups then fall back to
/// [`FALLBACK_PATH`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleDefaultMap {
    entries: BTreeMap<Role, String>,
}

impl RoleDefaultMap {
    #[must_use]
    pub fn empty() -> Self {
        Self { entries: BTreeMap::new() }
    }

    #[must_use]
    pub fn with(mut self, role: Role, path: impl Into<String>) -> Self {
        self.entries.insert(role, path.into());
        self
    }

    #[must_use]
    pub fn get(&self, role: Role) -> Option<&str> {
        self.entries.get(&role).map(String::as_str)
    }

    /// Home page for `role`, or the generic dashboard when unmapped.
    #[must_use]
    pub fn destination_for(&self, role: Role) -> &str {
        self.get(role).unwrap_or(FALLBACK_PATH)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        self.entries.iter().map(|(role, path)| (*role, path.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RoleDefaultMap {
    fn default() -> Self {
        Self::empty()
            .with(Role::Admin, "/admin")
            .with(Role::Lecturer, "/lecturer/dashboard")
            .with(Role::Student, "/student/dashboard")
    }
}

impl FromIterator<(Role, String)> for RoleDefaultMap {
    fn from_iter<T: IntoIterator<Item = (Role, String)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

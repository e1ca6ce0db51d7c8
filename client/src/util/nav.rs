//! Header navigation entries per role.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use gate::{Role, RoleDefaultMap};

/// Path of the lecturer area, which administrators can also open.
pub const LECTURER_AREA: &str = "/lecturer/dashboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

impl NavLink {
    fn new(label: &'static str, href: impl Into<String>) -> Self {
        Self { label, href: href.into() }
    }
}

/// Links shown in the header for the signed-in role, or the public links
/// when nobody is signed in.
pub fn nav_links_for(role: Option<Role>, defaults: &RoleDefaultMap) -> Vec<NavLink> {
    match role {
        None => vec![
            NavLink::new("Home", "/"),
            NavLink::new("Log in", gate::LOGIN_PATH),
            NavLink::new("Sign up", "/signup"),
        ],
        Some(Role::Admin) => vec![
            NavLink::new("Admin", defaults.destination_for(Role::Admin)),
            NavLink::new("Lecturer view", LECTURER_AREA),
        ],
        Some(role) => vec![NavLink::new("Dashboard", defaults.destination_for(role))],
    }
}

//! Role dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/dashboard` is open to every signed-in role and is where the access gate
//! sends users whose role has no home page configured. The student and
//! lecturer areas are role specific; administrators may also enter the
//! lecturer area.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;

use gate::Role;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::protected_route::ProtectedRoute;
use crate::config::AppConfig;
use crate::meta::PageMeta;
use crate::state::auth::AuthSession;

/// Roles admitted to the lecturer area.
pub const LECTURER_AREA_ROLES: [Role; 2] = [Role::Lecturer, Role::Admin];

/// A tile linking to a section of a dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub title: &'static str,
    pub body: &'static str,
}

pub fn tiles_for(role: Role) -> &'static [Tile] {
    const STUDENT: &[Tile] = &[
        Tile { title: "My courses", body: "Continue where you left off." },
        Tile { title: "Assignments", body: "Upcoming deadlines and submissions." },
        Tile { title: "Grades", body: "Feedback and marks from your lecturers." },
    ];
    const LECTURER: &[Tile] = &[
        Tile { title: "Courses I teach", body: "Manage modules, materials and enrolment." },
        Tile { title: "Marking queue", body: "Submissions waiting for review." },
        Tile { title: "Announcements", body: "Post updates to your students." },
    ];
    const ADMIN: &[Tile] = &[
        Tile { title: "Accounts", body: "Review users and their roles." },
        Tile { title: "Course catalogue", body: "Approve and archive courses." },
    ];
    match role {
        Role::Student => STUDENT,
        Role::Lecturer => LECTURER,
        Role::Admin => ADMIN,
    }
}

pub fn greeting(session: &AuthSession) -> String {
    match (session.display_name(), session.role()) {
        (Some(name), Some(role)) => format!("Hello, {name} ({})", role.label()),
        (Some(name), None) => format!("Hello, {name}"),
        _ => "Hello".to_owned(),
    }
}

#[component]
fn TileGrid(role: Role) -> impl IntoView {
    view! {
        <ul class="tile-grid">
            {tiles_for(role)
                .iter()
                .map(|tile| {
                    view! {
                        <li class="tile">
                            <h3 class="tile__title">{tile.title}</h3>
                            <p class="tile__body">{tile.body}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Generic dashboard for any signed-in role.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();
    let config = expect_context::<Arc<AppConfig>>();

    let home = Memo::new(move |_| {
        session
            .with(AuthSession::role)
            .map(|role| config.role_defaults.destination_for(role).to_owned())
            .filter(|path| path != gate::FALLBACK_PATH)
    });

    view! {
        <PageMeta title="Dashboard"/>
        <ProtectedRoute allowed_roles=Role::ALL.to_vec()>
            <section class="dashboard">
                <h1>{move || session.with(greeting)}</h1>
                {move || {
                    home.get()
                        .map(|path| {
                            view! {
                                <p class="dashboard__home">
                                    <A href=path>"Go to your workspace"</A>
                                </p>
                            }
                        })
                }}
            </section>
        </ProtectedRoute>
    }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();

    view! {
        <PageMeta title="Student dashboard"/>
        <ProtectedRoute allowed_roles=vec![Role::Student]>
            <section class="dashboard dashboard--student">
                <h1>{move || session.with(greeting)}</h1>
                <TileGrid role=Role::Student/>
            </section>
        </ProtectedRoute>
    }
}

#[component]
pub fn LecturerDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AuthSession>>();

    view! {
        <PageMeta title="Lecturer dashboard"/>
        <ProtectedRoute allowed_roles=LECTURER_AREA_ROLES.to_vec()>
            <section class="dashboard dashboard--lecturer">
                <h1>{move || session.with(greeting)}</h1>
                <TileGrid role=Role::Lecturer/>
            </section>
        </ProtectedRoute>
    }
}

//! End-to-end walkthroughs of protected-page activations, driving the gate the
//! way a page host does: one evaluation per auth state change.

use std::cell::RefCell;

use gate::{AccessGate, AccessPolicy, AuthState, Identity, Navigator, Outcome, Role, RoleDefaultMap};

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<String>>,
}

impl Navigator for Recorder {
    fn navigate_to(&self, path: &str) {
        self.calls.borrow_mut().push(path.to_owned());
    }
}

fn policy(names: &[&str]) -> AccessPolicy {
    AccessPolicy::from_role_names(names.iter().copied(), None).expect("known roles")
}

#[test]
fn scenario_a_pending_renders_placeholder_without_navigation() {
    let mut gate = AccessGate::new(RoleDefaultMap::default());
    let nav = Recorder::default();
    let auth = AuthState::from_parts(true, false, None);

    let outcome = gate.evaluate(&auth, &policy(&["student"]), &nav);

    assert_eq!(outcome, Outcome::Loading);
    assert!(nav.calls.borrow().is_empty());
}

#[test]
fn scenario_b_signed_out_navigates_to_login_exactly_once() {
    let mut gate = AccessGate::new(RoleDefaultMap::default());
    let nav = Recorder::default();
    let auth = AuthState::from_parts(false, false, None);
    let page = policy(&["admin"]);

    for _ in 0..3 {
        assert_eq!(gate.evaluate(&auth, &page, &nav), Outcome::RedirectTo("/login".to_owned()));
    }

    assert_eq!(*nav.calls.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn scenario_c_lecturer_on_student_page_goes_to_lecturer_dashboard() {
    let mut gate = AccessGate::new(RoleDefaultMap::default());
    let nav = Recorder::default();
    let auth = AuthState::from_parts(false, true, Some(Identity::new(Role::Lecturer)));
    let page = policy(&["student"]);

    gate.evaluate(&auth, &page, &nav);
    gate.evaluate(&auth, &page, &nav);

    assert_eq!(*nav.calls.borrow(), vec!["/lecturer/dashboard".to_owned()]);
}

#[test]
fn scenario_d_admin_on_staff_page_sees_content() {
    let mut gate = AccessGate::new(RoleDefaultMap::default());
    let nav = Recorder::default();
    let auth = AuthState::from_parts(false, true, Some(Identity::new(Role::Admin)));

    let outcome = gate.evaluate(&auth, &policy(&["admin", "lecturer"]), &nav);

    assert_eq!(outcome, Outcome::Allow);
    assert!(nav.calls.borrow().is_empty());
}

#[test]
fn full_activation_pending_then_signed_in_then_teardown() {
    let mut gate = AccessGate::new(RoleDefaultMap::default());
    let nav = Recorder::default();
    let page = AccessPolicy::new([Role::Student]).with_redirect("/courses");

    assert_eq!(gate.evaluate(&AuthState::Pending, &page, &nav), Outcome::Loading);
    let denied = gate.evaluate(&AuthState::signed_in(Role::Admin), &page, &nav);
    assert_eq!(denied, Outcome::RedirectTo("/courses".to_owned()));
    gate.teardown();
    gate.evaluate(&AuthState::SignedOut, &page, &nav);

    assert_eq!(*nav.calls.borrow(), vec!["/courses".to_owned()]);
}

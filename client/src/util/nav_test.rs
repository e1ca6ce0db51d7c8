use super::*;

fn hrefs(links: &[NavLink]) -> Vec<&str> {
    links.iter().map(|link| link.href.as_str()).collect()
}

#[test]
fn signed_out_sees_public_links() {
    let links = nav_links_for(None, &RoleDefaultMap::default());
    assert_eq!(hrefs(&links), vec!["/", "/login", "/signup"]);
}

#[test]
fn student_and_lecturer_get_their_dashboard() {
    let defaults = RoleDefaultMap::default();
    assert_eq!(hrefs(&nav_links_for(Some(Role::Student), &defaults)), vec!["/student/dashboard"]);
    assert_eq!(hrefs(&nav_links_for(Some(Role::Lecturer), &defaults)), vec!["/lecturer/dashboard"]);
}

#[test]
fn admin_gets_admin_and_lecturer_view() {
    let links = nav_links_for(Some(Role::Admin), &RoleDefaultMap::default());
    assert_eq!(links[0].label, "Admin");
    assert_eq!(hrefs(&links), vec!["/admin", "/lecturer/dashboard"]);
}

#[test]
fn missing_table_entry_links_to_fallback() {
    let links = nav_links_for(Some(Role::Student), &RoleDefaultMap::empty());
    assert_eq!(hrefs(&links), vec![gate::FALLBACK_PATH]);
}

#[test]
fn links_follow_configured_table() {
    let defaults = RoleDefaultMap::empty().with(Role::Lecturer, "/teach");
    assert_eq!(hrefs(&nav_links_for(Some(Role::Lecturer), &defaults)), vec!["/teach"]);
}

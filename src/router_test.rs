use super::*;
use crate::net::types::User;

fn anonymous() -> Session {
    Session::default()
}

fn authenticated(is_admin: bool) -> Session {
    let mut session = Session::default();
    session.apply_fetch(Some(User {
        id: 1,
        username: "olena".to_owned(),
        email: "olena@example.com".to_owned(),
        is_admin,
    }));
    session
}

#[test]
fn anonymous_user_is_sent_to_login_from_protected_route() {
    assert_eq!(
        decide(Access::RequiresAuth, &anonymous()),
        GuardOutcome::Redirect("/login")
    );
}

#[test]
fn anonymous_user_is_sent_to_login_from_admin_route() {
    assert_eq!(
        decide(Access::RequiresAdmin, &anonymous()),
        GuardOutcome::Redirect("/login")
    );
}

#[test]
fn non_admin_is_sent_to_dashboard_from_admin_route() {
    assert_eq!(
        decide(Access::RequiresAdmin, &authenticated(false)),
        GuardOutcome::Redirect("/dashboard")
    );
}

#[test]
fn admin_passes_admin_route() {
    assert_eq!(decide(Access::RequiresAdmin, &authenticated(true)), GuardOutcome::Allow);
}

#[test]
fn authenticated_admin_is_sent_to_admin_from_guest_route() {
    assert_eq!(
        decide(Access::GuestOnly, &authenticated(true)),
        GuardOutcome::Redirect("/admin")
    );
}

#[test]
fn authenticated_non_admin_is_sent_to_dashboard_from_guest_route() {
    assert_eq!(
        decide(Access::GuestOnly, &authenticated(false)),
        GuardOutcome::Redirect("/dashboard")
    );
}

#[test]
fn anonymous_user_passes_guest_and_public_routes() {
    assert_eq!(decide(Access::GuestOnly, &anonymous()), GuardOutcome::Allow);
    assert_eq!(decide(Access::Public, &anonymous()), GuardOutcome::Allow);
}

#[test]
fn decision_is_stable_for_a_fixed_input() {
    let session = authenticated(false);
    let first = decide(Access::RequiresAdmin, &session);
    let second = decide(Access::RequiresAdmin, &session);
    assert_eq!(first, second);
}

#[test]
fn access_for_resolves_static_paths() {
    assert_eq!(access_for("/"), Access::Public);
    assert_eq!(access_for("/dashboard"), Access::RequiresAuth);
    assert_eq!(access_for("/login"), Access::GuestOnly);
    assert_eq!(access_for("/registration"), Access::GuestOnly);
    assert_eq!(access_for("/financial-summary"), Access::RequiresAuth);
    assert_eq!(access_for("/admin"), Access::RequiresAdmin);
}

#[test]
fn access_for_resolves_parameterized_paths() {
    assert_eq!(access_for("/rentals/create/7"), Access::RequiresAuth);
    assert_eq!(access_for("/rentals/create/"), Access::Public);
    assert_eq!(access_for("/rentals/create/7/extra"), Access::Public);
}

#[test]
fn access_for_tolerates_trailing_slash() {
    assert_eq!(access_for("/dashboard/"), Access::RequiresAuth);
}

#[test]
fn access_for_defaults_unknown_paths_to_public() {
    assert_eq!(access_for("/no-such-page"), Access::Public);
}

use super::*;

fn user(is_admin: bool) -> User {
    User {
        id: 1,
        username: "olena".to_owned(),
        email: "olena@example.com".to_owned(),
        is_admin,
    }
}

#[test]
fn session_starts_anonymous() {
    let session = Session::default();
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
    assert!(!session.is_admin());
}

#[test]
fn successful_fetch_authenticates_and_stores_user() {
    let mut session = Session::default();
    session.apply_fetch(Some(user(true)));
    assert!(session.is_authenticated);
    assert!(session.is_admin());
    assert_eq!(session.user.as_ref().unwrap().username, "olena");
}

#[test]
fn failed_fetch_lands_on_exactly_the_cleared_state() {
    let mut session = Session::default();
    session.apply_fetch(Some(user(false)));
    session.apply_fetch(None);
    assert_eq!(session, Session::default());
}

#[test]
fn failed_fetch_clears_provisional_authentication() {
    // login sets the flag before the user record arrives; a failed
    // follow-up fetch must not leave the flag dangling.
    let mut session = Session::default();
    session.mark_authenticated();
    session.apply_fetch(None);
    assert_eq!(session, Session::default());
}

#[test]
fn reset_returns_to_the_initial_state() {
    let mut session = Session::default();
    session.apply_fetch(Some(user(true)));
    session.reset();
    assert_eq!(session, Session::default());
}

#[test]
fn non_admin_user_is_not_admin() {
    let mut session = Session::default();
    session.apply_fetch(Some(user(false)));
    assert!(!session.is_admin());
}

#[test]
fn stale_guard_admits_only_the_newest_ticket() {
    let guard = StaleGuard::default();
    let first = guard.issue();
    assert!(guard.admits(first));

    let second = guard.issue();
    assert!(!guard.admits(first));
    assert!(guard.admits(second));
}

#[test]
fn stale_guard_tickets_are_strictly_increasing() {
    let guard = StaleGuard::default();
    let a = guard.issue();
    let b = guard.issue();
    let c = guard.issue();
    assert!(a < b && b < c);
}

#[test]
fn slow_earlier_completion_is_rejected_after_a_later_call() {
    // Models login racing a user refresh: the refresh that started last
    // wins regardless of which response arrives first.
    let guard = StaleGuard::default();
    let slow_login = guard.issue();
    let later_refresh = guard.issue();

    // The later call's response arrives first and is applied.
    assert!(guard.admits(later_refresh));
    // The earlier call's response straggles in and must be dropped.
    assert!(!guard.admits(slow_login));
}

#[test]
fn outcome_message_prefers_the_server_message() {
    let error = AuthError::Rejected(Some("Invalid credentials.".to_owned()));
    assert_eq!(outcome_message(&error, LOGIN_FAILED), "Invalid credentials.");
}

#[test]
fn outcome_message_falls_back_when_the_server_is_silent() {
    assert_eq!(
        outcome_message(&AuthError::Rejected(None), LOGIN_FAILED),
        LOGIN_FAILED
    );
    assert_eq!(
        outcome_message(&AuthError::Network, REGISTER_FAILED),
        REGISTER_FAILED
    );
}

#[test]
fn outcome_message_flags_a_malformed_success() {
    assert_eq!(
        outcome_message(&AuthError::MissingToken, LOGIN_FAILED),
        UNEXPECTED_RESPONSE
    );
}

#[test]
fn failed_outcome_always_carries_a_message() {
    let outcome = ActionOutcome::failed(&AuthError::Network, LOGIN_FAILED);
    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());
}

#[test]
fn ok_outcome_reports_success() {
    let outcome = ActionOutcome::ok(LOGIN_OK);
    assert!(outcome.success);
    assert_eq!(outcome.message, LOGIN_OK);
}

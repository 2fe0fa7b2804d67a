//! Route table and navigation guard.
//!
//! DESIGN
//! ======
//! The routing surface is a static table of (path pattern, access
//! requirement) pairs and the guard is a pure function over that table plus
//! a session snapshot. Pages never decide redirects themselves; the
//! [`Guarded`] wrapper resolves the current location against the table and
//! either renders its children or emits a `<Redirect>`.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::{Session, SessionStore};

/// Access requirement attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    /// Reachable by anyone.
    #[default]
    Public,
    /// Requires an authenticated session.
    RequiresAuth,
    /// Requires an authenticated session with the admin flag set.
    RequiresAdmin,
    /// Login/registration screens, meaningless for authenticated users.
    GuestOnly,
}

/// Outcome of evaluating the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

/// Routing surface: path pattern → access requirement.
///
/// `:name` segments match any single non-empty path segment. Paths not
/// matched here fall through to the router's fallback, which sends the
/// user to `/`.
pub const ROUTE_TABLE: &[(&str, Access)] = &[
    ("/", Access::Public),
    ("/dashboard", Access::RequiresAuth),
    ("/login", Access::GuestOnly),
    ("/registration", Access::GuestOnly),
    ("/faq", Access::Public),
    ("/features", Access::Public),
    ("/how", Access::Public),
    ("/assets", Access::RequiresAuth),
    ("/rentals", Access::RequiresAuth),
    ("/rentals/create/:asset_id", Access::RequiresAuth),
    ("/financial-summary", Access::RequiresAuth),
    ("/admin", Access::RequiresAdmin),
];

/// Look up the access requirement for a concrete path.
///
/// Unknown paths are `Public`; the router's fallback redirect owns them.
pub fn access_for(path: &str) -> Access {
    ROUTE_TABLE
        .iter()
        .find(|(pattern, _)| pattern_matches(pattern, path))
        .map(|(_, access)| *access)
        .unwrap_or_default()
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) => {
                if p.starts_with(':') {
                    if s.is_empty() {
                        return false;
                    }
                } else if p != s {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Decide whether a navigation may proceed.
///
/// Authentication takes precedence over the admin requirement, which takes
/// precedence over guest-only handling. Exactly one outcome per call, from
/// in-memory state only.
pub fn decide(access: Access, session: &Session) -> GuardOutcome {
    let admin = session.is_admin();
    match access {
        Access::RequiresAuth | Access::RequiresAdmin if !session.is_authenticated => {
            GuardOutcome::Redirect("/login")
        }
        Access::RequiresAdmin if !admin => GuardOutcome::Redirect("/dashboard"),
        Access::GuestOnly if session.is_authenticated => {
            GuardOutcome::Redirect(if admin { "/admin" } else { "/dashboard" })
        }
        _ => GuardOutcome::Allow,
    }
}

/// Route wrapper applying the navigation guard.
///
/// Re-evaluates whenever the session or the location changes, so a login,
/// logout, or stale-session cleanup moves the user off a page that no
/// longer admits them.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let location = use_location();

    move || {
        let access = access_for(&location.pathname.get());
        match decide(access, &store.snapshot()) {
            GuardOutcome::Allow => children().into_any(),
            GuardOutcome::Redirect(target) => view! { <Redirect path=target/> }.into_any(),
        }
    }
}

use super::*;
use crate::net::types::UserAccount;
use crate::state::role::{CARER_ONLY, MANAGER_ONLY};

fn authenticated_session(role: Role) -> Session {
    let mut session = Session::default();
    session.install_token("tok-1".to_owned());
    session.install_profile(
        UserAccount {
            id: 9,
            name: "Priya Shah".to_owned(),
            email: "priya@care.example".to_owned(),
        },
        role,
    );
    session
}

#[test]
fn loading_takes_priority_and_never_redirects() {
    let mut session = authenticated_session(Role::Manager);
    session.loading = true;
    assert_eq!(route_decision(&session, MANAGER_ONLY), RouteDecision::Loading);

    let empty_loading = Session {
        loading: true,
        ..Session::default()
    };
    assert_eq!(
        route_decision(&empty_loading, MANAGER_ONLY),
        RouteDecision::Loading
    );
}

#[test]
fn unauthenticated_session_redirects_to_login() {
    let session = Session::default();
    assert_eq!(
        route_decision(&session, MANAGER_ONLY),
        RouteDecision::RedirectToLogin
    );
    assert_eq!(route_decision(&session, &[]), RouteDecision::RedirectToLogin);
}

#[test]
fn wrong_role_is_forbidden_with_both_roles_reported() {
    let session = authenticated_session(Role::Carer);
    assert_eq!(
        route_decision(&session, MANAGER_ONLY),
        RouteDecision::Forbidden {
            current: Role::Carer,
            required: MANAGER_ONLY,
        }
    );
}

#[test]
fn allowed_role_is_authorized() {
    let session = authenticated_session(Role::Family);
    const MANAGER_OR_FAMILY: &[Role] = &[Role::Manager, Role::Family];
    assert_eq!(
        route_decision(&session, MANAGER_OR_FAMILY),
        RouteDecision::Authorized
    );
    assert_eq!(
        route_decision(&authenticated_session(Role::Carer), CARER_ONLY),
        RouteDecision::Authorized
    );
}

#[test]
fn unrestricted_route_admits_any_authenticated_role() {
    assert_eq!(
        route_decision(&authenticated_session(Role::Admin), &[]),
        RouteDecision::Authorized
    );
}

use super::*;
use crate::net::types::UserProfile;

fn signed_in(role: Option<&str>) -> AuthState {
    AuthState::signed_in(UserProfile {
        id: "u1".to_owned(),
        first_name: "Sam".to_owned(),
        last_name: "Lee".to_owned(),
        email: "sam@school.test".to_owned(),
        role: role.map(str::to_owned),
        extra: serde_json::Map::new(),
    })
}

// =============================================================
// GuestGuard
// =============================================================

#[test]
fn guest_guard_renders_while_loading_and_signed_out() {
    assert_eq!(guest_decision(&AuthState::default()), GuardDecision::Render);
    assert_eq!(guest_decision(&AuthState::signed_out()), GuardDecision::Render);
}

#[test]
fn guest_guard_never_renders_for_authenticated_users() {
    for role in Role::ALL {
        let state = signed_in(Some(role.as_str()));
        assert_eq!(guest_decision(&state), GuardDecision::Redirect(role.home_path()));
    }
}

#[test]
fn guest_guard_redirects_roleless_user_to_lowest_privilege_home() {
    let state = signed_in(None);
    assert_eq!(guest_decision(&state), GuardDecision::Redirect(Role::LOWEST_PRIVILEGE.home_path()));
}

// =============================================================
// RoleGuard
// =============================================================

#[test]
fn role_guard_waits_while_loading() {
    assert_eq!(role_decision(&AuthState::default(), PROFILE_ROLES), GuardDecision::Wait);
}

#[test]
fn role_guard_sends_signed_out_users_to_login() {
    for allowed in [DASHBOARD_ROLES, USERS_ROLES, ROLES_ROLES, COURSES_ROLES, TRANSACTIONS_ROLES] {
        assert_eq!(role_decision(&AuthState::signed_out(), allowed), GuardDecision::Redirect(LOGIN_PATH));
    }
}

#[test]
fn role_guard_renders_iff_role_allowed() {
    for role in Role::ALL {
        let state = signed_in(Some(role.as_str()));
        for allowed in [DASHBOARD_ROLES, USERS_ROLES, ROLES_ROLES, COURSES_ROLES, TRANSACTIONS_ROLES] {
            let decision = role_decision(&state, allowed);
            if allowed.contains(&role) {
                assert_eq!(decision, GuardDecision::Render);
            } else {
                assert_eq!(decision, GuardDecision::Deny { redirect: role.home_path() });
            }
        }
    }
}

#[test]
fn role_guard_treats_missing_role_as_lowest_privilege_not_admin() {
    let state = signed_in(None);
    assert_eq!(
        role_decision(&state, DASHBOARD_ROLES),
        GuardDecision::Deny { redirect: Role::LOWEST_PRIVILEGE.home_path() }
    );
}

#[test]
fn denied_redirect_target_is_never_denied_again() {
    for role in Role::ALL {
        let state = signed_in(Some(role.as_str()));
        let allowed = allowed_roles_for(role.home_path()).expect("home route is known");
        assert_eq!(role_decision(&state, allowed), GuardDecision::Render, "{role:?} loops");
    }
}

// =============================================================
// Landing and route table
// =============================================================

#[test]
fn landing_waits_then_redirects() {
    assert_eq!(landing_decision(&AuthState::default()), GuardDecision::Wait);
    assert_eq!(landing_decision(&AuthState::signed_out()), GuardDecision::Redirect(LOGIN_PATH));
    assert_eq!(landing_decision(&signed_in(Some("Admin"))), GuardDecision::Redirect("/dashboard"));
}

#[test]
fn allowed_roles_for_matches_nested_paths() {
    assert_eq!(allowed_roles_for("/courses/c1"), Some(COURSES_ROLES));
    assert_eq!(allowed_roles_for("/roles"), Some(ROLES_ROLES));
    assert_eq!(allowed_roles_for("/nowhere"), None);
}

#[test]
fn default_path_for_signed_out_is_login() {
    assert_eq!(default_path(&AuthState::signed_out()), LOGIN_PATH);
    assert_eq!(default_path(&AuthState::default()), LOGIN_PATH);
}

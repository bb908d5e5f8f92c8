//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route asks [`decide`] what to do with the current session
//! snapshot. The answer is pure so the navigation component only has to act
//! on it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::{AuthState, Role};

/// Public entry view; unauthenticated and unauthorized visitors land here.
pub const ENTRY_PATH: &str = "/";

/// Landing page after login when nothing else was requested.
pub const HOME_PATH: &str = "/dashboard";

/// Roles allowed on operational screens (orders).
pub const STAFF_ROLES: &[Role] = &[Role::Admin, Role::Staff];

/// Roles allowed on management screens (catalog, tables, history).
pub const ADMIN_ROLES: &[Role] = &[Role::Admin];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not settled yet; show a neutral indicator.
    Wait,
    /// Leave for [`ENTRY_PATH`]; `remember` is set when the requested
    /// location should be restored after login.
    Redirect { remember: bool },
    Render,
}

/// Decide what a route requiring one of `roles` does under `state`.
pub fn decide(state: &AuthState, roles: &[Role]) -> GuardDecision {
    match state {
        AuthState::Uninitialized | AuthState::Loading => GuardDecision::Wait,
        AuthState::Anonymous => GuardDecision::Redirect { remember: true },
        AuthState::Authenticated { user, .. } if roles.contains(&user.role) => GuardDecision::Render,
        AuthState::Authenticated { user, .. } => {
            log::info!("role {} denied for route requiring {roles:?}", user.role.as_claim());
            GuardDecision::Redirect { remember: false }
        }
    }
}

/// Sanitize a remembered location before navigating to it after login.
///
/// Only same-origin absolute paths are honored; the entry view itself and
/// anything else fall back to [`HOME_PATH`].
pub fn safe_return_path(candidate: Option<&str>) -> &str {
    match candidate {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && path != ENTRY_PATH => path,
        _ => HOME_PATH,
    }
}

//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and role-dependent rendering. The session store in `crate::session` is the
//! only writer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Access tier carried in the `role` claim of the session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Administrator: full catalog, table and history access.
    #[serde(rename = "ADMIN")]
    Admin,
    /// Floor staff: dashboard and order handling only.
    #[serde(rename = "FUNCIONARIO")]
    Staff,
}

impl Role {
    /// Parse the wire value of the `role` claim.
    pub fn from_claim(raw: &str) -> Option<Self> {
        match raw {
            "ADMIN" => Some(Self::Admin),
            "FUNCIONARIO" => Some(Self::Staff),
            _ => None,
        }
    }

    pub fn as_claim(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Staff => "FUNCIONARIO",
        }
    }

    /// Label shown in the header next to the user's email.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "ADMINISTRADOR",
            Self::Staff => "FUNCIONÁRIO",
        }
    }
}

/// Identity decoded from a valid session token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

/// Authentication state machine.
///
/// `Uninitialized -> Loading -> {Authenticated, Anonymous}`, then
/// `Authenticated <-> Anonymous`. The user and token only exist together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Durable storage has not been read yet (server render, pre-hydration).
    #[default]
    Uninitialized,
    /// Durable storage read in progress.
    Loading,
    Anonymous,
    Authenticated { user: User, token: String },
}

impl AuthState {
    /// True until the one-time storage check completes.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }
}

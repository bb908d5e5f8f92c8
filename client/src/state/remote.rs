//! Lifecycle of data fetched from the API for a single screen.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

/// Remote data as seen by a page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Build from a fetch result, rendering the error for display.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Apply a refresh, keeping already loaded data when the refresh fails.
    pub fn refresh_with<E: std::fmt::Display>(&mut self, result: Result<T, E>) {
        match (result, &*self) {
            (Ok(value), _) => *self = Self::Loaded(value),
            (Err(e), Self::Loaded(_)) => log::warn!("refresh failed, keeping previous data: {e}"),
            (Err(e), _) => *self = Self::Failed(e.to_string()),
        }
    }
}

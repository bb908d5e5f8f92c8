//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, `history`) so individual pages
//! can depend on small focused models.

pub mod auth;
pub mod catalog;
pub mod history;
pub mod remote;

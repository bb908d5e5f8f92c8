//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, mutations, navigation)
//! and delegates rendering details to `components`.

pub mod categories;
pub mod dashboard;
pub mod history;
pub mod login;
pub mod order_details;
pub mod product_form;
pub mod products;
pub mod tables;

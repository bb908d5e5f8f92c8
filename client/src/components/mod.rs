//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and list entries while reading the
//! session from Leptos context.

pub mod action_button;
pub mod header;
pub mod history_row;
pub mod nav_bar;
pub mod order_item;
pub mod product_card;
pub mod protected_route;
pub mod status_selector;
pub mod table_card;

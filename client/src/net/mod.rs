//! Networking: the authenticated request gateway and typed API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns the base URL and the bearer interceptor slot, `api` maps
//! each backend endpoint onto a typed call, and `types` defines the wire schema.

pub mod api;
pub mod gateway;
pub mod types;

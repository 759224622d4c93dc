//! Networking modules for the REST/JSON backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema,
//! including the `{ success, data, error }` response envelope.

pub mod api;
pub mod types;

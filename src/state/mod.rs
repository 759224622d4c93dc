//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`jobs`, `applications`, `draft`, etc.) so
//! individual components can depend on small focused models. Each struct
//! is plain data; the page provides them app-wide as `RwSignal` contexts
//! and mutates them through the small methods defined here, which keeps
//! the update rules unit-testable without a browser.

pub mod applications;
pub mod draft;
pub mod jobs;
pub mod stats;
pub mod ui;
pub mod view;

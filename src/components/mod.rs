//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome while reading shared state from
//! Leptos context providers; orchestration stays in `pages`.

pub mod applicant_card;
pub mod job_card;
pub mod job_form;
pub mod stat_cards;

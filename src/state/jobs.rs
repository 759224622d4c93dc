//! Job-posting list state for the dashboard.
//!
//! DESIGN
//! ======
//! Separating list state from the applicants-detail state avoids
//! accidental coupling between the posting inventory and per-posting
//! review data.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::types::JobPosting;

/// Shared job-posting list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct JobsState {
    /// Current postings, most recent first.
    pub items: Vec<JobPosting>,
    /// True while the initial collection load is in flight.
    pub loading: bool,
    /// User-visible message from a failed collection load.
    pub error: Option<String>,
}

impl JobsState {
    /// Replace the whole list with a fresh load result.
    pub fn apply_loaded(&mut self, items: Vec<JobPosting>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed collection load. The list stays empty and the
    /// loading flag clears so the view stays interactive.
    pub fn fail_load(&mut self, message: String) {
        self.items.clear();
        self.loading = false;
        self.error = Some(message);
    }

    /// Prepend a freshly created posting so the list stays
    /// most-recent-first.
    pub fn insert_created(&mut self, job: JobPosting) {
        self.items.insert(0, job);
    }
}

//! Applicant list state for the selected posting.
//!
//! DESIGN
//! ======
//! Every load is tagged with the job id it was issued for. Starting a load
//! clears the previous posting's list, and results are only applied while
//! their tag still matches, so the detail view can never show one
//! posting's applicants under another posting — including when the user
//! reselects faster than responses arrive.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use crate::net::types::Application;

/// Applicants for the currently selected posting.
#[derive(Clone, Debug, Default)]
pub struct ApplicationsState {
    /// Applications scoped to `for_job`.
    pub items: Vec<Application>,
    /// Job id the current `items` (or in-flight load) belong to.
    pub for_job: Option<String>,
    /// True while a scoped load is in flight.
    pub loading: bool,
}

impl ApplicationsState {
    /// Start a load for one posting: drop the previous posting's list and
    /// tag the state with the requesting job id.
    pub fn begin_load(&mut self, job_id: &str) {
        self.items.clear();
        self.for_job = Some(job_id.to_owned());
        self.loading = true;
    }

    /// Apply a load result if its tag still matches the selection.
    /// Returns whether the result was applied; stale results are dropped.
    pub fn apply_loaded(&mut self, job_id: &str, items: Vec<Application>) -> bool {
        if self.for_job.as_deref() != Some(job_id) {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    /// Record a failed load for one posting. Only clears the loading flag
    /// when the failure belongs to the current selection; the list was
    /// already emptied by `begin_load`, so no stale rows remain visible.
    pub fn fail_load(&mut self, job_id: &str) {
        if self.for_job.as_deref() == Some(job_id) {
            self.loading = false;
        }
    }

    /// Leave the detail view: discard the list and its tag.
    pub fn clear(&mut self) {
        self.items.clear();
        self.for_job = None;
        self.loading = false;
    }
}

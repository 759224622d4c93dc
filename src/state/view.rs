//! Dashboard view routing state.
//!
//! DESIGN
//! ======
//! The listing/detail split is an explicit tagged union rather than an
//! optional selected-job field, so the two mutually exclusive render paths
//! stay exhaustive under `match`.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::JobPosting;

/// Which of the two dashboard screens is shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DashboardView {
    /// Posting list, statistics, and the create form.
    #[default]
    Listing,
    /// One posting with its applicants.
    Detail(JobPosting),
}

impl DashboardView {
    /// Job id scoping the applicants list, when a posting is selected.
    pub fn selected_job_id(&self) -> Option<&str> {
        match self {
            Self::Listing => None,
            Self::Detail(job) => Some(job.id.as_str()),
        }
    }

    pub fn is_listing(&self) -> bool {
        matches!(self, Self::Listing)
    }
}

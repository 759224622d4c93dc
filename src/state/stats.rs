//! Derived summary statistics over the job-posting list.
//!
//! DESIGN
//! ======
//! Pure functions recomputed on every read. List sizes are tens to
//! hundreds of entries, so recompute-on-read is intentional simplicity —
//! no memoization.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::JobPosting;

/// Number of active postings.
pub fn active_jobs(jobs: &[JobPosting]) -> usize {
    jobs.len()
}

/// Sum of applicant counts across all postings.
pub fn total_applicants(jobs: &[JobPosting]) -> u64 {
    jobs.iter().map(|job| u64::from(job.applicants)).sum()
}

/// Arithmetic mean of match rates rounded half-up, or 0 for an empty list.
// Rates are bounded by 100, so the rounded mean always fits in u8.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn average_match_rate(jobs: &[JobPosting]) -> u8 {
    if jobs.is_empty() {
        return 0;
    }
    let sum: u64 = jobs.iter().map(|job| u64::from(job.match_rate)).sum();
    (sum as f64 / jobs.len() as f64).round() as u8
}

/// Number of postings whose priority equals "high", case-insensitively.
pub fn high_priority_count(jobs: &[JobPosting]) -> usize {
    jobs.iter()
        .filter(|job| job.priority.eq_ignore_ascii_case("high"))
        .count()
}

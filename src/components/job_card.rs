//! Clickable posting card for the dashboard listing.

#[cfg(test)]
#[path = "job_card_test.rs"]
mod job_card_test;

use leptos::prelude::*;

use crate::net::types::JobPosting;
use crate::util::format::format_posted_date;

/// CSS modifier class for a posting's priority marker. Priorities compare
/// case-insensitively; unknown tiers render as low priority.
pub fn priority_class(priority: &str) -> &'static str {
    if priority.eq_ignore_ascii_case("high") {
        "priority--high"
    } else if priority.eq_ignore_ascii_case("medium") {
        "priority--medium"
    } else {
        "priority--low"
    }
}

/// CSS modifier class for a match-rate figure.
pub fn match_rate_class(rate: u8) -> &'static str {
    if rate >= 90 {
        "match-rate--great"
    } else if rate >= 80 {
        "match-rate--good"
    } else {
        "match-rate--fair"
    }
}

/// A clickable card representing one posting in the dashboard list.
/// Activating the card selects the posting for the detail view.
#[component]
pub fn JobCard(job: JobPosting, on_select: Callback<JobPosting>) -> impl IntoView {
    let posted = format_posted_date(&job.posted_date);
    let priority_marker = format!("job-card__priority {}", priority_class(&job.priority));
    let match_value = format!("job-card__match-value {}", match_rate_class(job.match_rate));
    let select_job = job.clone();

    view! {
        <div class="job-card" on:click=move |_| on_select.run(select_job.clone())>
            <header class="job-card__header">
                <span class="job-card__title">{job.title.clone()}</span>
                <span class="badge">{job.department.clone()}</span>
            </header>
            <p class="job-card__description">{job.description.clone()}</p>

            <div class="job-card__row">
                <span class="job-card__location">{job.location.clone()}</span>
                <span class=priority_marker>{job.priority.clone()}</span>
            </div>

            <div class="job-card__row">
                <span class="job-card__applicants">{format!("{} applicants", job.applicants)}</span>
                <span class="job-card__posted">{posted}</span>
            </div>

            <div class="job-card__match">
                <span>"Match Rate"</span>
                <span class=match_value>{format!("{}%", job.match_rate)}</span>
            </div>
            <div class="job-card__progress">
                <div
                    class="job-card__progress-fill"
                    style=format!("width: {}%", job.match_rate)
                ></div>
            </div>
        </div>
    }
}

//! Summary statistic cards for the dashboard header row.

use leptos::prelude::*;

use crate::state::jobs::JobsState;
use crate::state::stats;

/// Four summary cards over the current posting list: active jobs, total
/// applicants, average match rate, and high-priority count. Values are
/// derived on every render; see `state::stats`.
#[component]
pub fn StatCards() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();

    let active = move || stats::active_jobs(&jobs.get().items).to_string();
    let applicants = move || stats::total_applicants(&jobs.get().items).to_string();
    let avg_match = move || format!("{}%", stats::average_match_rate(&jobs.get().items));
    let high_priority = move || stats::high_priority_count(&jobs.get().items).to_string();

    view! {
        <div class="stat-cards">
            <StatCard label="Active Jobs" value=Signal::derive(active)/>
            <StatCard label="Total Applicants" value=Signal::derive(applicants)/>
            <StatCard label="Avg Match Rate" value=Signal::derive(avg_match)/>
            <StatCard label="High Priority" value=Signal::derive(high_priority)/>
        </div>
    }
}

/// One labeled statistic tile.
#[component]
fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}

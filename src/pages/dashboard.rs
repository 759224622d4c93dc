//! Dashboard page: posting inventory, statistics, creation, and applicant
//! review.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the app's single route and its only data owner. It issues the
//! one-shot posting load on mount, selection-scoped applicant loads, and
//! draft submission; components render from the shared state contexts.
//! The listing/detail split is an exhaustive `match` over
//! `DashboardView`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::applicant_card::ApplicantCard;
use crate::components::job_card::{JobCard, priority_class};
use crate::components::job_form::JobForm;
use crate::components::stat_cards::StatCards;
use crate::net::types::JobPosting;
use crate::state::applications::ApplicationsState;
use crate::state::draft::JobDraft;
use crate::state::jobs::JobsState;
use crate::state::ui::UiState;
use crate::state::view::DashboardView;
use crate::util::format::format_posted_date;

/// Banner message shown when the initial posting load fails.
const LOAD_ERROR_MESSAGE: &str = "Failed to load job postings.";

fn form_toggle_label(form_open: bool) -> &'static str {
    if form_open { "Close Form" } else { "Create Job Listing" }
}

fn detail_subtitle(job: &JobPosting) -> String {
    format!("{} · {}", job.department, job.location)
}

/// Dashboard page — posting list with statistics and a create form, or
/// the selected posting with its applicants.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();
    let applications = expect_context::<RwSignal<ApplicationsState>>();
    let view_state = expect_context::<RwSignal<DashboardView>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Single initialization effect; the flag keeps reactive re-runs from
    // issuing a second collection load.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        jobs.update(|s| s.loading = true);
        load_job_postings(jobs);
    });

    // Apply the stored dark-mode preference once hydration is running.
    Effect::new(move || {
        let enabled = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    // Create-form state. The draft survives failed submissions so the
    // user's input is never dropped.
    let draft = RwSignal::new(JobDraft::default());
    let form_open = RwSignal::new(false);

    let on_select = Callback::new(move |job: JobPosting| {
        let job_id = job.id.clone();
        view_state.set(DashboardView::Detail(job));
        applications.update(|s| s.begin_load(&job_id));
        load_applications(applications, job_id);
    });

    let on_back = Callback::new(move |()| {
        view_state.set(DashboardView::Listing);
        applications.update(ApplicationsState::clear);
    });

    let on_submit = Callback::new(move |()| {
        let current = draft.get_untracked();
        if !current.is_complete() {
            return;
        }
        submit_job(jobs, draft, form_open, current);
    });

    view! {
        <div class="dashboard-page">
            {move || match view_state.get() {
                DashboardView::Listing => {
                    view! {
                        <ListingView
                            draft=draft
                            form_open=form_open
                            on_select=on_select
                            on_submit=on_submit
                        />
                    }
                        .into_any()
                }
                DashboardView::Detail(job) => {
                    view! { <DetailView job=job on_back=on_back/> }.into_any()
                }
            }}
        </div>
    }
}

/// Fetch the posting collection and replace the list, or surface the
/// load-failure banner. The loading flag clears on every outcome.
fn load_job_postings(jobs: RwSignal<JobsState>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_job_postings().await {
            Ok(items) => jobs.update(|s| s.apply_loaded(items)),
            Err(e) => {
                leptos::logging::warn!("job postings load failed: {e}");
                jobs.update(|s| s.fail_load(LOAD_ERROR_MESSAGE.to_owned()));
            }
        }
    });
}

/// Fetch applications for one posting. Results are applied through the
/// tagged-state methods, so responses for a posting the user has already
/// navigated away from are dropped instead of overwriting the view.
fn load_applications(applications: RwSignal<ApplicationsState>, job_id: String) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_applications(&job_id).await {
            Ok(items) => {
                applications.update(|s| {
                    if !s.apply_loaded(&job_id, items) {
                        leptos::logging::log!("dropped stale applications response for job {job_id}");
                    }
                });
            }
            Err(e) => {
                leptos::logging::warn!("applications load failed for job {job_id}: {e}");
                applications.update(|s| s.fail_load(&job_id));
            }
        }
    });
}

/// Submit the draft. On success the canonical record is prepended and the
/// form closes; on failure the form stays open with the draft intact.
fn submit_job(
    jobs: RwSignal<JobsState>,
    draft: RwSignal<JobDraft>,
    form_open: RwSignal<bool>,
    current: JobDraft,
) {
    let body = current.to_request();
    leptos::task::spawn_local(async move {
        match crate::net::api::create_job_posting(&body).await {
            Ok(created) => {
                jobs.update(|s| s.insert_created(created));
                draft.update(JobDraft::reset);
                form_open.set(false);
            }
            Err(e) => {
                leptos::logging::warn!("job creation failed: {e}");
            }
        }
    });
}

/// Listing screen: header with form toggle and dark-mode switch,
/// statistics row, optional create form, and the posting card grid.
#[component]
fn ListingView(
    draft: RwSignal<JobDraft>,
    form_open: RwSignal<bool>,
    on_select: Callback<JobPosting>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="dashboard-page__header">
            <div>
                <h1 class="dashboard-page__title">"HR Dashboard"</h1>
                <p class="dashboard-page__subtitle">"Manage your job postings and applicants"</p>
            </div>
            <span class="dashboard-page__spacer"></span>
            <button
                class="btn dashboard-page__dark-toggle"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
            <button class="btn btn--primary" on:click=move |_| form_open.update(|open| *open = !*open)>
                {move || form_toggle_label(form_open.get())}
            </button>
        </header>

        <Show when=move || form_open.get()>
            <JobForm draft=draft on_submit=on_submit/>
        </Show>

        <StatCards/>

        <h2 class="dashboard-page__section-title">"Active Job Postings"</h2>

        <Show when=move || jobs.get().error.is_some()>
            <p class="dashboard-page__error">{move || jobs.get().error.unwrap_or_default()}</p>
        </Show>

        <Show
            when=move || !jobs.get().loading
            fallback=move || view! { <p>"Loading job postings..."</p> }
        >
            <div class="dashboard-page__cards">
                {move || {
                    jobs.get()
                        .items
                        .into_iter()
                        .map(|job| view! { <JobCard job=job on_select=on_select/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}

/// Detail screen: the selected posting and its applicants.
#[component]
fn DetailView(job: JobPosting, on_back: Callback<()>) -> impl IntoView {
    let applications = expect_context::<RwSignal<ApplicationsState>>();

    let subtitle = detail_subtitle(&job);
    let posted = format_posted_date(&job.posted_date);
    let priority_badge = format!("badge {}", priority_class(&job.priority));

    view! {
        <button class="job-detail__back" on:click=move |_| on_back.run(())>
            "Back to Dashboard"
        </button>

        <section class="job-detail">
            <header class="job-detail__header">
                <div>
                    <h2 class="job-detail__title">{job.title.clone()}</h2>
                    <p class="job-detail__subtitle">{subtitle}</p>
                </div>
                <div class="job-detail__meta">
                    <span class="job-detail__applicant-count">
                        {format!("{} Applicants", job.applicants)}
                    </span>
                    <span class="job-detail__posted">{format!("Posted on {posted}")}</span>
                </div>
            </header>

            <p class="job-detail__description">{job.description.clone()}</p>
            <div class="job-detail__badges">
                <span class="badge">{job.department.clone()}</span>
                <span class="badge">{job.location.clone()}</span>
                <span class=priority_badge>{format!("{} Priority", job.priority)}</span>
            </div>

            <h3 class="job-detail__applicants-title">"Applicants"</h3>
            <Show
                when=move || !applications.get().loading
                fallback=move || view! { <p>"Loading applicants..."</p> }
            >
                <Show
                    when=move || !applications.get().items.is_empty()
                    fallback=move || view! { <p>"No applicants for this job yet."</p> }
                >
                    <ul class="job-detail__applicant-list">
                        {move || {
                            applications
                                .get()
                                .items
                                .into_iter()
                                .map(|application| view! { <ApplicantCard application=application/> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </section>
    }
}

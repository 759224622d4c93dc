//! Create-posting form bound to the shared draft.
//!
//! The form performs required-field presence checks only; all other
//! validation belongs to the backend. A failed submission leaves the
//! draft untouched so the user can correct and resubmit.

use leptos::prelude::*;

use crate::state::draft::JobDraft;

/// Job-posting creation form. Field edits write through to the `draft`
/// signal; submission is delegated to the page via `on_submit`.
#[component]
pub fn JobForm(draft: RwSignal<JobDraft>, on_submit: Callback<()>) -> impl IntoView {
    let submit_ready = move || draft.get().is_complete();

    view! {
        <section class="job-form">
            <h2 class="job-form__title">"Create a Job Posting"</h2>

            <DraftInput
                label="Job Title"
                value=Signal::derive(move || draft.get().title)
                on_input=Callback::new(move |v| draft.update(|d| d.title = v))
            />
            <DraftInput
                label="Department"
                value=Signal::derive(move || draft.get().department)
                on_input=Callback::new(move |v| draft.update(|d| d.department = v))
            />
            <DraftInput
                label="Location"
                value=Signal::derive(move || draft.get().location)
                on_input=Callback::new(move |v| draft.update(|d| d.location = v))
            />
            <DraftInput
                label="Salary"
                value=Signal::derive(move || draft.get().salary)
                on_input=Callback::new(move |v| draft.update(|d| d.salary = v))
            />
            <DraftInput
                label="Job Type (e.g., Full-Time, Part-Time)"
                value=Signal::derive(move || draft.get().job_type)
                on_input=Callback::new(move |v| draft.update(|d| d.job_type = v))
            />
            <DraftTextarea
                label="Description"
                value=Signal::derive(move || draft.get().description)
                on_input=Callback::new(move |v| draft.update(|d| d.description = v))
            />
            <DraftTextarea
                label="Requirements (newline-separated)"
                value=Signal::derive(move || draft.get().requirements)
                on_input=Callback::new(move |v| draft.update(|d| d.requirements = v))
            />
            <DraftTextarea
                label="Responsibilities (newline-separated)"
                value=Signal::derive(move || draft.get().responsibilities)
                on_input=Callback::new(move |v| draft.update(|d| d.responsibilities = v))
            />

            <button
                class="btn btn--primary job-form__submit"
                prop:disabled=move || !submit_ready()
                on:click=move |_| on_submit.run(())
            >
                "Post Job"
            </button>
        </section>
    }
}

/// Single-line labeled form field.
#[component]
fn DraftInput(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="job-form__label">
            {label}
            <input
                class="job-form__input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Multi-line labeled form field.
#[component]
fn DraftTextarea(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="job-form__label">
            {label}
            <textarea
                class="job-form__textarea"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

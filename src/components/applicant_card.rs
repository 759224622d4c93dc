//! Applicant entry for the job detail view, with resume download.

use leptos::prelude::*;

use crate::net::types::Application;

/// One applicant row: contact details, cover letter, and a resume
/// download link. The resume is embedded as a `data:` URI so the download
/// needs no further backend round-trip.
#[component]
pub fn ApplicantCard(application: Application) -> impl IntoView {
    let phone = application
        .applicant_phone
        .clone()
        .unwrap_or_else(|| "N/A".to_owned());
    let cover_letter = application
        .cover_letter
        .clone()
        .unwrap_or_else(|| "No cover letter provided".to_owned());
    let resume_href = application.resume.data_uri();
    let resume_name = application.resume.filename.clone();

    view! {
        <li class="applicant-card">
            <p class="applicant-card__line">
                <strong>"Name: "</strong>
                {application.applicant_name.clone()}
            </p>
            <p class="applicant-card__line">
                <strong>"Email: "</strong>
                {application.applicant_email.clone()}
            </p>
            <p class="applicant-card__line">
                <strong>"Phone: "</strong>
                {phone}
            </p>
            <p class="applicant-card__line">
                <strong>"Cover Letter: "</strong>
                {cover_letter}
            </p>
            <p class="applicant-card__line">
                <strong>"Resume: "</strong>
                <a class="applicant-card__resume" href=resume_href download=resume_name>
                    "Download Resume"
                </a>
            </p>
        </li>
    }
}

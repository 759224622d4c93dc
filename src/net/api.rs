//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade UI behavior without crashing hydration. Transport
//! failures, non-2xx statuses, and `success: false` envelopes all collapse
//! into the error string; there is no retry and no timeout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::ApiEnvelope;
use super::types::{Application, JobPosting, NewJobPosting};

#[cfg(any(test, feature = "hydrate"))]
const JOB_POSTINGS_ENDPOINT: &str = "/api/job-postings";

#[cfg(any(test, feature = "hydrate"))]
fn applications_endpoint(job_id: &str) -> String {
    format!("/api/applications?jobId={job_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn job_postings_failed_message(status: u16) -> String {
    format!("job postings request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn applications_failed_message(status: u16) -> String {
    format!("applications request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_job_failed_message(status: u16) -> String {
    format!("create job request failed: {status}")
}

/// Fetch the full job-posting collection from `GET /api/job-postings`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the response envelope signals failure.
pub async fn fetch_job_postings() -> Result<Vec<JobPosting>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(JOB_POSTINGS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(job_postings_failed_message(resp.status()));
        }
        let envelope: ApiEnvelope<Vec<JobPosting>> =
            resp.json().await.map_err(|e| e.to_string())?;
        envelope.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch applications scoped to one posting from
/// `GET /api/applications?jobId=<id>`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the response envelope signals failure.
pub async fn fetch_applications(job_id: &str) -> Result<Vec<Application>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = applications_endpoint(job_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(applications_failed_message(resp.status()));
        }
        let envelope: ApiEnvelope<Vec<Application>> =
            resp.json().await.map_err(|e| e.to_string())?;
        envelope.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err("not available on server".to_owned())
    }
}

/// Create a job posting via `POST /api/job-postings`.
///
/// Returns the canonical record the backend stored, which the caller
/// prepends to the in-memory list.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the response envelope signals failure.
pub async fn create_job_posting(new_job: &NewJobPosting) -> Result<JobPosting, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(JOB_POSTINGS_ENDPOINT)
            .json(new_job)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(create_job_failed_message(resp.status()));
        }
        let envelope: ApiEnvelope<JobPosting> = resp.json().await.map_err(|e| e.to_string())?;
        envelope.into_result()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new_job;
        Err("not available on server".to_owned())
    }
}

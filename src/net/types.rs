//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's camelCase JSON documents so serde
//! round-trips stay lossless. Deserializers are tolerant where the backend
//! is known to be loose: ids arrive as `id` or Mongo-style `_id`, and
//! resume payloads arrive either as a plain byte array or as a Node
//! `{"type":"Buffer","data":[...]}` object.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The `{ success, data, error }` envelope wrapping every API response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the backend processed the request.
    pub success: bool,
    /// Payload, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Backend-provided failure description, present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Collapse the envelope into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error string on `success: false`, a generic
    /// message when the backend omitted one, and a missing-payload message
    /// when `success: true` arrives without `data`.
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "response missing data".to_owned())
        } else {
            Err(self.error.unwrap_or_else(|| "request failed".to_owned()))
        }
    }
}

/// An open position as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Unique posting identifier. The backend emits `id` or `_id`
    /// depending on the route; both spellings are accepted.
    #[serde(alias = "_id")]
    pub id: String,
    /// Position title.
    pub title: String,
    /// Owning department name.
    pub department: String,
    /// Office location or "Remote".
    pub location: String,
    /// Salary range as free-form text (e.g. `"$120k-$150k"`).
    pub salary: String,
    /// Role description shown on the card and detail view.
    pub description: String,
    /// Ordered requirement lines.
    pub requirements: Vec<String>,
    /// Ordered responsibility lines.
    pub responsibilities: Vec<String>,
    /// Employment type (e.g. `"Full-Time"`).
    #[serde(rename = "type")]
    pub job_type: String,
    /// Free-form priority label; compared case-insensitively, with
    /// anything other than high/medium treated as the low tier.
    pub priority: String,
    /// Number of applications received, maintained by the backend.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub applicants: u32,
    /// Precomputed candidate-fit percentage in `0..=100`.
    #[serde(rename = "matchRate", deserialize_with = "deserialize_u8_from_number")]
    pub match_rate: u8,
    /// ISO 8601 timestamp of when the posting went live.
    #[serde(rename = "postedDate")]
    pub posted_date: String,
}

/// A candidate's submission against one job posting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Unique application identifier; accepts `id` or `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    /// Parent posting reference. Informational only — list scoping relies
    /// on request tagging, not per-row job ids.
    #[serde(rename = "jobId", default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Candidate display name.
    #[serde(rename = "applicantName")]
    pub applicant_name: String,
    /// Candidate contact email.
    #[serde(rename = "applicantEmail")]
    pub applicant_email: String,
    /// Candidate phone number, if provided.
    #[serde(rename = "applicantPhone", default, skip_serializing_if = "Option::is_none")]
    pub applicant_phone: Option<String>,
    /// Cover letter text, if provided.
    #[serde(rename = "coverLetter", default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    /// Uploaded resume document.
    pub resume: ResumeFile,
}

/// Resume binary payload with enough metadata to offer a download.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeFile {
    /// Original upload filename, used as the download name.
    pub filename: String,
    /// MIME type of the payload (e.g. `"application/pdf"`).
    #[serde(rename = "contentType")]
    pub content_type: String,
    /// Raw document bytes.
    #[serde(deserialize_with = "deserialize_resume_bytes")]
    pub data: Vec<u8>,
}

impl ResumeFile {
    /// Render the resume as a `data:` URI for a client-side download link.
    /// The payload is base64-encoded into the URI.
    pub fn data_uri(&self) -> String {
        use base64::Engine as _;
        let payload = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{payload}", self.content_type)
    }
}

/// Request body for creating a job posting.
///
/// `job_type` is always sent: the backend stores it, and the form collects
/// it alongside the other required fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewJobPosting {
    pub title: String,
    pub department: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    /// Requirement lines, one element per newline-delimited form line.
    pub requirements: Vec<String>,
    /// Responsibility lines, one element per newline-delimited form line.
    pub responsibilities: Vec<String>,
    #[serde(rename = "type")]
    pub job_type: String,
}

fn deserialize_u8_from_number<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_u32_from_number(deserializer)?;
    u8::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u8")))
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int)
                    .map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            // JS backends routinely emit integral floats for counters.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected unsigned integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_resume_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    resume_bytes_from_value(&value)
        .ok_or_else(|| D::Error::custom("expected byte array or Buffer object"))
}

/// Extract resume bytes from either wire shape: a plain JSON array of
/// numbers, or a Node `Buffer` serialization holding the array under `data`.
fn resume_bytes_from_value(value: &serde_json::Value) -> Option<Vec<u8>> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(map) => map.get("data")?.as_array()?,
        _ => return None,
    };
    items
        .iter()
        .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
        .collect()
}

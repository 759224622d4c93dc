use super::*;

fn resume_json() -> serde_json::Value {
    serde_json::json!({
        "filename": "resume.pdf",
        "contentType": "application/pdf",
        "data": [72, 105]
    })
}

#[test]
fn envelope_success_yields_payload() {
    let envelope: ApiEnvelope<Vec<String>> =
        serde_json::from_value(serde_json::json!({ "success": true, "data": ["a"] }))
            .expect("envelope");
    assert_eq!(envelope.into_result(), Ok(vec!["a".to_owned()]));
}

#[test]
fn envelope_failure_yields_backend_error() {
    let envelope: ApiEnvelope<Vec<String>> =
        serde_json::from_value(serde_json::json!({ "success": false, "error": "boom" }))
            .expect("envelope");
    assert_eq!(envelope.into_result(), Err("boom".to_owned()));
}

#[test]
fn envelope_failure_without_error_uses_generic_message() {
    let envelope: ApiEnvelope<Vec<String>> =
        serde_json::from_value(serde_json::json!({ "success": false })).expect("envelope");
    assert_eq!(envelope.into_result(), Err("request failed".to_owned()));
}

#[test]
fn envelope_success_without_data_is_an_error_not_a_panic() {
    let envelope: ApiEnvelope<Vec<String>> =
        serde_json::from_value(serde_json::json!({ "success": true })).expect("envelope");
    assert_eq!(envelope.into_result(), Err("response missing data".to_owned()));
}

#[test]
fn job_posting_accepts_both_id_spellings() {
    let base = serde_json::json!({
        "title": "Platform Engineer",
        "department": "Engineering",
        "location": "Remote",
        "salary": "$140k-$170k",
        "description": "Build the platform.",
        "requirements": ["Rust"],
        "responsibilities": ["Ship"],
        "type": "Full-Time",
        "priority": "High",
        "applicants": 12,
        "matchRate": 87,
        "postedDate": "2024-01-15T00:00:00.000Z"
    });

    let mut with_id = base.clone();
    with_id["id"] = serde_json::json!("j-1");
    let job: JobPosting = serde_json::from_value(with_id).expect("job with id");
    assert_eq!(job.id, "j-1");
    assert_eq!(job.job_type, "Full-Time");
    assert_eq!(job.match_rate, 87);

    let mut with_mongo_id = base;
    with_mongo_id["_id"] = serde_json::json!("j-2");
    let job: JobPosting = serde_json::from_value(with_mongo_id).expect("job with _id");
    assert_eq!(job.id, "j-2");
}

#[test]
fn job_posting_counters_accept_integral_floats() {
    let job: JobPosting = serde_json::from_value(serde_json::json!({
        "id": "j-1",
        "title": "t",
        "department": "d",
        "location": "l",
        "salary": "s",
        "description": "desc",
        "requirements": [],
        "responsibilities": [],
        "type": "Full-Time",
        "priority": "low",
        "applicants": 3.0,
        "matchRate": 91.0,
        "postedDate": "2024-01-15T00:00:00.000Z"
    }))
    .expect("job");
    assert_eq!(job.applicants, 3);
    assert_eq!(job.match_rate, 91);
}

#[test]
fn job_posting_rejects_fractional_match_rate() {
    let result: Result<JobPosting, _> = serde_json::from_value(serde_json::json!({
        "id": "j-1",
        "title": "t",
        "department": "d",
        "location": "l",
        "salary": "s",
        "description": "desc",
        "requirements": [],
        "responsibilities": [],
        "type": "Full-Time",
        "priority": "low",
        "applicants": 3,
        "matchRate": 87.5,
        "postedDate": "2024-01-15T00:00:00.000Z"
    }));
    assert!(result.is_err());
}

#[test]
fn application_parses_optional_fields_and_buffer_payload() {
    let app: Application = serde_json::from_value(serde_json::json!({
        "_id": "a-1",
        "jobId": "j-1",
        "applicantName": "Ada Lovelace",
        "applicantEmail": "ada@example.com",
        "resume": {
            "filename": "resume.pdf",
            "contentType": "application/pdf",
            "data": { "type": "Buffer", "data": [1, 2, 255] }
        }
    }))
    .expect("application");

    assert_eq!(app.id, "a-1");
    assert_eq!(app.job_id.as_deref(), Some("j-1"));
    assert_eq!(app.applicant_phone, None);
    assert_eq!(app.cover_letter, None);
    assert_eq!(app.resume.data, vec![1, 2, 255]);
}

#[test]
fn resume_bytes_accept_plain_array() {
    let resume: ResumeFile = serde_json::from_value(resume_json()).expect("resume");
    assert_eq!(resume.data, vec![72, 105]);
}

#[test]
fn resume_bytes_reject_out_of_range_values() {
    let result: Result<ResumeFile, _> = serde_json::from_value(serde_json::json!({
        "filename": "resume.pdf",
        "contentType": "application/pdf",
        "data": [7, 256]
    }));
    assert!(result.is_err());
}

#[test]
fn resume_data_uri_embeds_content_type_and_base64_payload() {
    let resume: ResumeFile = serde_json::from_value(resume_json()).expect("resume");
    // [72, 105] is "Hi", which base64-encodes to "SGk=".
    assert_eq!(resume.data_uri(), "data:application/pdf;base64,SGk=");
}

#[test]
fn new_job_posting_serializes_type_field() {
    let body = NewJobPosting {
        title: "Recruiter".to_owned(),
        department: "People".to_owned(),
        location: "Berlin".to_owned(),
        salary: "€60k".to_owned(),
        description: "Hire well.".to_owned(),
        requirements: vec!["a".to_owned(), "b".to_owned(), String::new()],
        responsibilities: vec!["c".to_owned()],
        job_type: "Part-Time".to_owned(),
    };
    let json = serde_json::to_value(&body).expect("serialize");
    assert_eq!(json["type"], serde_json::json!("Part-Time"));
    assert_eq!(json["requirements"], serde_json::json!(["a", "b", ""]));
    assert!(json.get("job_type").is_none());
}

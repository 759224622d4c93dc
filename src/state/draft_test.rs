use super::*;

fn filled_draft() -> JobDraft {
    JobDraft {
        title: "Platform Engineer".to_owned(),
        department: "Engineering".to_owned(),
        location: "Remote".to_owned(),
        salary: "$140k-$170k".to_owned(),
        description: "Build the platform.".to_owned(),
        requirements: "Rust\n5 years experience".to_owned(),
        responsibilities: "Ship features".to_owned(),
        job_type: "Full-Time".to_owned(),
    }
}

#[test]
fn split_lines_keeps_trailing_empty_element() {
    assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
}

#[test]
fn split_lines_keeps_interior_blank_lines_verbatim() {
    assert_eq!(split_lines("a\n\n  b "), vec!["a", "", "  b "]);
}

#[test]
fn split_lines_of_single_value_is_one_element() {
    assert_eq!(split_lines("only"), vec!["only"]);
}

#[test]
fn to_request_splits_multiline_fields_and_keeps_type() {
    let body = filled_draft().to_request();
    assert_eq!(body.requirements, vec!["Rust", "5 years experience"]);
    assert_eq!(body.responsibilities, vec!["Ship features"]);
    assert_eq!(body.job_type, "Full-Time");
}

#[test]
fn is_complete_requires_every_field() {
    assert!(filled_draft().is_complete());

    let mut missing = filled_draft();
    missing.job_type = String::new();
    assert!(!missing.is_complete());

    assert!(!JobDraft::default().is_complete());
}

#[test]
fn reset_returns_all_fields_to_empty() {
    let mut draft = filled_draft();
    draft.reset();
    assert_eq!(draft, JobDraft::default());
    assert!(draft.title.is_empty());
    assert!(draft.requirements.is_empty());
}

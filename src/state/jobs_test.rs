use super::*;

fn job(id: &str) -> JobPosting {
    JobPosting {
        id: id.to_owned(),
        title: format!("Role {id}"),
        department: "Engineering".to_owned(),
        location: "Remote".to_owned(),
        salary: "$100k".to_owned(),
        description: "desc".to_owned(),
        requirements: vec![],
        responsibilities: vec![],
        job_type: "Full-Time".to_owned(),
        priority: "low".to_owned(),
        applicants: 0,
        match_rate: 50,
        posted_date: "2024-01-15T00:00:00.000Z".to_owned(),
    }
}

#[test]
fn jobs_state_defaults() {
    let s = JobsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn apply_loaded_replaces_list_and_clears_flags() {
    let mut s = JobsState {
        items: vec![job("old")],
        loading: true,
        error: Some("previous failure".to_owned()),
    };
    s.apply_loaded(vec![job("a"), job("b")]);
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.items[0].id, "a");
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn fail_load_leaves_list_empty_with_message() {
    let mut s = JobsState {
        items: vec![],
        loading: true,
        error: None,
    };
    s.fail_load("Failed to load job postings.".to_owned());
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert_eq!(s.error.as_deref(), Some("Failed to load job postings."));
}

#[test]
fn insert_created_prepends_at_index_zero() {
    let mut s = JobsState::default();
    s.apply_loaded(vec![job("a"), job("b")]);
    s.insert_created(job("new"));
    assert_eq!(s.items[0].id, "new");
    assert_eq!(s.items.len(), 3);
}

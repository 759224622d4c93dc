use super::*;

fn job(id: &str) -> JobPosting {
    JobPosting {
        id: id.to_owned(),
        title: "t".to_owned(),
        department: "d".to_owned(),
        location: "l".to_owned(),
        salary: "s".to_owned(),
        description: "desc".to_owned(),
        requirements: vec![],
        responsibilities: vec![],
        job_type: "Full-Time".to_owned(),
        priority: "low".to_owned(),
        applicants: 0,
        match_rate: 0,
        posted_date: "2024-01-15T00:00:00.000Z".to_owned(),
    }
}

#[test]
fn default_view_is_listing() {
    let view = DashboardView::default();
    assert!(view.is_listing());
    assert_eq!(view.selected_job_id(), None);
}

#[test]
fn detail_view_exposes_selected_job_id() {
    let view = DashboardView::Detail(job("j-7"));
    assert!(!view.is_listing());
    assert_eq!(view.selected_job_id(), Some("j-7"));
}

//! Transient form state for creating a job posting.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::net::types::NewJobPosting;

/// Uncommitted create-form input. Exists only while the form is open;
/// discarded on successful submit or cancel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    /// Newline-delimited requirement lines as typed.
    pub requirements: String,
    /// Newline-delimited responsibility lines as typed.
    pub responsibilities: String,
    pub job_type: String,
}

impl JobDraft {
    /// Whether every required field has content. This is the only
    /// validation the form performs.
    pub fn is_complete(&self) -> bool {
        !(self.title.is_empty()
            || self.department.is_empty()
            || self.location.is_empty()
            || self.salary.is_empty()
            || self.description.is_empty()
            || self.requirements.is_empty()
            || self.responsibilities.is_empty()
            || self.job_type.is_empty())
    }

    /// Build the request body, splitting the two multi-line fields.
    pub fn to_request(&self) -> NewJobPosting {
        NewJobPosting {
            title: self.title.clone(),
            department: self.department.clone(),
            location: self.location.clone(),
            salary: self.salary.clone(),
            description: self.description.clone(),
            requirements: split_lines(&self.requirements),
            responsibilities: split_lines(&self.responsibilities),
            job_type: self.job_type.clone(),
        }
    }

    /// Return every field to empty after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Split a textarea value into one element per line.
///
/// Lines are kept verbatim: no trimming and no empty-line filtering, so a
/// trailing newline yields a trailing empty element (`"a\nb\n"` becomes
/// `["a", "b", ""]`). The backend receives exactly what was typed.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(ToOwned::to_owned).collect()
}

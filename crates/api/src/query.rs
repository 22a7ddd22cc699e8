//! Query parameter types for API handlers.

use printdesk_core::error::CoreError;
use printdesk_core::job::{JobSearch, JobStatus};
use serde::Deserialize;

/// Query parameters for `GET /api/v1/jobs/search`.
///
/// `faculties` and `statuses` are comma-separated lists; missing or empty
/// lists do not filter.
#[derive(Debug, Default, Deserialize)]
pub struct JobSearchParams {
    pub q: Option<String>,
    pub faculties: Option<String>,
    pub statuses: Option<String>,
}

impl JobSearchParams {
    /// Convert into a [`JobSearch`], rejecting unknown status names.
    pub fn into_search(self) -> Result<JobSearch, CoreError> {
        let statuses = split_list(self.statuses.as_deref())
            .into_iter()
            .map(|s| s.parse::<JobStatus>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(JobSearch {
            query: self.q.unwrap_or_default(),
            faculties: split_list(self.faculties.as_deref()),
            statuses,
        })
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

//! Row model for the `jobs` table.

use printdesk_core::error::CoreError;
use printdesk_core::job::{split_elements, Job, JobStatus};
use printdesk_core::types::DbId;
use sqlx::FromRow;

/// A row from the `jobs` table, before status and element decoding.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: DbId,
    pub user_name: String,
    pub printer_id: i32,
    pub faculty: String,
    pub status: String,
    pub elements: String,
}

impl TryFrom<JobRow> for Job {
    type Error = CoreError;

    /// Fails with [`CoreError::InvalidStatus`] when the status column holds
    /// anything but one of the four canonical strings.
    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let status: JobStatus = row.status.parse()?;
        Ok(Job {
            id: row.id,
            user_name: row.user_name,
            printer_id: row.printer_id,
            faculty: row.faculty,
            status,
            elements: split_elements(&row.elements),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn row(status: &str, elements: &str) -> JobRow {
        JobRow {
            id: 3,
            user_name: "Bart".into(),
            printer_id: 2,
            faculty: "Faculty of Law".into(),
            status: status.into(),
            elements: elements.into(),
        }
    }

    #[test]
    fn row_converts_to_job() {
        let job = Job::try_from(row("Good", "A101,A102")).unwrap();
        assert_eq!(job.id, 3);
        assert_eq!(job.status, JobStatus::Good);
        assert_eq!(job.elements, vec!["A101".to_string(), "A102".to_string()]);
    }

    #[test]
    fn unknown_status_column_rejected() {
        assert_matches!(
            Job::try_from(row("Lost", "A101")),
            Err(CoreError::InvalidStatus(s)) if s == "Lost"
        );
    }
}

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{job_not_found, JobStore};
use crate::error::CoreError;
use crate::job::{Job, JobSearch, NewJob};
use crate::types::DbId;

/// In-process [`JobStore`]. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    jobs: BTreeMap<DbId, Job>,
    last_id: DbId,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn create_job(&self, job: &NewJob) -> Result<DbId, CoreError> {
        job.validate()?;

        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.jobs.insert(id, job.clone().with_id(id));
        Ok(id)
    }

    async fn get_job(&self, id: DbId) -> Result<Option<Job>, CoreError> {
        Ok(self.inner.read().await.jobs.get(&id).cloned())
    }

    async fn update_job(&self, job: &Job) -> Result<(), CoreError> {
        job.validate()?;

        let mut inner = self.inner.write().await;
        let slot = inner.jobs.get_mut(&job.id).ok_or_else(|| job_not_found(job.id))?;
        *slot = job.clone();
        Ok(())
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, CoreError> {
        Ok(self.inner.read().await.jobs.values().cloned().collect())
    }

    async fn search_jobs(&self, search: &JobSearch) -> Result<Vec<Job>, CoreError> {
        Ok(self
            .inner
            .read()
            .await
            .jobs
            .values()
            .rev()
            .filter(|job| search.matches(job))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::job::JobStatus;

    fn new_job(user: &str, faculty: &str, status: JobStatus, elements: &[&str]) -> NewJob {
        NewJob {
            user_name: user.to_string(),
            printer_id: 1,
            faculty: faculty.to_string(),
            status,
            elements: elements.iter().map(|e| e.to_string()).collect(),
        }
    }

    async fn seeded() -> MemoryJobStore {
        let store = MemoryJobStore::new();
        for job in [
            new_job("Tarik", "Faculty of Arts", JobStatus::Failed, &["A101"]),
            new_job("szymon", "Faculty of Arts", JobStatus::Failed, &["A103", "A104"]),
            new_job("Bart", "Faculty of Law", JobStatus::Good, &["B202"]),
            new_job("Maciek", "Faculty of Medicine", JobStatus::Failed, &["Braille_A101"]),
            new_job("Bart", "Faculty of Arts", JobStatus::Printing, &["A101", "A102"]),
        ] {
            store.create_job(&job).await.unwrap();
        }
        store
    }

    fn ids(jobs: &[Job]) -> Vec<DbId> {
        jobs.iter().map(|j| j.id).collect()
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = MemoryJobStore::new();
        let input = new_job("Tarik", "Faculty of Arts", JobStatus::Pending, &["A101"]);

        let id = store.create_job(&input).await.unwrap();
        assert_eq!(id, 1);

        let fetched = store.get_job(id).await.unwrap().unwrap();
        assert_eq!(fetched, input.with_id(1));
    }

    #[tokio::test]
    async fn ids_increase_monotonically() {
        let store = MemoryJobStore::new();
        let input = new_job("Tarik", "Faculty of Arts", JobStatus::Pending, &["A101"]);

        let first = store.create_job(&input).await.unwrap();
        let second = store.create_job(&input).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn create_rejects_invalid_job() {
        let store = MemoryJobStore::new();
        let input = new_job("Tarik", "Faculty of Arts", JobStatus::Pending, &[]);

        assert_matches!(store.create_job(&input).await, Err(CoreError::Validation(_)));
        assert!(store.list_jobs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let store = MemoryJobStore::new();
        assert!(store.get_job(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_does_not_insert() {
        let store = MemoryJobStore::new();
        let ghost = new_job("Tarik", "Faculty of Arts", JobStatus::Pending, &["A101"]).with_id(7);

        assert_matches!(
            store.update_job(&ghost).await,
            Err(CoreError::NotFound { entity: "Job", id: 7 })
        );
        assert!(store.list_jobs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let store = seeded().await;
        let mut job = store.get_job(3).await.unwrap().unwrap();
        job.user_name = "Bartek".into();
        job.printer_id = 5;
        job.faculty = "Faculty of Science".into();
        job.status = JobStatus::Failed;
        job.elements = vec!["C301".into()];

        store.update_job(&job).await.unwrap();
        assert_eq!(store.get_job(3).await.unwrap().unwrap(), job);
    }

    #[tokio::test]
    async fn list_is_id_ascending() {
        let store = seeded().await;
        assert_eq!(ids(&store.list_jobs().await.unwrap()), vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn unfiltered_search_returns_all_descending() {
        let store = seeded().await;
        let jobs = store.search_jobs(&JobSearch::default()).await.unwrap();
        assert_eq!(ids(&jobs), vec![5, 4, 3, 2, 1]);
    }

    #[tokio::test]
    async fn search_by_faculty() {
        let store = seeded().await;
        let search = JobSearch {
            faculties: vec!["Faculty of Arts".into()],
            ..Default::default()
        };
        let jobs = store.search_jobs(&search).await.unwrap();
        assert_eq!(ids(&jobs), vec![5, 2, 1]);
        assert!(jobs.iter().all(|j| j.faculty == "Faculty of Arts"));
    }

    #[tokio::test]
    async fn search_by_query_and_status() {
        let store = seeded().await;
        let search = JobSearch {
            query: "a101".into(),
            statuses: vec![JobStatus::Failed],
            ..Default::default()
        };
        let jobs = store.search_jobs(&search).await.unwrap();
        assert_eq!(ids(&jobs), vec![4, 1]);
    }
}

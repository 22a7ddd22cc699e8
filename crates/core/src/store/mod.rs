//! Job persistence seam.
//!
//! [`JobStore`] is implemented by the PostgreSQL store in `printdesk-db`
//! and by [`MemoryJobStore`] for tests and local tooling. Every
//! implementation validates jobs on create and update.

mod memory;

pub use memory::MemoryJobStore;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::job::{Job, JobSearch, NewJob};
use crate::types::DbId;

/// Durable CRUD and search over print jobs.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Persist a new job and return its id. Ids increase monotonically
    /// across the whole store.
    async fn create_job(&self, job: &NewJob) -> Result<DbId, CoreError>;

    /// Exact lookup by id.
    async fn get_job(&self, id: DbId) -> Result<Option<Job>, CoreError>;

    /// Replace every mutable field of the job with id `job.id`.
    ///
    /// Fails with [`CoreError::NotFound`] when no such job exists; never
    /// inserts.
    async fn update_job(&self, job: &Job) -> Result<(), CoreError>;

    /// All jobs, id ascending.
    async fn list_jobs(&self) -> Result<Vec<Job>, CoreError>;

    /// Jobs passing every filter in `search`, id descending.
    async fn search_jobs(&self, search: &JobSearch) -> Result<Vec<Job>, CoreError>;

    /// Liveness probe for health endpoints.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Build the `NotFound` error for a job id.
pub fn job_not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "Job", id }
}

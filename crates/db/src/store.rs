//! [`JobStore`] backed by PostgreSQL.

use async_trait::async_trait;
use printdesk_core::error::CoreError;
use printdesk_core::job::{Job, JobSearch, NewJob};
use printdesk_core::store::{job_not_found, JobStore};
use printdesk_core::types::DbId;

use crate::models::job::JobRow;
use crate::repositories::JobRepo;
use crate::DbPool;

/// Default production store. Cheap to clone; shares the pool.
#[derive(Debug, Clone)]
pub struct PgJobStore {
    pool: DbPool,
}

impl PgJobStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Log a database failure and wrap it as an internal core error.
fn db_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(format!("Database error: {err}"))
}

fn rows_to_jobs(rows: Vec<JobRow>) -> Result<Vec<Job>, CoreError> {
    rows.into_iter().map(Job::try_from).collect()
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn create_job(&self, job: &NewJob) -> Result<DbId, CoreError> {
        job.validate()?;
        JobRepo::create(&self.pool, job).await.map_err(db_error)
    }

    async fn get_job(&self, id: DbId) -> Result<Option<Job>, CoreError> {
        JobRepo::find_by_id(&self.pool, id)
            .await
            .map_err(db_error)?
            .map(Job::try_from)
            .transpose()
    }

    async fn update_job(&self, job: &Job) -> Result<(), CoreError> {
        job.validate()?;
        let updated = JobRepo::update(&self.pool, job).await.map_err(db_error)?;
        if !updated {
            return Err(job_not_found(job.id));
        }
        Ok(())
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, CoreError> {
        rows_to_jobs(JobRepo::list(&self.pool).await.map_err(db_error)?)
    }

    async fn search_jobs(&self, search: &JobSearch) -> Result<Vec<Job>, CoreError> {
        rows_to_jobs(JobRepo::search(&self.pool, search).await.map_err(db_error)?)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(db_error)
    }
}

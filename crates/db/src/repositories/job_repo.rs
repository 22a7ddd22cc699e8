//! Repository for the `jobs` table.
//!
//! Status values are written and filtered as their canonical strings; the
//! element list travels as one comma-joined column.

use printdesk_core::job::{join_elements, Job, JobSearch, NewJob};
use printdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::job::JobRow;

/// Column list for `jobs` queries.
const COLUMNS: &str = "id, user_name, printer_id, faculty, status, elements";

/// Provides CRUD and search operations for print jobs.
pub struct JobRepo;

impl JobRepo {
    /// Insert a job and return the id assigned by the sequence.
    pub async fn create(pool: &PgPool, input: &NewJob) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO jobs (user_name, printer_id, faculty, status, elements) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id",
        )
        .bind(&input.user_name)
        .bind(input.printer_id)
        .bind(&input.faculty)
        .bind(input.status.as_str())
        .bind(join_elements(&input.elements))
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Find a job by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, JobRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every mutable column of job `job.id`.
    ///
    /// Returns `true` if a row was updated, `false` if the id is unknown.
    pub async fn update(pool: &PgPool, job: &Job) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE jobs \
             SET user_name = $2, printer_id = $3, faculty = $4, status = $5, elements = $6 \
             WHERE id = $1",
        )
        .bind(job.id)
        .bind(&job.user_name)
        .bind(job.printer_id)
        .bind(&job.faculty)
        .bind(job.status.as_str())
        .bind(job.elements_joined())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every job, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs ORDER BY id ASC");
        sqlx::query_as::<_, JobRow>(&query).fetch_all(pool).await
    }

    /// Dashboard search, newest first.
    ///
    /// The text query is a case-insensitive substring test against
    /// `user_name` or the raw `elements` column. Empty faculty/status lists
    /// add no condition.
    pub async fn search(pool: &PgPool, params: &JobSearch) -> Result<Vec<JobRow>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if !params.query.is_empty() {
            conditions.push(format!(
                "(strpos(lower(user_name), lower(${bind_idx})) > 0 \
                  OR strpos(lower(elements), lower(${bind_idx})) > 0)"
            ));
            bind_idx += 1;
        }
        if !params.faculties.is_empty() {
            conditions.push(format!("faculty = ANY(${bind_idx})"));
            bind_idx += 1;
        }
        if !params.statuses.is_empty() {
            conditions.push(format!("status = ANY(${bind_idx})"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM jobs {where_clause} ORDER BY id DESC");
        let mut q = sqlx::query_as::<_, JobRow>(&query);

        // Bind dynamic parameters in order.
        if !params.query.is_empty() {
            q = q.bind(&params.query);
        }
        if !params.faculties.is_empty() {
            q = q.bind(&params.faculties);
        }
        if !params.statuses.is_empty() {
            let statuses: Vec<String> = params
                .statuses
                .iter()
                .map(|s| s.as_str().to_string())
                .collect();
            q = q.bind(statuses);
        }

        q.fetch_all(pool).await
    }
}

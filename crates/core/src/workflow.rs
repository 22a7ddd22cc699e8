//! Job creation and editing.
//!
//! Combines library selections with ad-hoc uploads, validates the result,
//! and writes through the [`JobStore`]. Callers outside this crate should
//! route job mutations through [`JobWorkflow`] rather than hand-building
//! jobs for the store.
//!
//! Uploads are written one file at a time before the job is validated, so a
//! rejected job can still leave its uploads in the library. There is no
//! rollback across files.

use std::sync::Arc;

use crate::error::CoreError;
use crate::faculty::validate_faculty;
use crate::job::{
    merge_elements, validate_printer_id, validate_user_name, Job, JobStatus, NewJob,
};
use crate::library::{FileLibrary, Upload};
use crate::store::{job_not_found, JobStore};
use crate::types::DbId;

/// Form fields shared by create and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub user_name: String,
    pub printer_id: i32,
    pub faculty: String,
}

/// Orchestrates the job store and the file library.
#[derive(Clone)]
pub struct JobWorkflow {
    store: Arc<dyn JobStore>,
    library: Arc<dyn FileLibrary>,
}

impl JobWorkflow {
    pub fn new(store: Arc<dyn JobStore>, library: Arc<dyn FileLibrary>) -> Self {
        Self { store, library }
    }

    pub fn store(&self) -> &Arc<dyn JobStore> {
        &self.store
    }

    pub fn library(&self) -> &Arc<dyn FileLibrary> {
        &self.library
    }

    /// Create a `Pending` job from library picks plus new uploads.
    ///
    /// Returns the stored job including its new id.
    pub async fn prepare_new_job(
        &self,
        draft: JobDraft,
        library_selections: Vec<String>,
        uploads: Vec<Upload>,
    ) -> Result<Job, CoreError> {
        let elements = self
            .compose_elements(&draft, library_selections, uploads)
            .await?;

        let new_job = NewJob {
            user_name: draft.user_name,
            printer_id: draft.printer_id,
            faculty: draft.faculty,
            status: JobStatus::Pending,
            elements,
        };
        let id = self.store.create_job(&new_job).await?;

        tracing::info!(
            job_id = id,
            faculty = %new_job.faculty,
            elements = new_job.elements.len(),
            "Job created",
        );
        Ok(new_job.with_id(id))
    }

    /// Replace every mutable field of `existing`, keeping its id.
    ///
    /// `status` may be any value; transitions are not restricted.
    pub async fn apply_edit(
        &self,
        existing: &Job,
        draft: JobDraft,
        status: JobStatus,
        library_selections: Vec<String>,
        uploads: Vec<Upload>,
    ) -> Result<Job, CoreError> {
        let elements = self
            .compose_elements(&draft, library_selections, uploads)
            .await?;

        let job = Job {
            id: existing.id,
            user_name: draft.user_name,
            printer_id: draft.printer_id,
            faculty: draft.faculty,
            status,
            elements,
        };
        self.store.update_job(&job).await?;

        tracing::info!(job_id = job.id, status = %job.status, "Job updated");
        Ok(job)
    }

    /// Change only the status of job `job_id`.
    pub async fn set_status(&self, job_id: DbId, status: JobStatus) -> Result<Job, CoreError> {
        let mut job = self
            .store
            .get_job(job_id)
            .await?
            .ok_or_else(|| job_not_found(job_id))?;

        let previous = job.status;
        job.status = status;
        self.store.update_job(&job).await?;

        tracing::info!(job_id, from = %previous, to = %status, "Job status changed");
        Ok(job)
    }

    /// Store a batch of files in `faculty`'s library. Returns the stored
    /// filenames in upload order.
    ///
    /// Each file is written independently; a failure part-way leaves the
    /// earlier files in place.
    pub async fn bulk_upload(
        &self,
        faculty: &str,
        uploads: Vec<Upload>,
    ) -> Result<Vec<String>, CoreError> {
        validate_faculty(faculty)?;
        if uploads.is_empty() {
            return Err(CoreError::Validation(
                "At least one file is required".into(),
            ));
        }

        let stored = self.store_uploads(faculty, uploads).await?;
        tracing::info!(faculty = %faculty, count = stored.len(), "Bulk upload complete");
        Ok(stored)
    }

    /// Files available for selection in `faculty`'s library.
    pub async fn library_files(&self, faculty: &str) -> Result<Vec<String>, CoreError> {
        validate_faculty(faculty)?;
        self.library.list_files(faculty).await
    }

    // -- internals --

    async fn compose_elements(
        &self,
        draft: &JobDraft,
        library_selections: Vec<String>,
        uploads: Vec<Upload>,
    ) -> Result<Vec<String>, CoreError> {
        // These decide where uploads land, so check them before writing.
        validate_faculty(&draft.faculty)?;
        validate_printer_id(draft.printer_id)?;

        let uploaded = self.store_uploads(&draft.faculty, uploads).await?;
        let elements = merge_elements(library_selections, uploaded);

        validate_user_name(&draft.user_name)?;
        if elements.is_empty() {
            return Err(CoreError::Validation(
                "At least one element is required".into(),
            ));
        }
        Ok(elements)
    }

    async fn store_uploads(
        &self,
        faculty: &str,
        uploads: Vec<Upload>,
    ) -> Result<Vec<String>, CoreError> {
        let mut stored = Vec::with_capacity(uploads.len());
        for upload in uploads {
            self.library
                .store_file(faculty, &upload.filename, &upload.content)
                .await?;
            stored.push(upload.filename);
        }
        Ok(stored)
    }
}

//! Per-faculty model file library.
//!
//! Each faculty owns one flat folder of uploaded model files. Writes are
//! last-write-wins; nothing here renames, versions, or deletes files.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::CoreError;
use crate::faculty::sanitize_faculty;

/// Default root folder for the local library.
pub const DEFAULT_LIBRARY_ROOT: &str = "uploads";

/// A file handed in by the caller, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub content: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Storage of reusable model files, namespaced by faculty.
#[async_trait]
pub trait FileLibrary: Send + Sync {
    /// Files stored for `faculty`, sorted by name. A faculty that has never
    /// received a file yields an empty list.
    async fn list_files(&self, faculty: &str) -> Result<Vec<String>, CoreError>;

    /// Write `content` as `filename` in `faculty`'s namespace, replacing
    /// any existing file of that name.
    async fn store_file(
        &self,
        faculty: &str,
        filename: &str,
        content: &[u8],
    ) -> Result<(), CoreError>;
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Resolve the namespace key for `faculty`, rejecting names that sanitize
/// to nothing.
pub fn namespace_key(faculty: &str) -> Result<String, CoreError> {
    let key = sanitize_faculty(faculty);
    if key.is_empty() {
        return Err(CoreError::Validation(format!(
            "Faculty '{faculty}' does not produce a usable library folder name"
        )));
    }
    Ok(key)
}

/// A stored filename must be a single plain path component.
pub fn validate_filename(filename: &str) -> Result<(), CoreError> {
    if filename.trim().is_empty() {
        return Err(CoreError::Validation("Filename is required".into()));
    }
    if filename == "." || filename == ".." || filename.contains(['/', '\\', '\0']) {
        return Err(CoreError::Validation(format!(
            "Invalid filename '{filename}'"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Local filesystem
// ---------------------------------------------------------------------------

/// [`FileLibrary`] backed by a directory tree: `<root>/<faculty key>/<file>`.
#[derive(Debug, Clone)]
pub struct LocalFileLibrary {
    root: PathBuf,
}

impl LocalFileLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder holding `faculty`'s files.
    pub fn faculty_dir(&self, faculty: &str) -> Result<PathBuf, CoreError> {
        Ok(self.root.join(namespace_key(faculty)?))
    }
}

#[async_trait]
impl FileLibrary for LocalFileLibrary {
    async fn list_files(&self, faculty: &str) -> Result<Vec<String>, CoreError> {
        let dir = self.faculty_dir(faculty)?;

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                files.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        files.sort();
        Ok(files)
    }

    async fn store_file(
        &self,
        faculty: &str,
        filename: &str,
        content: &[u8],
    ) -> Result<(), CoreError> {
        validate_filename(filename)?;
        let dir = self.faculty_dir(faculty)?;

        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(filename), content).await?;

        tracing::debug!(
            faculty = %faculty,
            filename = %filename,
            bytes = content.len(),
            "Stored library file",
        );
        Ok(())
    }
}

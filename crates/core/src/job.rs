//! Print job entity, status lifecycle, and element-list helpers.
//!
//! A job is a print request: who asked for it, which printer and faculty it
//! belongs to, its status, and the model files ("elements") to print.
//! Status transitions are unrestricted; every change is an explicit write.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::faculty::validate_faculty;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest printer number.
pub const MIN_PRINTER_ID: i32 = 1;

/// Highest printer number.
pub const MAX_PRINTER_ID: i32 = 8;

/// Printer preselected on a blank job form.
pub const DEFAULT_PRINTER_ID: i32 = MIN_PRINTER_ID;

/// Separator used when the element list is flattened into one column.
pub const ELEMENT_SEPARATOR: &str = ",";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state of a print job.
///
/// New jobs start as `Pending`. Any state may move to any other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Pending,
    Printing,
    Good,
    Failed,
}

impl JobStatus {
    /// All statuses in display order.
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Pending,
        JobStatus::Printing,
        JobStatus::Good,
        JobStatus::Failed,
    ];

    /// Canonical string stored in the `jobs.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Printing => "Printing",
            Self::Good => "Good",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Printing" => Ok(Self::Printing),
            "Good" => Ok(Self::Good),
            "Failed" => Ok(Self::Failed),
            other => Err(CoreError::InvalidStatus(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A stored print job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: DbId,
    pub user_name: String,
    pub printer_id: i32,
    pub faculty: String,
    pub status: JobStatus,
    pub elements: Vec<String>,
}

/// A job that has not been assigned an id yet.
///
/// May hold invalid data while being assembled; stores validate on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub user_name: String,
    pub printer_id: i32,
    pub faculty: String,
    pub status: JobStatus,
    pub elements: Vec<String>,
}

impl NewJob {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: DbId) -> Job {
        Job {
            id,
            user_name: self.user_name,
            printer_id: self.printer_id,
            faculty: self.faculty,
            status: self.status,
            elements: self.elements,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_job_fields(&self.user_name, self.printer_id, &self.faculty, &self.elements)
    }
}

impl Job {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_job_fields(&self.user_name, self.printer_id, &self.faculty, &self.elements)
    }

    /// The element list as stored and searched: comma-joined, unescaped.
    pub fn elements_joined(&self) -> String {
        join_elements(&self.elements)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check every job invariant a store enforces on create and update.
pub fn validate_job_fields(
    user_name: &str,
    printer_id: i32,
    faculty: &str,
    elements: &[String],
) -> Result<(), CoreError> {
    validate_user_name(user_name)?;
    validate_printer_id(printer_id)?;
    validate_faculty(faculty)?;
    validate_elements(elements)
}

/// The requester name must be non-empty. Whitespace counts as a name.
pub fn validate_user_name(user_name: &str) -> Result<(), CoreError> {
    if user_name.is_empty() {
        return Err(CoreError::Validation("User name is required".into()));
    }
    Ok(())
}

pub fn validate_printer_id(printer_id: i32) -> Result<(), CoreError> {
    if !(MIN_PRINTER_ID..=MAX_PRINTER_ID).contains(&printer_id) {
        return Err(CoreError::Validation(format!(
            "Printer id {printer_id} out of range ({MIN_PRINTER_ID}-{MAX_PRINTER_ID})"
        )));
    }
    Ok(())
}

/// At least one element, no blanks, no duplicates, no separator characters.
pub fn validate_elements(elements: &[String]) -> Result<(), CoreError> {
    if elements.is_empty() {
        return Err(CoreError::Validation(
            "At least one element is required".into(),
        ));
    }

    let mut seen = BTreeSet::new();
    for element in elements {
        if element.trim().is_empty() {
            return Err(CoreError::Validation("Element names must not be blank".into()));
        }
        if element.contains(ELEMENT_SEPARATOR) {
            return Err(CoreError::Validation(format!(
                "Element '{element}' must not contain '{ELEMENT_SEPARATOR}'"
            )));
        }
        if !seen.insert(element.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate element '{element}'"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Element helpers
// ---------------------------------------------------------------------------

/// Flatten an element list into its stored form.
pub fn join_elements(elements: &[String]) -> String {
    elements.join(ELEMENT_SEPARATOR)
}

/// Split a stored element column back into a list. An empty column yields
/// an empty list.
pub fn split_elements(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined
        .split(ELEMENT_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Sorted, deduplicated union of library picks and freshly uploaded files.
pub fn merge_elements<I, J>(selected: I, uploaded: J) -> Vec<String>
where
    I: IntoIterator<Item = String>,
    J: IntoIterator<Item = String>,
{
    selected
        .into_iter()
        .chain(uploaded)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Filters for the job dashboard. Empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearch {
    /// Case-insensitive substring of the user name or of the joined
    /// element list.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub faculties: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<JobStatus>,
}

impl JobSearch {
    /// Whether `job` passes all three filters.
    ///
    /// The query runs against the joined element string, so a term may
    /// span two neighbouring elements (`"1,A1"` matches `["A101", "A102"]`).
    pub fn matches(&self, job: &Job) -> bool {
        if !self.faculties.is_empty() && !self.faculties.iter().any(|f| *f == job.faculty) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&job.status) {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        job.user_name.to_lowercase().contains(&needle)
            || job.elements_joined().to_lowercase().contains(&needle)
    }
}

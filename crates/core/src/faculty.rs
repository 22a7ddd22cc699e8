//! Faculty list and library namespace keys.
//!
//! Faculties are plain display strings drawn from a fixed list. The same
//! string groups jobs and names the faculty's folder in the file library.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Every faculty a job can belong to, in display order.
pub const FACULTIES: &[&str] = &[
    "Faculty of Arts",
    "Faculty of Engineering",
    "Faculty of Medicine",
    "Faculty of Science",
    "Faculty of Law",
    "Faculty of Economics",
];

/// Faculty preselected on a blank job form.
pub const DEFAULT_FACULTY: &str = FACULTIES[0];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that `faculty` is one of [`FACULTIES`] (exact match).
pub fn validate_faculty(faculty: &str) -> Result<(), CoreError> {
    if FACULTIES.contains(&faculty) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown faculty '{faculty}'. Must be one of: {FACULTIES:?}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Namespace keys
// ---------------------------------------------------------------------------

/// Turn a faculty name into a filesystem-safe folder name.
///
/// Spaces become underscores, then everything outside `[A-Za-z0-9_]` is
/// dropped. Distinct names can map to the same key (`"A B"` and `"A_B"`);
/// callers that need a one-to-one mapping must check for that themselves.
///
/// ```
/// use printdesk_core::faculty::sanitize_faculty;
///
/// assert_eq!(sanitize_faculty("Faculty of Arts"), "Faculty_of_Arts");
/// assert_eq!(sanitize_faculty("R&D (Lab 2)"), "RD_Lab_2");
/// ```
pub fn sanitize_faculty(name: &str) -> String {
    name.replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

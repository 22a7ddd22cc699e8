//! Domain core for print-job tracking.
//!
//! Holds the job entity and its status lifecycle, the faculty list, the
//! `JobStore` / `FileLibrary` seams and the workflow service that composes
//! them. This crate has no database dependency; `printdesk-db` provides the
//! PostgreSQL store.

pub mod error;
pub mod faculty;
pub mod job;
pub mod library;
pub mod store;
pub mod types;
pub mod workflow;

//! Row structs for the database tables.
//!
//! Each row struct is a `FromRow` mirror of the table and converts into the
//! matching `printdesk_core` entity, validating column values on the way.

pub mod job;

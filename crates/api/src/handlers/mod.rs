pub mod jobs;
pub mod library;

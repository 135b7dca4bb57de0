//! DTO modules that bridge services with templates and APIs.

pub mod blog;
pub mod dashboard;
pub mod leads;
pub mod main;
pub mod posts;

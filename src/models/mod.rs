//! Database models and request-scoped types shared across the repositories.

pub mod auth;
pub mod config;
pub mod lead;
pub mod plan;
pub mod post;
pub mod settings;

//! DTOs for the admin dashboard.

use serde::Serialize;

use crate::domain::lead::Lead;

/// One labeled count in a dashboard breakdown.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatRow {
    pub label: String,
    pub count: usize,
}

/// Aggregates shown on the dashboard. Charts are a front-end concern; the
/// template renders these as plain numbers and tables.
pub struct DashboardData {
    pub total_leads: usize,
    pub new_leads: usize,
    pub converted_leads: usize,
    pub leads_by_status: Vec<StatRow>,
    pub leads_by_source: Vec<StatRow>,
    pub total_posts: usize,
    pub published_posts: usize,
    pub recent_leads: Vec<Lead>,
}

//! DTOs for the admin lead table.

use serde::Deserialize;

use crate::domain::lead::Lead;
use crate::listing::QueryState;
use crate::pagination::Paginated;

/// Query parameters accepted by the lead table.
#[derive(Debug, Default, Deserialize)]
pub struct LeadsQuery {
    pub q: Option<String>,
    /// Status filter; absent means the "All" sentinel.
    pub status: Option<String>,
    /// Sort column name from the enumerated sortable fields.
    pub sort: Option<String>,
    /// Sort direction, `asc` or `desc`.
    pub dir: Option<String>,
    pub page: Option<usize>,
}

/// Data required to render the lead table template.
pub struct LeadsPageData {
    pub leads: Paginated<Lead>,
    /// Status values offered by the filter dropdown.
    pub statuses: Vec<String>,
    pub query: QueryState,
    pub total_matches: usize,
}

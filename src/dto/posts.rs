//! DTOs for the admin blog table and post editor.

use serde::Deserialize;

use crate::domain::post::Post;
use crate::listing::QueryState;
use crate::pagination::Paginated;

/// Query parameters accepted by the admin post table.
#[derive(Debug, Default, Deserialize)]
pub struct PostsQuery {
    pub q: Option<String>,
    /// Status filter; absent means the "All" sentinel.
    pub status: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<usize>,
}

/// Data required to render the admin post table template.
pub struct PostsPageData {
    pub posts: Paginated<Post>,
    pub statuses: Vec<String>,
    pub query: QueryState,
    pub total_matches: usize,
}

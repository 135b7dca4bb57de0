//! DTOs for the public blog pages.

use serde::Deserialize;

use crate::domain::post::Post;
use crate::listing::QueryState;
use crate::pagination::Paginated;

/// Query parameters accepted by the blog index page.
#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    /// Free-text search entered by the visitor.
    pub q: Option<String>,
    /// Selected category or tag; absent means the "All" sentinel.
    pub tag: Option<String>,
    /// Page number requested by the pagination links.
    pub page: Option<usize>,
}

/// Data required to render the blog index template.
pub struct BlogPageData {
    /// One page of matching posts in relevance order.
    pub posts: Paginated<Post>,
    /// Every category and tag offered by the filter control.
    pub tags: Vec<String>,
    /// Echo of the visitor's current listing intent.
    pub query: QueryState,
    /// Matching records before paging, for the result counter.
    pub total_matches: usize,
}

/// Data required to render a single post page.
pub struct PostPageData {
    pub post: Post,
    /// A few other published posts for the "keep reading" rail.
    pub recent: Vec<Post>,
}

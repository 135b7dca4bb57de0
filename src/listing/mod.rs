//! In-memory listing pipeline shared by the public blog and the admin
//! tables: fuzzy search over weighted text fields, categorical filtering,
//! optional single-field sorting, and page slicing.
//!
//! The pipeline is pure: records come in as an immutable snapshot, the
//! current user intent travels as a [`QueryState`] value, and every stage
//! returns a new ordering without touching the snapshot. The routes are the
//! only stateful shell around it.

pub mod filter;
pub mod search;
pub mod sort;

pub use filter::filter_records;
pub use search::SearchIndex;
pub use sort::{SortDirection, sort_records};

use serde::Serialize;

/// Sentinel tag meaning "no categorical filter applied".
pub const ALL_TAG: &str = "All";

/// A single text field of a record together with its search weight.
#[derive(Clone, Copy, Debug)]
pub struct WeightedField<'a> {
    pub weight: f64,
    pub text: &'a str,
}

impl<'a> WeightedField<'a> {
    pub fn new(weight: f64, text: &'a str) -> Self {
        Self { weight, text }
    }
}

/// Records that can flow through the listing pipeline.
pub trait Searchable {
    /// Weighted text fields evaluated by the fuzzy index. Higher weights
    /// rank matches above equal-quality matches in lower-weighted fields.
    fn fields(&self) -> Vec<WeightedField<'_>>;

    /// Categorical values compared against a selected tag: a record is kept
    /// when any of them equals the selection.
    fn categories(&self) -> Vec<&str>;
}

/// Immutable snapshot of the user's current listing intent.
///
/// Changing the search text or the selected tag resets the page to 1;
/// changing only the page leaves the filter untouched. Selecting the active
/// sort column toggles its direction, selecting another column restarts
/// ascending.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryState {
    pub q: String,
    pub tag: String,
    pub sort: Option<String>,
    pub direction: SortDirection,
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            q: String::new(),
            tag: ALL_TAG.to_string(),
            sort: None,
            direction: SortDirection::Asc,
            page: 1,
        }
    }
}

impl QueryState {
    /// Assembles a state from raw request parameters. Absent or blank
    /// values fall back to the defaults; the page floor is 1 (the upper
    /// clamp happens against the filtered total in the paginator).
    pub fn from_params(
        q: Option<String>,
        tag: Option<String>,
        sort: Option<String>,
        dir: Option<String>,
        page: Option<usize>,
    ) -> Self {
        Self {
            q: q.map(|s| s.trim().to_string()).unwrap_or_default(),
            tag: tag
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| ALL_TAG.to_string()),
            sort: sort.filter(|s| !s.trim().is_empty()),
            direction: dir.as_deref().map(SortDirection::from).unwrap_or_default(),
            page: page.unwrap_or(1).max(1),
        }
    }

    #[must_use]
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = q.into();
        self.page = 1;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self.page = 1;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        match &self.sort {
            Some(current) if *current == field => {
                self.direction = self.direction.toggled();
            }
            _ => {
                self.sort = Some(field);
                self.direction = SortDirection::Asc;
            }
        }
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// True when either the search text or the tag narrows the listing.
    pub fn is_filtered(&self) -> bool {
        !self.q.trim().is_empty() || self.tag != ALL_TAG
    }
}

//! Repository traits: the narrow, typed boundary between the listing
//! pipeline and the database. List operations return full ordered snapshots;
//! searching, filtering and paging happen in memory (`crate::listing`).

use crate::{
    db::{DbConnection, DbPool},
    domain::{
        lead::{Lead, LeadStatus, NewLead},
        plan::{NewPlan, PricingPlan, UpdatePlan},
        post::{NewPost, Post, PostStatus, UpdatePost},
        settings::SiteSettings,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod lead;
pub mod plan;
pub mod post;
pub mod settings;

#[cfg(feature = "test-mocks")]
pub mod mock;

/// Diesel-backed implementation of every repository trait. Cheap to clone;
/// handlers receive it through `web::Data`.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<DbConnection, diesel::r2d2::PoolError> {
        self.pool.get()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostListQuery {
    pub status: Option<PostStatus>,
}

impl PostListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Shorthand for the public blog: published posts only.
    pub fn published(self) -> Self {
        self.status(PostStatus::Published)
    }
}

pub trait PostReader {
    fn get_post_by_id(&self, id: i32) -> RepositoryResult<Option<Post>>;
    fn get_post_by_slug(&self, slug: &str) -> RepositoryResult<Option<Post>>;
    /// Full snapshot, newest publication first, deterministic tiebreak.
    fn list_posts(&self, query: PostListQuery) -> RepositoryResult<Vec<Post>>;
}

pub trait PostWriter {
    fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post>;
    fn update_post(&self, post_id: i32, updates: &UpdatePost) -> RepositoryResult<Post>;
    fn update_post_status(&self, post_id: i32, status: PostStatus) -> RepositoryResult<Post>;
    fn delete_post(&self, post_id: i32) -> RepositoryResult<()>;
}

pub trait LeadReader {
    fn get_lead_by_id(&self, id: i32) -> RepositoryResult<Option<Lead>>;
    /// Full snapshot, newest lead first.
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
}

pub trait LeadWriter {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
    fn update_lead_status(&self, lead_id: i32, status: LeadStatus) -> RepositoryResult<Lead>;
    fn delete_lead(&self, lead_id: i32) -> RepositoryResult<()>;
}

pub trait PlanReader {
    fn get_plan_by_id(&self, id: i32) -> RepositoryResult<Option<PricingPlan>>;
    /// All plans ordered by ascending price.
    fn list_plans(&self) -> RepositoryResult<Vec<PricingPlan>>;
}

pub trait PlanWriter {
    fn create_plan(&self, new_plan: &NewPlan) -> RepositoryResult<PricingPlan>;
    fn update_plan(&self, plan_id: i32, updates: &UpdatePlan) -> RepositoryResult<PricingPlan>;
    fn delete_plan(&self, plan_id: i32) -> RepositoryResult<()>;
}

pub trait SettingsReader {
    /// Loads the singleton settings row, seeding defaults when absent.
    fn get_settings(&self) -> RepositoryResult<SiteSettings>;
}

pub trait SettingsWriter {
    fn save_settings(&self, settings: &SiteSettings) -> RepositoryResult<()>;
}

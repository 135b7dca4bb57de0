//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::lead::{Lead, LeadStatus, NewLead};
use crate::domain::plan::{NewPlan, PricingPlan, UpdatePlan};
use crate::domain::post::{NewPost, Post, PostStatus, UpdatePost};
use crate::domain::settings::SiteSettings;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    LeadReader, LeadWriter, PlanReader, PlanWriter, PostListQuery, PostReader, PostWriter,
    SettingsReader, SettingsWriter,
};

mock! {
    pub Repository {}

    impl PostReader for Repository {
        fn get_post_by_id(&self, id: i32) -> RepositoryResult<Option<Post>>;
        fn get_post_by_slug(&self, slug: &str) -> RepositoryResult<Option<Post>>;
        fn list_posts(&self, query: PostListQuery) -> RepositoryResult<Vec<Post>>;
    }

    impl PostWriter for Repository {
        fn create_post(&self, new_post: &NewPost) -> RepositoryResult<Post>;
        fn update_post(&self, post_id: i32, updates: &UpdatePost) -> RepositoryResult<Post>;
        fn update_post_status(&self, post_id: i32, status: PostStatus) -> RepositoryResult<Post>;
        fn delete_post(&self, post_id: i32) -> RepositoryResult<()>;
    }

    impl LeadReader for Repository {
        fn get_lead_by_id(&self, id: i32) -> RepositoryResult<Option<Lead>>;
        fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
    }

    impl LeadWriter for Repository {
        fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
        fn update_lead_status(&self, lead_id: i32, status: LeadStatus) -> RepositoryResult<Lead>;
        fn delete_lead(&self, lead_id: i32) -> RepositoryResult<()>;
    }

    impl PlanReader for Repository {
        fn get_plan_by_id(&self, id: i32) -> RepositoryResult<Option<PricingPlan>>;
        fn list_plans(&self) -> RepositoryResult<Vec<PricingPlan>>;
    }

    impl PlanWriter for Repository {
        fn create_plan(&self, new_plan: &NewPlan) -> RepositoryResult<PricingPlan>;
        fn update_plan(&self, plan_id: i32, updates: &UpdatePlan) -> RepositoryResult<PricingPlan>;
        fn delete_plan(&self, plan_id: i32) -> RepositoryResult<()>;
    }

    impl SettingsReader for Repository {
        fn get_settings(&self) -> RepositoryResult<SiteSettings>;
    }

    impl SettingsWriter for Repository {
        fn save_settings(&self, settings: &SiteSettings) -> RepositoryResult<()>;
    }
}

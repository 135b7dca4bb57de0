//! DTOs for the public marketing pages.

use crate::domain::plan::PricingPlan;
use crate::domain::post::Post;
use crate::domain::settings::SiteSettings;

/// Data required to render the home page.
pub struct HomePageData {
    pub settings: SiteSettings,
    pub featured_plans: Vec<PricingPlan>,
    pub latest_posts: Vec<Post>,
}

/// Data required to render the pricing page.
pub struct PricingPageData {
    pub settings: SiteSettings,
    pub plans: Vec<PricingPlan>,
}

use validator::Validate;

use crate::domain::lead::NewLead;
use crate::dto::main::{HomePageData, PricingPageData};
use crate::forms::lead::{ContactForm, DemoRequestForm, NewsletterForm};
use crate::repository::{LeadWriter, PlanReader, PostListQuery, PostReader, SettingsReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads the home page: site settings, featured plans and the three latest
/// published posts.
pub fn load_home_page<R>(repo: &R) -> ServiceResult<HomePageData>
where
    R: PostReader + PlanReader + SettingsReader + ?Sized,
{
    let settings = repo.get_settings()?;

    let plans = repo.list_plans()?;
    let featured: Vec<_> = plans.iter().filter(|p| p.is_featured).cloned().collect();
    let featured_plans = if featured.is_empty() { plans } else { featured };

    let latest_posts = repo
        .list_posts(PostListQuery::new().published())?
        .into_iter()
        .take(3)
        .collect();

    Ok(HomePageData {
        settings,
        featured_plans,
        latest_posts,
    })
}

/// Loads the pricing page with every plan, cheapest first.
pub fn load_pricing_page<R>(repo: &R) -> ServiceResult<PricingPageData>
where
    R: PlanReader + SettingsReader + ?Sized,
{
    Ok(PricingPageData {
        settings: repo.get_settings()?,
        plans: repo.list_plans()?,
    })
}

/// Validates the contact form and stores the visitor as a lead.
pub fn submit_contact<R>(repo: &R, form: &ContactForm) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate contact form: {err}");
        return Err(ServiceError::Form("Please check the form fields".to_string()));
    }

    let new_lead: NewLead = form.into();
    repo.create_lead(&new_lead)?;
    Ok(())
}

/// Validates the demo-request form and stores the visitor as a lead.
pub fn submit_demo_request<R>(repo: &R, form: &DemoRequestForm) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate demo form: {err}");
        return Err(ServiceError::Form("Please check the form fields".to_string()));
    }

    let new_lead: NewLead = form.into();
    repo.create_lead(&new_lead)?;
    Ok(())
}

/// Stores a newsletter signup as a lead.
pub fn subscribe_newsletter<R>(repo: &R, form: &NewsletterForm) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    if form.validate().is_err() {
        return Err(ServiceError::Form("Please enter a valid email address".to_string()));
    }

    let new_lead: NewLead = form.into();
    repo.create_lead(&new_lead)?;
    Ok(())
}

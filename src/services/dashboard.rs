use std::collections::HashMap;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::lead::LeadStatus;
use crate::domain::post::PostStatus;
use crate::dto::dashboard::{DashboardData, StatRow};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{LeadReader, PostListQuery, PostReader};
use crate::services::{ServiceError, ServiceResult};

/// Aggregates lead and post counts for the admin dashboard.
pub fn load_dashboard<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<DashboardData>
where
    R: LeadReader + PostReader + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let leads = repo.list_leads()?;
    let posts = repo.list_posts(PostListQuery::new())?;

    let leads_by_status = LeadStatus::ALL
        .iter()
        .map(|status| StatRow {
            label: status.to_string(),
            count: leads.iter().filter(|l| l.status == *status).count(),
        })
        .collect();

    let mut by_source: HashMap<String, usize> = HashMap::new();
    for lead in &leads {
        *by_source.entry(lead.source.to_string()).or_default() += 1;
    }
    let mut leads_by_source: Vec<StatRow> = by_source
        .into_iter()
        .map(|(label, count)| StatRow { label, count })
        .collect();
    leads_by_source.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

    let new_leads = leads
        .iter()
        .filter(|l| l.status == LeadStatus::New)
        .count();
    let converted_leads = leads
        .iter()
        .filter(|l| l.status == LeadStatus::Converted)
        .count();
    let published_posts = posts
        .iter()
        .filter(|p| p.status == PostStatus::Published)
        .count();

    // The snapshot is newest-first already.
    let recent_leads = leads.iter().take(5).cloned().collect();

    Ok(DashboardData {
        total_leads: leads.len(),
        new_leads,
        converted_leads,
        leads_by_status,
        leads_by_source,
        total_posts: posts.len(),
        published_posts,
        recent_leads,
    })
}

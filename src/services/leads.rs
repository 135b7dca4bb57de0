use crate::domain::lead::{Lead, LeadStatus};
use crate::dto::leads::{LeadsPageData, LeadsQuery};
use crate::listing::{QueryState, SearchIndex, SortDirection, filter_records, sort_records};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{ADMIN_PAGE_SIZE, Paginated, page_bounds};
use crate::repository::{LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::SERVICE_ADMIN_ROLE;

/// Loads the admin lead table: the full snapshot narrowed by search text
/// and status, optionally sorted by one column, then sliced.
pub fn load_leads_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: LeadsQuery,
) -> ServiceResult<LeadsPageData>
where
    R: LeadReader + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let snapshot = repo.list_leads()?;
    let state = QueryState::from_params(query.q, query.status, query.sort, query.dir, query.page);

    let index = SearchIndex::build(&snapshot);
    let mut filtered = filter_records(&index, &snapshot, &state.q, &state.tag);

    if let Some(sort) = &state.sort {
        apply_lead_sort(&mut filtered, sort, state.direction);
    }

    let total_matches = filtered.len();
    let (page, total_pages, range) = page_bounds(total_matches, ADMIN_PAGE_SIZE, state.page);
    let items: Vec<Lead> = filtered[range].iter().map(|l| (*l).clone()).collect();

    Ok(LeadsPageData {
        leads: Paginated::new(items, page, total_pages),
        statuses: LeadStatus::ALL.iter().map(ToString::to_string).collect(),
        query: QueryState { page, ..state },
        total_matches,
    })
}

/// The sortable columns of the lead table. Unknown names leave the
/// relevance order untouched.
fn apply_lead_sort(leads: &mut [&Lead], field: &str, direction: SortDirection) {
    match field {
        "name" => sort_records(leads, |l| l.name.clone(), direction),
        "email" => sort_records(leads, |l| l.email.clone(), direction),
        "company" => sort_records(leads, |l| l.company.clone(), direction),
        "source" => sort_records(leads, |l| l.source.to_string(), direction),
        "status" => sort_records(leads, |l| l.status.to_string(), direction),
        "created_at" => sort_records(leads, |l| l.created_at, direction),
        _ => {}
    }
}

/// Moves a lead to a new pipeline status.
pub fn change_lead_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    lead_id: i32,
    status: &str,
) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    repo.update_lead_status(lead_id, LeadStatus::from(status))
        .map_err(ServiceError::from)
}

/// Renders the full lead list as a CSV document for download.
pub fn export_leads_csv<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<u8>>
where
    R: LeadReader + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let leads = repo.list_leads()?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "Name", "Email", "Phone", "Company", "Source", "Status", "Message", "Date Added",
        ])
        .map_err(|e| ServiceError::Internal(e.to_string()))?;

    for lead in &leads {
        writer
            .write_record([
                lead.name.as_str(),
                lead.email.as_str(),
                lead.phone.as_deref().unwrap_or(""),
                lead.company.as_deref().unwrap_or(""),
                &lead.source.to_string(),
                &lead.status.to_string(),
                lead.message.as_deref().unwrap_or(""),
                &lead.created_at.format("%Y-%m-%d %H:%M").to_string(),
            ])
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ServiceError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lead::LeadSource;
    use crate::repository::errors::RepositoryResult;
    use chrono::{Duration, Utc};
    use mockall::mock;

    mock! {
        Repo {}

        impl LeadReader for Repo {
            fn get_lead_by_id(&self, id: i32) -> RepositoryResult<Option<Lead>>;
            fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
        }
    }

    fn lead(id: i32, name: &str, status: LeadStatus, minutes_ago: i64) -> Lead {
        let at = Utc::now().naive_utc() - Duration::minutes(minutes_ago);
        Lead {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: None,
            company: Some(format!("{name} Co")),
            source: LeadSource::WebsiteForm,
            status,
            message: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@chatai.com".to_string(),
            name: "Admin".to_string(),
            roles: vec!["admin".to_string()],
            exp: 0,
        }
    }

    fn visitor() -> AuthenticatedUser {
        AuthenticatedUser {
            roles: vec![],
            ..admin()
        }
    }

    fn fixture() -> Vec<Lead> {
        vec![
            lead(1, "John Smith", LeadStatus::New, 1),
            lead(2, "Sarah Johnson", LeadStatus::Contacted, 2),
            lead(3, "Michael Chen", LeadStatus::Qualified, 3),
            lead(4, "Emily Rodriguez", LeadStatus::Converted, 4),
        ]
    }

    #[test]
    fn requires_admin_role() {
        let repo = MockRepo::new();
        assert!(matches!(
            load_leads_page(&repo, &visitor(), LeadsQuery::default()),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn status_filter_keeps_subset() {
        let mut repo = MockRepo::new();
        repo.expect_list_leads().returning(|| Ok(fixture()));

        let page = load_leads_page(
            &repo,
            &admin(),
            LeadsQuery {
                status: Some("Contacted".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(page.total_matches, 1);
        assert_eq!(page.leads.items[0].name, "Sarah Johnson");
    }

    #[test]
    fn sort_by_name_orders_rows() {
        let mut repo = MockRepo::new();
        repo.expect_list_leads().returning(|| Ok(fixture()));

        let page = load_leads_page(
            &repo,
            &admin(),
            LeadsQuery {
                sort: Some("name".to_string()),
                dir: Some("asc".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        let names: Vec<&str> = page.leads.items.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Emily Rodriguez", "John Smith", "Michael Chen", "Sarah Johnson"]
        );
    }

    #[test]
    fn search_narrows_by_fuzzy_name() {
        let mut repo = MockRepo::new();
        repo.expect_list_leads().returning(|| Ok(fixture()));

        let page = load_leads_page(
            &repo,
            &admin(),
            LeadsQuery {
                q: Some("sarah".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(page.leads.items.iter().any(|l| l.name == "Sarah Johnson"));
        assert!(page.total_matches < 4);
    }

    #[test]
    fn csv_export_contains_every_lead() {
        let mut repo = MockRepo::new();
        repo.expect_list_leads().returning(|| Ok(fixture()));

        let bytes = export_leads_csv(&repo, &admin()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Name,Email,"));
        for lead in fixture() {
            assert!(text.contains(&lead.name));
        }
    }
}

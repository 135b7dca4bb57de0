use chatai_site::domain::lead::{LeadSource, LeadStatus, NewLead};
use chatai_site::domain::plan::NewPlan;
use chatai_site::domain::post::{NewPost, PostStatus, UpdatePost};
use chatai_site::domain::settings::SiteSettings;
use chatai_site::repository::{
    DieselRepository, LeadReader, LeadWriter, PlanReader, PlanWriter, PostListQuery, PostReader,
    PostWriter, SettingsReader, SettingsWriter,
};
use chrono::Utc;

mod common;

fn new_post(title: &str, slug: &str, status: PostStatus) -> NewPost {
    NewPost {
        title: title.to_string(),
        slug: slug.to_string(),
        excerpt: "excerpt".to_string(),
        content: "content".to_string(),
        category: "Analytics".to_string(),
        tags: vec!["ROI".to_string()],
        author: "Sarah Johnson".to_string(),
        published_at: (status == PostStatus::Published).then(|| Utc::now().naive_utc()),
        status,
    }
}

#[test]
fn test_post_repository_crud() {
    let test_db = common::TestDb::new("test_post_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_post(&new_post("First", "first", PostStatus::Published))
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.tags, vec!["ROI"]);

    let draft = repo
        .create_post(&new_post("Second", "second", PostStatus::Draft))
        .unwrap();

    let all = repo.list_posts(PostListQuery::new()).unwrap();
    assert_eq!(all.len(), 2);

    let published = repo.list_posts(PostListQuery::new().published()).unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title, "First");

    let by_slug = repo.get_post_by_slug("second").unwrap().unwrap();
    assert_eq!(by_slug.id, draft.id);

    let updates = UpdatePost {
        title: "Second, revised".to_string(),
        slug: "second".to_string(),
        excerpt: "e".to_string(),
        content: "c".to_string(),
        category: "Technology".to_string(),
        tags: vec![],
        author: "Michael Chen".to_string(),
        status: PostStatus::Draft,
        published_at: None,
    };
    let updated = repo.update_post(draft.id, &updates).unwrap();
    assert_eq!(updated.title, "Second, revised");
    assert_eq!(updated.category, "Technology");

    let promoted = repo
        .update_post_status(draft.id, PostStatus::Published)
        .unwrap();
    assert_eq!(promoted.status, PostStatus::Published);

    repo.delete_post(created.id).unwrap();
    assert!(repo.get_post_by_id(created.id).unwrap().is_none());
    assert_eq!(repo.list_posts(PostListQuery::new()).unwrap().len(), 1);
}

#[test]
fn test_duplicate_slug_is_rejected() {
    let test_db = common::TestDb::new("test_duplicate_slug.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_post(&new_post("One", "same-slug", PostStatus::Draft))
        .unwrap();
    assert!(
        repo.create_post(&new_post("Two", "same-slug", PostStatus::Draft))
            .is_err()
    );
}

#[test]
fn test_lead_repository_crud() {
    let test_db = common::TestDb::new("test_lead_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let john = repo
        .create_lead(&NewLead::new(
            "John Smith".to_string(),
            "john.smith@example.com".to_string(),
            Some("(555) 123-4567".to_string()),
            Some("ABC Corp".to_string()),
            LeadSource::LeadMagnet,
            None,
        ))
        .unwrap();
    assert_eq!(john.status, LeadStatus::New);

    let _sarah = repo
        .create_lead(&NewLead::new(
            "Sarah Johnson".to_string(),
            "sarah.johnson@example.com".to_string(),
            None,
            Some("Johnson & Co".to_string()),
            LeadSource::Chatbot,
            Some("Interested in the Growth plan".to_string()),
        ))
        .unwrap();

    let all = repo.list_leads().unwrap();
    assert_eq!(all.len(), 2);

    let contacted = repo
        .update_lead_status(john.id, LeadStatus::Contacted)
        .unwrap();
    assert_eq!(contacted.status, LeadStatus::Contacted);

    let reloaded = repo.get_lead_by_id(john.id).unwrap().unwrap();
    assert_eq!(reloaded.status, LeadStatus::Contacted);
    assert_eq!(reloaded.source, LeadSource::LeadMagnet);

    repo.delete_lead(john.id).unwrap();
    assert!(repo.get_lead_by_id(john.id).unwrap().is_none());
}

#[test]
fn test_plan_repository_orders_by_price() {
    let test_db = common::TestDb::new("test_plan_repository.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_plan(&NewPlan {
        name: "Growth".to_string(),
        price_cents: 9900,
        billing_cycle: "monthly".to_string(),
        features: vec!["Unlimited conversations".to_string()],
        is_featured: true,
    })
    .unwrap();
    repo.create_plan(&NewPlan {
        name: "Starter".to_string(),
        price_cents: 2900,
        billing_cycle: "monthly".to_string(),
        features: vec![],
        is_featured: false,
    })
    .unwrap();

    let plans = repo.list_plans().unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].name, "Starter");
    assert_eq!(plans[1].name, "Growth");
    assert!(plans[1].is_featured);
    assert_eq!(plans[1].features, vec!["Unlimited conversations"]);
}

#[test]
fn test_settings_seed_and_save() {
    let test_db = common::TestDb::new("test_settings.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    // First read seeds the defaults.
    let defaults = repo.get_settings().unwrap();
    assert_eq!(defaults, SiteSettings::default());

    let mut updated = defaults;
    updated.company_name = "ChatAI Inc".to_string();
    updated.slack_notifications = true;
    repo.save_settings(&updated).unwrap();

    let reloaded = repo.get_settings().unwrap();
    assert_eq!(reloaded.company_name, "ChatAI Inc");
    assert!(reloaded.slack_notifications);
}

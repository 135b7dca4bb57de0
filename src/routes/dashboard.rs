use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use log::error;
use tera::Tera;

use crate::SERVICE_ADMIN_ROLE;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, ensure_role, render_template};
use crate::services::dashboard as dashboard_service;

#[get("/admin")]
pub async fn show_dashboard(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    let data = match dashboard_service::load_dashboard(repo.get_ref(), &user) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load dashboard: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "dashboard",
        &server_config.auth_service_url,
    );
    context.insert("total_leads", &data.total_leads);
    context.insert("new_leads", &data.new_leads);
    context.insert("converted_leads", &data.converted_leads);
    context.insert("leads_by_status", &data.leads_by_status);
    context.insert("leads_by_source", &data.leads_by_source);
    context.insert("total_posts", &data.total_posts);
    context.insert("published_posts", &data.published_posts);
    context.insert("recent_leads", &data.recent_leads);

    render_template(&tera, "admin/dashboard.html", &context)
}

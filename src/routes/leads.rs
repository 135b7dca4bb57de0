use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::SERVICE_ADMIN_ROLE;
use crate::dto::leads::LeadsQuery;
use crate::forms::ChangeStatusForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, ensure_role, redirect, render_template};
use crate::services::leads as leads_service;

#[get("/admin/leads")]
pub async fn show_leads(
    params: web::Query<LeadsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    let data = match leads_service::load_leads_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load leads: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "leads",
        &server_config.auth_service_url,
    );
    context.insert("leads", &data.leads);
    context.insert("statuses", &data.statuses);
    context.insert("query", &data.query);
    context.insert("total_matches", &data.total_matches);

    render_template(&tera, "admin/leads.html", &context)
}

#[post("/admin/leads/{lead_id}/status")]
pub async fn change_lead_status(
    lead_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ChangeStatusForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    match leads_service::change_lead_status(
        repo.get_ref(),
        &user,
        lead_id.into_inner(),
        &form.status,
    ) {
        Ok(lead) => {
            FlashMessage::success(format!("Lead status updated to {}", lead.status)).send();
        }
        Err(e) => {
            error!("Failed to update lead status: {e}");
            FlashMessage::error("Failed to update lead status.").send();
        }
    }
    redirect("/admin/leads")
}

#[get("/admin/leads/export")]
pub async fn export_leads(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    match leads_service::export_leads_csv(repo.get_ref(), &user) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                actix_web::http::header::CONTENT_DISPOSITION,
                "attachment; filename=\"leads.csv\"",
            ))
            .body(csv),
        Err(e) => {
            error!("Failed to export leads: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::SERVICE_ADMIN_ROLE;
use crate::forms::plan::SavePlanForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, ensure_role, redirect, render_template};
use crate::services::ServiceError;
use crate::services::plans as plans_service;

#[get("/admin/plans")]
pub async fn show_plans(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    let plans = match plans_service::load_plans(repo.get_ref(), &user) {
        Ok(plans) => plans,
        Err(e) => {
            error!("Failed to load plans: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "plans",
        &server_config.auth_service_url,
    );
    context.insert("plans", &plans);

    render_template(&tera, "admin/plans.html", &context)
}

#[post("/admin/plans/save")]
pub async fn save_plan(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SavePlanForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    match plans_service::save_plan(repo.get_ref(), &user, &form) {
        Ok(plan) => {
            FlashMessage::success(format!("Plan \"{}\" saved.", plan.name)).send();
        }
        Err(ServiceError::Form(msg)) => {
            FlashMessage::error(msg).send();
        }
        Err(e) => {
            error!("Failed to save plan: {e}");
            FlashMessage::error("Failed to save the plan.").send();
        }
    }
    redirect("/admin/plans")
}

#[post("/admin/plans/{plan_id}/delete")]
pub async fn delete_plan(
    plan_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    match plans_service::delete_plan(repo.get_ref(), &user, plan_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Plan deleted.").send();
        }
        Err(e) => {
            error!("Failed to delete plan: {e}");
            FlashMessage::error("Failed to delete the plan.").send();
        }
    }
    redirect("/admin/plans")
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::SERVICE_ADMIN_ROLE;
use crate::forms::settings::SaveSettingsForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, ensure_role, redirect, render_template};
use crate::services::ServiceError;
use crate::services::settings as settings_service;

#[get("/admin/settings")]
pub async fn show_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    let settings = match settings_service::load_settings(repo.get_ref(), &user) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "settings",
        &server_config.auth_service_url,
    );
    context.insert("settings", &settings);

    render_template(&tera, "admin/settings.html", &context)
}

#[post("/admin/settings")]
pub async fn save_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveSettingsForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    match settings_service::save_settings(repo.get_ref(), &user, &form) {
        Ok(()) => {
            FlashMessage::success("Settings saved.").send();
        }
        Err(ServiceError::Form(msg)) => {
            FlashMessage::error(msg).send();
        }
        Err(e) => {
            error!("Failed to save settings: {e}");
            FlashMessage::error("Failed to save settings.").send();
        }
    }
    redirect("/admin/settings")
}

#[post("/admin/settings/reset")]
pub async fn reset_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    match settings_service::reset_settings(repo.get_ref(), &user) {
        Ok(()) => {
            FlashMessage::success("Settings reset to defaults.").send();
        }
        Err(e) => {
            error!("Failed to reset settings: {e}");
            FlashMessage::error("Failed to reset settings.").send();
        }
    }
    redirect("/admin/settings")
}

use actix_identity::Identity;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::forms::lead::{ContactForm, DemoRequestForm, NewsletterForm};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::main as main_service;

#[get("/")]
pub async fn show_home(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match main_service::load_home_page(repo.get_ref()) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load home page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        None,
        "home",
        &server_config.auth_service_url,
    );
    context.insert("settings", &data.settings);
    context.insert("plans", &data.featured_plans);
    context.insert("latest_posts", &data.latest_posts);

    render_template(&tera, "main/index.html", &context)
}

#[get("/pricing")]
pub async fn show_pricing(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match main_service::load_pricing_page(repo.get_ref()) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load pricing page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        None,
        "pricing",
        &server_config.auth_service_url,
    );
    context.insert("settings", &data.settings);
    context.insert("plans", &data.plans);

    render_template(&tera, "main/pricing.html", &context)
}

#[get("/contact")]
pub async fn show_contact(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    use crate::repository::SettingsReader;

    let settings = match repo.get_settings() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        None,
        "contact",
        &server_config.auth_service_url,
    );
    context.insert("settings", &settings);

    render_template(&tera, "main/contact.html", &context)
}

#[post("/contact")]
pub async fn submit_contact(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ContactForm>,
) -> impl Responder {
    match main_service::submit_contact(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Thanks for reaching out. We'll be in touch shortly.").send();
        }
        Err(ServiceError::Form(msg)) => {
            FlashMessage::error(msg).send();
        }
        Err(e) => {
            error!("Failed to store contact lead: {e}");
            FlashMessage::error("Something went wrong. Please try again.").send();
        }
    }
    redirect("/contact")
}

#[post("/demo")]
pub async fn submit_demo(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<DemoRequestForm>,
) -> impl Responder {
    match main_service::submit_demo_request(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Demo request received. We'll confirm a time by email.").send();
        }
        Err(ServiceError::Form(msg)) => {
            FlashMessage::error(msg).send();
        }
        Err(e) => {
            error!("Failed to store demo lead: {e}");
            FlashMessage::error("Something went wrong. Please try again.").send();
        }
    }
    redirect("/contact")
}

#[post("/subscribe")]
pub async fn subscribe(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<NewsletterForm>,
) -> impl Responder {
    match main_service::subscribe_newsletter(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("You're subscribed!").send();
        }
        Err(ServiceError::Form(msg)) => {
            FlashMessage::error(msg).send();
        }
        Err(e) => {
            error!("Failed to store newsletter lead: {e}");
            FlashMessage::error("Something went wrong. Please try again.").send();
        }
    }
    redirect("/blog")
}

#[post("/auth/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}

use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::api_v1_posts;
use crate::routes::blog::{show_blog, show_post};
use crate::routes::dashboard::show_dashboard;
use crate::routes::leads::{change_lead_status, export_leads, show_leads};
use crate::routes::main::{
    logout, show_contact, show_home, show_pricing, submit_contact, submit_demo, subscribe,
};
use crate::routes::plans::{delete_plan, save_plan, show_plans};
use crate::routes::posts::{
    change_post_status, delete_post, edit_post_form, new_post_form, save_post, show_posts,
};
use crate::routes::settings::{reset_settings, save_settings, show_settings};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Role required for the admin back-office.
pub const SERVICE_ADMIN_ROLE: &str = "admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", server_config.assets_dir.clone()))
            .service(web::scope("/api").service(api_v1_posts))
            // Public marketing pages.
            .service(show_home)
            .service(show_pricing)
            .service(show_contact)
            .service(submit_contact)
            .service(submit_demo)
            .service(subscribe)
            .service(show_blog)
            .service(show_post)
            // Admin back-office behind the auth redirect.
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_dashboard)
                    .service(show_leads)
                    .service(change_lead_status)
                    .service(export_leads)
                    .service(show_posts)
                    .service(new_post_form)
                    .service(edit_post_form)
                    .service(save_post)
                    .service(change_post_status)
                    .service(delete_post)
                    .service(show_plans)
                    .service(save_plan)
                    .service(delete_plan)
                    .service(show_settings)
                    .service(save_settings)
                    .service(reset_settings)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

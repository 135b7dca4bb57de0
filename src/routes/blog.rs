use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::dto::blog::BlogQuery;
use crate::listing::QueryState;
use crate::models::config::ServerConfig;
use crate::pagination::Paginated;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::blog as blog_service;

#[get("/blog")]
pub async fn show_blog(
    params: web::Query<BlogQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(
        &flash_messages,
        None,
        "blog",
        &server_config.auth_service_url,
    );

    match blog_service::load_blog_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            context.insert("posts", &data.posts);
            context.insert("tags", &data.tags);
            context.insert("query", &data.query);
            context.insert("total_matches", &data.total_matches);
        }
        Err(e) => {
            // The listing stays usable on a backend fault: an inline notice
            // plus an empty list, never a crash.
            error!("Failed to load blog posts: {e}");
            context.insert("alerts", &[("Failed to load articles.", "danger")]);
            context.insert("posts", &Paginated::<()>::new(vec![], 1, 0));
            context.insert("tags", &Vec::<String>::new());
            context.insert("query", &QueryState::default());
            context.insert("total_matches", &0usize);
        }
    }

    render_template(&tera, "blog/index.html", &context)
}

#[get("/blog/{slug}")]
pub async fn show_post(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match blog_service::load_post_page(repo.get_ref(), &slug.into_inner()) {
        Ok(data) => data,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That article does not exist.").send();
            return redirect("/blog");
        }
        Err(e) => {
            error!("Failed to load blog post: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        None,
        "blog",
        &server_config.auth_service_url,
    );
    context.insert("post", &data.post);
    context.insert("read_time", &data.post.read_time());
    context.insert("recent", &data.recent);

    render_template(&tera, "blog/post.html", &context)
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use tera::Tera;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::post::PostStatus;
use crate::dto::posts::PostsQuery;
use crate::forms::ChangeStatusForm;
use crate::forms::post::SavePostForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, ensure_role, redirect, render_template};
use crate::services::ServiceError;
use crate::services::posts as posts_service;

#[get("/admin/posts")]
pub async fn show_posts(
    params: web::Query<PostsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    let data = match posts_service::load_posts_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load posts: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "posts",
        &server_config.auth_service_url,
    );
    context.insert("posts", &data.posts);
    context.insert("statuses", &data.statuses);
    context.insert("query", &data.query);
    context.insert("total_matches", &data.total_matches);

    render_template(&tera, "admin/posts.html", &context)
}

#[get("/admin/posts/new")]
pub async fn new_post_form(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "posts",
        &server_config.auth_service_url,
    );
    context.insert(
        "statuses",
        &PostStatus::ALL.map(|s| s.to_string()).to_vec(),
    );

    render_template(&tera, "admin/post_form.html", &context)
}

#[get("/admin/posts/{post_id}/edit")]
pub async fn edit_post_form(
    post_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    let post =
        match posts_service::load_post_for_edit(repo.get_ref(), &user, post_id.into_inner()) {
            Ok(post) => post,
            Err(ServiceError::NotFound) => {
                FlashMessage::error("Post not found.").send();
                return redirect("/admin/posts");
            }
            Err(e) => {
                error!("Failed to load post: {e}");
                return HttpResponse::InternalServerError().finish();
            }
        };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "posts",
        &server_config.auth_service_url,
    );
    context.insert("post", &post);
    context.insert("post_tags", &post.tags.join(", "));
    context.insert(
        "statuses",
        &PostStatus::ALL.map(|s| s.to_string()).to_vec(),
    );

    render_template(&tera, "admin/post_form.html", &context)
}

#[post("/admin/posts/save")]
pub async fn save_post(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SavePostForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    match posts_service::save_post(repo.get_ref(), &user, &form) {
        Ok(post) => {
            FlashMessage::success(format!("Post \"{}\" saved.", post.title)).send();
        }
        Err(ServiceError::Form(msg)) => {
            FlashMessage::error(msg).send();
        }
        Err(e) => {
            error!("Failed to save post: {e}");
            FlashMessage::error("Failed to save the post.").send();
        }
    }
    redirect("/admin/posts")
}

#[post("/admin/posts/{post_id}/status")]
pub async fn change_post_status(
    post_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ChangeStatusForm>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    match posts_service::change_post_status(
        repo.get_ref(),
        &user,
        post_id.into_inner(),
        &form.status,
    ) {
        Ok(post) => {
            FlashMessage::success(format!("Post status updated to {}", post.status)).send();
        }
        Err(e) => {
            error!("Failed to update post status: {e}");
            FlashMessage::error("Failed to update post status.").send();
        }
    }
    redirect("/admin/posts")
}

#[post("/admin/posts/{post_id}/delete")]
pub async fn delete_post(
    post_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(response) = ensure_role(&user, SERVICE_ADMIN_ROLE, None) {
        return response;
    }

    match posts_service::delete_post(repo.get_ref(), &user, post_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Post deleted.").send();
        }
        Err(e) => {
            error!("Failed to delete post: {e}");
            FlashMessage::error("Failed to delete the post.").send();
        }
    }
    redirect("/admin/posts")
}

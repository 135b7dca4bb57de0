use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;

use crate::repository::DieselRepository;
use crate::services::blog as blog_service;

#[derive(Deserialize)]
struct ApiV1PostsQueryParams {
    query: String,
}

/// Ranked fuzzy search over published posts, as JSON. Backs the live
/// search box on the blog page.
#[get("/v1/posts")]
pub async fn api_v1_posts(
    params: web::Query<ApiV1PostsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match blog_service::search_posts(repo.get_ref(), &params.query) {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => {
            error!("Failed to search posts: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

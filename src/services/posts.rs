use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::domain::post::{Post, PostStatus};
use crate::dto::posts::{PostsPageData, PostsQuery};
use crate::forms::post::SavePostForm;
use crate::listing::{
    ALL_TAG, QueryState, SearchIndex, SortDirection, filter_records, sort_records,
};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{ADMIN_PAGE_SIZE, Paginated, page_bounds};
use crate::repository::{PostListQuery, PostReader, PostWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the admin blog table across every status. The status dropdown is
/// the table's categorical filter and applies to the search-ranked output.
pub fn load_posts_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: PostsQuery,
) -> ServiceResult<PostsPageData>
where
    R: PostReader + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    let snapshot = repo.list_posts(PostListQuery::new())?;
    let state = QueryState::from_params(query.q, query.status, query.sort, query.dir, query.page);

    let index = SearchIndex::build(&snapshot);
    let mut filtered = filter_records(&index, &snapshot, &state.q, ALL_TAG);
    if state.tag != ALL_TAG {
        filtered.retain(|p| p.status.to_string() == state.tag);
    }

    if let Some(sort) = &state.sort {
        apply_post_sort(&mut filtered, sort, state.direction);
    }

    let total_matches = filtered.len();
    let (page, total_pages, range) = page_bounds(total_matches, ADMIN_PAGE_SIZE, state.page);
    let items: Vec<Post> = filtered[range].iter().map(|p| (*p).clone()).collect();

    Ok(PostsPageData {
        posts: Paginated::new(items, page, total_pages),
        statuses: PostStatus::ALL.iter().map(ToString::to_string).collect(),
        query: QueryState { page, ..state },
        total_matches,
    })
}

/// The sortable columns of the admin blog table.
fn apply_post_sort(posts: &mut [&Post], field: &str, direction: SortDirection) {
    match field {
        "title" => sort_records(posts, |p| p.title.clone(), direction),
        "author" => sort_records(posts, |p| p.author.clone(), direction),
        "category" => sort_records(posts, |p| p.category.clone(), direction),
        "status" => sort_records(posts, |p| p.status.to_string(), direction),
        "published_at" => sort_records(posts, |p| p.published_at, direction),
        _ => {}
    }
}

/// Fetches a post for the edit form.
pub fn load_post_for_edit<R>(
    repo: &R,
    user: &AuthenticatedUser,
    post_id: i32,
) -> ServiceResult<Post>
where
    R: PostReader + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    repo.get_post_by_id(post_id)?.ok_or(ServiceError::NotFound)
}

/// Validates the editor form and creates or updates the post.
pub fn save_post<R>(repo: &R, user: &AuthenticatedUser, form: &SavePostForm) -> ServiceResult<Post>
where
    R: PostWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(err) = form.validate() {
        log::error!("Failed to validate post form: {err}");
        return Err(ServiceError::Form("Please fill in every required field".to_string()));
    }

    match form.id {
        Some(id) => {
            let updates = form
                .to_update_post()
                .map_err(|e| ServiceError::Form(e.to_string()))?;
            repo.update_post(id, &updates).map_err(ServiceError::from)
        }
        None => {
            let new_post = form
                .to_new_post()
                .map_err(|e| ServiceError::Form(e.to_string()))?;
            repo.create_post(&new_post).map_err(ServiceError::from)
        }
    }
}

/// Moves a post to a new workflow status.
pub fn change_post_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    post_id: i32,
    status: &str,
) -> ServiceResult<Post>
where
    R: PostWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    repo.update_post_status(post_id, PostStatus::from(status))
        .map_err(ServiceError::from)
}

/// Deletes a post permanently.
pub fn delete_post<R>(repo: &R, user: &AuthenticatedUser, post_id: i32) -> ServiceResult<()>
where
    R: PostWriter + ?Sized,
{
    if !user.has_role(SERVICE_ADMIN_ROLE) {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_post(post_id).map_err(ServiceError::from)
}

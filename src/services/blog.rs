use crate::domain::post::Post;
use crate::dto::blog::{BlogPageData, BlogQuery, PostPageData};
use crate::listing::{QueryState, SearchIndex, Searchable, filter_records};
use crate::pagination::{BLOG_PAGE_SIZE, Paginated, page_bounds};
use crate::repository::{PostListQuery, PostReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of the public blog: published posts narrowed by the
/// visitor's search text and tag, ranked, and sliced.
pub fn load_blog_page<R>(repo: &R, query: BlogQuery) -> ServiceResult<BlogPageData>
where
    R: PostReader + ?Sized,
{
    let snapshot = repo.list_posts(PostListQuery::new().published())?;

    let state = QueryState::from_params(query.q, query.tag, None, None, query.page);

    let index = SearchIndex::build(&snapshot);
    let filtered = filter_records(&index, &snapshot, &state.q, &state.tag);
    let total_matches = filtered.len();

    let (page, total_pages, range) = page_bounds(total_matches, BLOG_PAGE_SIZE, state.page);
    let items: Vec<Post> = filtered[range].iter().map(|p| (*p).clone()).collect();

    let mut tags: Vec<String> = snapshot
        .iter()
        .flat_map(|p| p.categories())
        .map(str::to_string)
        .collect();
    tags.sort();
    tags.dedup();

    Ok(BlogPageData {
        posts: Paginated::new(items, page, total_pages),
        tags,
        query: QueryState { page, ..state },
        total_matches,
    })
}

/// Loads a single published post by slug, with a few other posts for the
/// "keep reading" rail.
pub fn load_post_page<R>(repo: &R, slug: &str) -> ServiceResult<PostPageData>
where
    R: PostReader + ?Sized,
{
    let post = repo
        .get_post_by_slug(slug)?
        .filter(|p| p.status == crate::domain::post::PostStatus::Published)
        .ok_or(ServiceError::NotFound)?;

    let recent = repo
        .list_posts(PostListQuery::new().published())?
        .into_iter()
        .filter(|p| p.id != post.id)
        .take(3)
        .collect();

    Ok(PostPageData { post, recent })
}

/// Ranked search over published posts for the JSON API.
pub fn search_posts<R>(repo: &R, query: &str) -> ServiceResult<Vec<Post>>
where
    R: PostReader + ?Sized,
{
    let snapshot = repo.list_posts(PostListQuery::new().published())?;
    let index = SearchIndex::build(&snapshot);
    let posts = index
        .query(query)
        .into_iter()
        .filter_map(|pos| snapshot.get(pos).cloned())
        .collect();
    Ok(posts)
}

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::post::{
    NewPost as DomainNewPost, Post as DomainPost, UpdatePost as DomainUpdatePost,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::posts)]
/// Diesel model for [`crate::domain::post::Post`].
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: String,
    pub author: String,
    pub status: String,
    pub published_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::posts)]
/// Insertable form of [`Post`]. Tags travel as a JSON array in a text
/// column.
pub struct NewPost<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub excerpt: &'a str,
    pub content: &'a str,
    pub category: &'a str,
    pub tags: String,
    pub author: &'a str,
    pub status: String,
    pub published_at: Option<NaiveDateTime>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::posts)]
/// Data used when updating a [`Post`] record.
pub struct UpdatePost<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub excerpt: &'a str,
    pub content: &'a str,
    pub category: &'a str,
    pub tags: String,
    pub author: &'a str,
    pub status: String,
    pub published_at: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}

fn tags_to_json(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

fn tags_from_json(tags: &str) -> Vec<String> {
    serde_json::from_str(tags).unwrap_or_default()
}

impl From<Post> for DomainPost {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            category: post.category,
            tags: tags_from_json(&post.tags),
            author: post.author,
            status: post.status.into(),
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewPost> for NewPost<'a> {
    fn from(post: &'a DomainNewPost) -> Self {
        Self {
            title: post.title.as_str(),
            slug: post.slug.as_str(),
            excerpt: post.excerpt.as_str(),
            content: post.content.as_str(),
            category: post.category.as_str(),
            tags: tags_to_json(&post.tags),
            author: post.author.as_str(),
            status: post.status.to_string(),
            published_at: post.published_at,
        }
    }
}

impl<'a> From<&'a DomainUpdatePost> for UpdatePost<'a> {
    fn from(post: &'a DomainUpdatePost) -> Self {
        Self {
            title: post.title.as_str(),
            slug: post.slug.as_str(),
            excerpt: post.excerpt.as_str(),
            content: post.content.as_str(),
            category: post.category.as_str(),
            tags: tags_to_json(&post.tags),
            author: post.author.as_str(),
            status: post.status.to_string(),
            published_at: post.published_at,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::PostStatus;
    use chrono::Utc;

    #[test]
    fn post_into_domain_parses_tags() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_post = Post {
            id: 1,
            title: "t".to_string(),
            slug: "t".to_string(),
            excerpt: "e".to_string(),
            content: "c".to_string(),
            category: "Analytics".to_string(),
            tags: r#"["ROI","Metrics"]"#.to_string(),
            author: "a".to_string(),
            status: "Published".to_string(),
            published_at: Some(now),
            created_at: now,
            updated_at: now,
        };
        let domain: DomainPost = db_post.into();
        assert_eq!(domain.tags, vec!["ROI", "Metrics"]);
        assert_eq!(domain.status, PostStatus::Published);
    }

    #[test]
    fn malformed_tags_fall_back_to_empty() {
        assert!(tags_from_json("not json").is_empty());
    }

    #[test]
    fn from_domain_new_serializes_tags() {
        let domain = DomainNewPost {
            title: "t".to_string(),
            slug: "t".to_string(),
            excerpt: "e".to_string(),
            content: "c".to_string(),
            category: "Analytics".to_string(),
            tags: vec!["ROI".to_string()],
            author: "a".to_string(),
            status: PostStatus::Draft,
            published_at: None,
        };
        let new: NewPost = (&domain).into();
        assert_eq!(new.tags, r#"["ROI"]"#);
        assert_eq!(new.status, "Draft");
    }
}

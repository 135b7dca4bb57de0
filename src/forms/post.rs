use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::post::{NewPost, PostStatus, UpdatePost};
use crate::domain::types::{PostBody, Slug};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data for creating or updating a blog post. An absent `id` means
/// create.
pub struct SavePostForm {
    pub id: Option<i32>,
    #[validate(length(min = 1))]
    pub title: String,
    /// Optional explicit slug; derived from the title when blank.
    #[serde(default)]
    pub slug: String,
    #[validate(length(min = 1))]
    pub excerpt: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    pub category: String,
    /// Comma-separated tag list.
    #[serde(default)]
    pub tags: String,
    #[validate(length(min = 1))]
    pub author: String,
    pub status: String,
    /// `datetime-local` input value, `%Y-%m-%dT%H:%M`.
    pub published_at: Option<String>,
}

impl SavePostForm {
    fn parse_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn parse_slug(&self) -> Result<Slug, FormError> {
        let slug = if self.slug.trim().is_empty() {
            Slug::from_title(&self.title)
        } else {
            Slug::new(self.slug.trim())
        };
        slug.map_err(|_| FormError::InvalidSlug)
    }

    fn parse_published_at(&self, status: &PostStatus) -> Result<Option<NaiveDateTime>, FormError> {
        match self.published_at.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => {
                let parsed = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
                    .map_err(|_| FormError::InvalidDate)?;
                Ok(Some(parsed))
            }
            // Publishing without an explicit date stamps the post now.
            _ if *status == PostStatus::Published => Ok(Some(chrono::Utc::now().naive_utc())),
            _ => Ok(None),
        }
    }

    pub fn to_new_post(&self) -> Result<NewPost, FormError> {
        let status = PostStatus::from(self.status.as_str());
        let content = PostBody::new(&self.content).map_err(|_| FormError::InvalidContent)?;
        Ok(NewPost {
            title: self.title.trim().to_string(),
            slug: self.parse_slug()?.into_inner(),
            excerpt: self.excerpt.trim().to_string(),
            content: content.into_inner(),
            category: self.category.trim().to_string(),
            tags: self.parse_tags(),
            author: self.author.trim().to_string(),
            published_at: self.parse_published_at(&status)?,
            status,
        })
    }

    pub fn to_update_post(&self) -> Result<UpdatePost, FormError> {
        let post = self.to_new_post()?;
        Ok(UpdatePost {
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            category: post.category,
            tags: post.tags,
            author: post.author,
            status: post.status,
            published_at: post.published_at,
        })
    }
}

use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::listing::{Searchable, WeightedField};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub status: PostStatus,
    pub published_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PostStatus {
    Published,
    Draft,
    Scheduled,
}

impl Post {
    /// Approximate reading time shown on listing cards, derived from the
    /// body length the same way the site has always displayed it.
    pub fn read_time(&self) -> String {
        let minutes = (self.content.len() / 1500).max(1);
        format!("{minutes} min read")
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub status: PostStatus,
    pub published_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub status: PostStatus,
    pub published_at: Option<NaiveDateTime>,
}

impl Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Published => write!(f, "Published"),
            PostStatus::Draft => write!(f, "Draft"),
            PostStatus::Scheduled => write!(f, "Scheduled"),
        }
    }
}

impl From<&str> for PostStatus {
    fn from(s: &str) -> Self {
        match s {
            "Published" => PostStatus::Published,
            "Scheduled" => PostStatus::Scheduled,
            _ => PostStatus::Draft,
        }
    }
}

impl From<String> for PostStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl PostStatus {
    /// Every status, in the order the admin dropdown lists them.
    pub const ALL: [PostStatus; 3] = [
        PostStatus::Published,
        PostStatus::Draft,
        PostStatus::Scheduled,
    ];
}

impl Searchable for Post {
    fn fields(&self) -> Vec<WeightedField<'_>> {
        let mut fields = vec![
            WeightedField::new(2.0, &self.title),
            WeightedField::new(1.5, &self.excerpt),
            WeightedField::new(1.0, &self.content),
            WeightedField::new(1.0, &self.category),
        ];
        fields.extend(self.tags.iter().map(|t| WeightedField::new(1.0, t)));
        fields
    }

    fn categories(&self) -> Vec<&str> {
        let mut values = vec![self.category.as_str()];
        values.extend(self.tags.iter().map(String::as_str));
        values
    }
}

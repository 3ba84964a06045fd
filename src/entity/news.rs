use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// A published news article. Immutable after creation; there is no update
/// endpoint, only create and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub committee: String,
    pub excerpt: String,
    pub full_text: String,
    pub journal: String,
    /// Relative `/uploads/...` path, or empty when no image was attached.
    #[serde(default)]
    pub image: String,
    pub date: String,
    pub is_user_published: bool,
    pub created_at: DateTime<Utc>,
}

impl NewsArticle {
    pub fn new(
        title: String,
        committee: String,
        excerpt: String,
        full_text: String,
        journal: String,
        image: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: super::generate_id("news", now),
            title,
            committee,
            excerpt,
            full_text,
            journal,
            image: image.unwrap_or_default(),
            date: super::display_date(now),
            is_user_published: true,
            created_at: now,
        }
    }
}

impl Record for NewsArticle {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

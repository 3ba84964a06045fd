use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, VideoSource};

/// A published interview. Created with exactly one video source, either an
/// external link or an uploaded file; never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: String,
    pub title: String,
    pub committee: String,
    pub description: String,
    pub journal: String,
    pub video: VideoSource,
    pub date: String,
    pub is_user_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Interview {
    pub fn new(
        title: String,
        committee: String,
        description: String,
        journal: String,
        video: VideoSource,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: super::generate_id("interview", now),
            title,
            committee,
            description,
            journal,
            video,
            date: super::display_date(now),
            is_user_published: true,
            created_at: now,
        }
    }
}

impl Record for Interview {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

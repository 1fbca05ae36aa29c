use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_url: String,
    pub notes: String,
    pub date: DateTime<Utc>,
}

impl Progress {
    pub fn new(user_id: Uuid, image_url: String, notes: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            image_url,
            notes,
            date: Utc::now(),
        }
    }
}

/// Ids arrive as raw strings so that an unparsable id reads as an unknown user.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProgress {
    pub user_id: String,
    pub image_url: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_url: String,
    pub notes: String,
    pub date: DateTime<Utc>,
}

impl From<Progress> for ProgressResponse {
    fn from(p: Progress) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            image_url: p.image_url,
            notes: p.notes,
            date: p.date,
        }
    }
}

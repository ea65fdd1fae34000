//! Data models for blog moderation

use super::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation status of a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlogStatus {
    #[default]
    PendingApproved,
    Approved,
    Rejected,
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogStatus::PendingApproved => "PENDING_APPROVED",
            BlogStatus::Approved => "APPROVED",
            BlogStatus::Rejected => "REJECTED",
        }
    }

    /// Verb used in confirmation prompts
    pub fn verb(&self) -> &'static str {
        match self {
            BlogStatus::PendingApproved => "reset",
            BlogStatus::Approved => "approve",
            BlogStatus::Rejected => "reject",
        }
    }
}

/// Author reference: an id in list responses, the embedded user in detail responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Id(String),
    User(Box<User>),
}

impl Default for Author {
    fn default() -> Self {
        Author::Id(String::new())
    }
}

impl Author {
    pub fn display(&self) -> String {
        match self {
            Author::Id(id) => id.clone(),
            Author::User(user) if !user.name.is_empty() => {
                format!("{} <{}>", user.name, user.email)
            }
            Author::User(user) => user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub author: Author,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status_blog: BlogStatus,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

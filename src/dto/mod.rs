//! DTOs returned by panel services and printed by the command-line front end.

use serde::Serialize;

pub mod analytics;
pub mod appointments;
pub mod catalog;
pub mod clients;
pub mod dashboard;
pub mod feedback;
pub mod inventory;
pub mod loyalty;
pub mod notifications;
pub mod payments;
pub mod team;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Success,
    Destructive,
}

/// Transient confirmation shown after a form submit or quick action.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}

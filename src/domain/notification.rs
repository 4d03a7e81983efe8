use serde::{Deserialize, Serialize};

use crate::domain::types::{NotificationId, Title};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Client,
    Message,
    Appointment,
    Team,
    Loyalty,
    Service,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: Title,
    pub description: String,
    /// Relative age as displayed, e.g. `5 min atrás`.
    pub time: String,
    pub read: bool,
}

use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{FeedbackId, PersonName, Rating, SanitizedText, ServiceName};

/// Pre-labeled tone of a review; never inferred from the comment.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Pending,
    Responded,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub id: FeedbackId,
    pub client: PersonName,
    pub date: NaiveDate,
    pub rating: Rating,
    pub comment: SanitizedText,
    pub service: ServiceName,
    pub barber: PersonName,
    pub sentiment: Sentiment,
    pub response_status: ResponseStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewFeedback {
    pub client: PersonName,
    pub date: NaiveDate,
    pub rating: Rating,
    pub comment: SanitizedText,
    pub service: ServiceName,
    pub barber: PersonName,
    pub sentiment: Sentiment,
}

impl NewFeedback {
    #[must_use]
    pub fn into_feedback(self, id: FeedbackId) -> Feedback {
        Feedback {
            id,
            client: self.client,
            date: self.date,
            rating: self.rating,
            comment: self.comment,
            service: self.service,
            barber: self.barber,
            sentiment: self.sentiment,
            response_status: ResponseStatus::Pending,
        }
    }
}

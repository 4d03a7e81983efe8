use serde::Serialize;

use crate::domain::feedback::Feedback;
use crate::stats::DistributionEntry;

#[derive(Debug, Serialize)]
pub struct FeedbackPageData {
    pub feedback: Vec<Feedback>,
    pub total: usize,
    /// Mean rating rounded to one decimal.
    pub average_rating: f64,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    /// Ratings from 5 down to 1.
    pub distribution: Vec<DistributionEntry<u8>>,
    pub pending_responses: usize,
}

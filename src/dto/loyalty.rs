use serde::Serialize;

use crate::domain::loyalty::LoyaltyRecord;

#[derive(Debug, Serialize)]
pub struct LoyaltyEntry {
    #[serde(flatten)]
    pub record: LoyaltyRecord,
    pub reward_progress: u32,
    pub free_haircut_available: bool,
}

impl From<LoyaltyRecord> for LoyaltyEntry {
    fn from(record: LoyaltyRecord) -> Self {
        Self {
            reward_progress: record.reward_progress(),
            free_haircut_available: record.free_haircut_available(),
            record,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoyaltyPageData {
    pub query: String,
    pub entries: Vec<LoyaltyEntry>,
    pub rewards_available: usize,
}

//! Punch-card loyalty program: every fifth visit earns a free haircut.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{LoyaltyId, PersonName};

/// Visits needed before the next haircut is free.
pub const VISITS_PER_REWARD: u32 = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoyaltyRecord {
    pub id: LoyaltyId,
    pub client: PersonName,
    pub visits_count: u32,
    pub last_visit: Option<NaiveDate>,
}

impl LoyaltyRecord {
    /// Progress towards the next reward, capped at 100.
    pub fn reward_progress(&self) -> u32 {
        (self.visits_count.saturating_mul(100) / VISITS_PER_REWARD).min(100)
    }

    pub fn free_haircut_available(&self) -> bool {
        self.visits_count >= VISITS_PER_REWARD
    }

    /// Counts one more visit on `date`.
    pub fn record_visit(&mut self, date: NaiveDate) {
        self.visits_count = self.visits_count.saturating_add(1);
        self.last_visit = Some(date);
    }

    /// Consumes an earned reward. Returns `false` when none is available.
    pub fn redeem(&mut self) -> bool {
        if !self.free_haircut_available() {
            return false;
        }
        self.visits_count -= VISITS_PER_REWARD;
        true
    }
}

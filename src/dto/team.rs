use serde::Serialize;

use crate::domain::team::TeamMember;

#[derive(Debug, Serialize)]
pub struct TeamPageData {
    pub query: String,
    pub members: Vec<TeamMember>,
    pub average_rating: f64,
    pub total_clients: u64,
}

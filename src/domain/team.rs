use serde::{Deserialize, Serialize};

use crate::domain::types::{Percentage, PersonName, TeamMemberId, Title};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: PersonName,
    pub role: Title,
    #[serde(default)]
    pub specialty: Vec<String>,
    /// Years behind the chair.
    pub experience: u32,
    /// Average client rating; `None` until the first review.
    #[serde(default)]
    pub rating: Option<f64>,
    pub availability: Percentage,
    pub clients: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewTeamMember {
    pub name: PersonName,
    pub role: Title,
    pub specialty: Vec<String>,
    pub experience: u32,
    pub availability: Percentage,
}

impl NewTeamMember {
    /// Newcomers start unrated and without a client base.
    #[must_use]
    pub fn into_member(self, id: TeamMemberId) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            role: self.role,
            specialty: self.specialty,
            experience: self.experience,
            rating: None,
            availability: self.availability,
            clients: 0,
        }
    }
}

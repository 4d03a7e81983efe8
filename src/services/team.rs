//! Team panel.

use crate::domain::team::NewTeamMember;
use crate::dto::Notice;
use crate::dto::team::TeamPageData;
use crate::forms::team::AddTeamMemberForm;
use crate::repository::{TeamReader, TeamWriter};
use crate::search::{filter_records, query_or_empty};
use crate::services::{ServiceError, ServiceResult};
use crate::stats::{mean_by, round1};

pub fn load_team<R>(repo: &R, query: Option<&str>) -> ServiceResult<TeamPageData>
where
    R: TeamReader + ?Sized,
{
    let query = query_or_empty(query);

    let members = repo.list_team_members().map_err(|err| {
        log::error!("Failed to list team members: {err}");
        err
    })?;

    let ratings: Vec<f64> = members.iter().filter_map(|m| m.rating).collect();

    Ok(TeamPageData {
        average_rating: round1(mean_by(&ratings, |rating| *rating)),
        total_clients: members.iter().map(|m| u64::from(m.clients)).sum(),
        members: filter_records(members, &query),
        query,
    })
}

pub fn add_team_member<R>(repo: &R, form: AddTeamMemberForm) -> ServiceResult<Notice>
where
    R: TeamWriter + ?Sized,
{
    let new_member = NewTeamMember::try_from(form).map_err(|err| {
        log::warn!("Rejected team member form: {err}");
        ServiceError::from(err)
    })?;

    let member = repo.create_team_member(&new_member).map_err(|err| {
        log::error!("Failed to add a team member: {err}");
        err
    })?;

    Ok(Notice::success(
        "Profissional adicionado",
        format!("{} agora faz parte da equipe.", member.name),
    ))
}


#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::domain::team::TeamMember;
    use crate::domain::types::{Percentage, PersonName, TeamMemberId, Title};
    use crate::repository::mock::MockRepository;

    fn member(id: i32, name: &str, role: &str, rating: f64, clients: u32) -> TeamMember {
        TeamMember {
            id: TeamMemberId::new(id).unwrap(),
            name: PersonName::new(name).unwrap(),
            role: Title::new(role).unwrap(),
            specialty: vec!["Degradê".to_string()],
            experience: 3,
            rating: Some(rating),
            availability: Percentage::new(80).unwrap(),
            clients,
        }
    }

    #[test]
    fn mean_rating_covers_whole_team() {
        let mut repo = MockRepository::new();
        repo.expect_list_team_members().times(1).returning(|| {
            Ok(vec![
                member(1, "André Silva", "Barbeiro Master", 4.9, 143),
                member(2, "Marcos Souza", "Barbeiro", 4.7, 92),
                member(3, "Rodrigo Almeida", "Barbeiro Senior", 4.8, 215),
            ])
        });

        let page = load_team(&repo, Some("senior")).unwrap();

        assert_eq!(page.members.len(), 1);
        assert_eq!(page.average_rating, 4.8);
        assert_eq!(page.total_clients, 450);
    }

    #[test]
    fn new_member_is_stored() {
        let mut repo = MockRepository::new();
        repo.expect_create_team_member()
            .withf(|new| new.name.as_str() == "Ana Souza" && new.availability.get() == 90)
            .times(1)
            .returning(|new| Ok(new.clone().into_member(TeamMemberId::new(4).unwrap())));

        let form = AddTeamMemberForm {
            name: "Ana Souza".to_string(),
            role: "Barbeira".to_string(),
            specialty: "Coloração".to_string(),
            experience: "4".to_string(),
            availability: "90".to_string(),
        };

        let notice = add_team_member(&repo, form).unwrap();
        assert_eq!(notice.description, "Ana Souza agora faz parte da equipe.");
    }

    #[test]
    fn invalid_member_form_is_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_create_team_member().times(0);

        let result = add_team_member(&repo, AddTeamMemberForm::default());

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}

use serde::Deserialize;
use validator::Validate;

use crate::domain::team::NewTeamMember;
use crate::domain::types::{Percentage, PersonName, Title};
use crate::forms::{FormError, parse_number_or_zero, split_list};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddTeamMemberForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub role: String,
    /// Comma separated specialties.
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub experience: String,
    /// Weekly availability in percent.
    #[serde(default)]
    pub availability: String,
}

impl TryFrom<AddTeamMemberForm> for NewTeamMember {
    type Error = FormError;

    fn try_from(form: AddTeamMemberForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let availability = Percentage::new(parse_number_or_zero(&form.availability))
            .map_err(|_| FormError::InvalidPercentage)?;

        Ok(NewTeamMember {
            name: PersonName::new(&form.name).map_err(|_| FormError::InvalidName)?,
            role: Title::new(&form.role).map_err(|_| FormError::InvalidName)?,
            specialty: split_list(&form.specialty),
            experience: parse_number_or_zero(&form.experience),
            availability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_member_with_specialties() {
        let member = NewTeamMember::try_from(AddTeamMemberForm {
            name: "Ana Souza".to_string(),
            role: "Barbeira".to_string(),
            specialty: "Coloração, Corte Feminino".to_string(),
            experience: "4".to_string(),
            availability: "90".to_string(),
        })
        .unwrap();
        assert_eq!(member.specialty, vec!["Coloração", "Corte Feminino"]);
        assert_eq!(member.experience, 4);
        assert_eq!(member.availability.get(), 90);
    }

    #[test]
    fn availability_above_hundred_is_rejected() {
        let result = NewTeamMember::try_from(AddTeamMemberForm {
            name: "Ana Souza".to_string(),
            role: "Barbeira".to_string(),
            availability: "120".to_string(),
            ..AddTeamMemberForm::default()
        });
        assert!(matches!(result, Err(FormError::InvalidPercentage)));
    }
}

//! Client list panel and the add-client dialog.

use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::dto::Notice;
use crate::dto::clients::ClientsPageData;
use crate::forms::client::AddClientForm;
use crate::repository::{ClientReader, ClientWriter};
use crate::search::{filter_records, query_or_empty};
use crate::services::{ServiceError, ServiceResult};

/// Loads the client list filtered by name, email or phone.
pub fn load_clients<R>(repo: &R, query: Option<&str>) -> ServiceResult<ClientsPageData>
where
    R: ClientReader + ?Sized,
{
    let query = query_or_empty(query);

    let clients = repo.list_clients().map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err
    })?;
    let total = clients.len();

    Ok(ClientsPageData {
        clients: filter_records(clients, &query),
        query,
        total,
    })
}

/// Loads one client for the details dialog.
pub fn get_client<R>(repo: &R, client_id: i32) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let client_id = ClientId::new(client_id)?;

    repo.get_client_by_id(client_id)
        .map_err(|err| {
            log::error!("Failed to load client {client_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

/// Validates the add-client form and stores the new client.
pub fn add_client<R>(repo: &R, form: AddClientForm) -> ServiceResult<Notice>
where
    R: ClientWriter + ?Sized,
{
    let new_client = NewClient::try_from(form).map_err(|err| {
        log::warn!("Rejected client form: {err}");
        ServiceError::from(err)
    })?;

    let client = repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        err
    })?;

    Ok(Notice::success(
        "Cliente adicionado",
        format!("{} foi adicionado com sucesso.", client.name),
    ))
}


#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    #[test]
    fn repository_failure_is_reported_as_internal() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .times(1)
            .returning(|| Err(RepositoryError::Unexpected("lock poisoned".to_string())));

        let result = load_clients(&repo, Some("ana"));

        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }

    #[test]
    fn invalid_form_never_reaches_the_repository() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().times(0);

        let form = AddClientForm {
            name: "Ana".to_string(),
            email: "not-an-email".to_string(),
            ..AddClientForm::default()
        };

        assert!(add_client(&repo, form).is_err());
    }
}

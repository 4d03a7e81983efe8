//! Shared in-memory store implementing every repository trait.
//!
//! Writes live for the lifetime of the process only.

use std::sync::{Arc, RwLock};

use crate::domain::analytics::AnalyticsData;
use crate::domain::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::domain::catalog::{NewServiceOffering, ServiceOffering};
use crate::domain::client::{Client, NewClient};
use crate::domain::feedback::{Feedback, NewFeedback, ResponseStatus};
use crate::domain::loyalty::LoyaltyRecord;
use crate::domain::notification::Notification;
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::team::{NewTeamMember, TeamMember};
use crate::domain::transaction::Transaction;
use crate::domain::types::{
    AppointmentId, ClientId, FeedbackId, LoyaltyId, NotificationId, ProductId, ServiceId,
    TeamMemberId,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::store::Store;
use crate::repository::{
    AnalyticsReader, AppointmentReader, AppointmentWriter, CatalogReader, CatalogWriter,
    ClientReader, ClientWriter, FeedbackReader, FeedbackWriter, LoyaltyReader, LoyaltyWriter,
    NotificationReader, NotificationWriter, ProductReader, ProductWriter, TeamReader, TeamWriter,
    TransactionReader,
};

/// Cloneable handle to one shared [`Store`].
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Next free integer identifier after the largest one in use.
fn next_id(ids: impl Iterator<Item = i32>) -> RepositoryResult<i32> {
    ids.max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| RepositoryError::Unexpected("identifier space exhausted".to_string()))
}

impl ClientReader for InMemoryRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        Ok(self.store.read()?.clients.clone())
    }

    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let store = self.store.read()?;
        Ok(store.clients.iter().find(|c| c.id == id).cloned())
    }
}

impl ClientWriter for InMemoryRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        let mut store = self.store.write()?;
        let id = ClientId::new(next_id(store.clients.iter().map(|c| c.id.get()))?)?;
        let client = new_client.clone().into_client(id);
        store.clients.push(client.clone());
        Ok(client)
    }
}

impl ProductReader for InMemoryRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.store.read()?.products.clone())
    }

    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>> {
        let store = self.store.read()?;
        Ok(store.products.iter().find(|p| &p.id == id).cloned())
    }
}

impl ProductWriter for InMemoryRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let mut store = self.store.write()?;
        let mut id = ProductId::generate();
        while store.products.iter().any(|p| p.id == id) {
            id = ProductId::generate();
        }
        let product = new_product.clone().into_product(id);
        store.products.push(product.clone());
        Ok(product)
    }

    fn update_product(
        &self,
        id: &ProductId,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product> {
        let mut store = self.store.write()?;
        let product = store
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        updates.clone().apply(product);
        Ok(product.clone())
    }

    fn delete_product(&self, id: &ProductId) -> RepositoryResult<Product> {
        let mut store = self.store.write()?;
        let index = store
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(store.products.remove(index))
    }
}

impl AppointmentReader for InMemoryRepository {
    fn list_appointments(&self) -> RepositoryResult<Vec<Appointment>> {
        Ok(self.store.read()?.appointments.clone())
    }
}

impl AppointmentWriter for InMemoryRepository {
    fn create_appointment(
        &self,
        new_appointment: &NewAppointment,
    ) -> RepositoryResult<Appointment> {
        let mut store = self.store.write()?;
        let id = AppointmentId::new(next_id(store.appointments.iter().map(|a| a.id.get()))?)?;
        let appointment = new_appointment.clone().into_appointment(id);
        store.appointments.push(appointment.clone());
        Ok(appointment)
    }

    fn set_appointment_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> RepositoryResult<Appointment> {
        let mut store = self.store.write()?;
        let appointment = store
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(RepositoryError::NotFound)?;
        appointment.status = status;
        Ok(appointment.clone())
    }
}

impl TransactionReader for InMemoryRepository {
    fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>> {
        Ok(self.store.read()?.transactions.clone())
    }
}

impl FeedbackReader for InMemoryRepository {
    fn list_feedback(&self) -> RepositoryResult<Vec<Feedback>> {
        Ok(self.store.read()?.feedback.clone())
    }
}

impl FeedbackWriter for InMemoryRepository {
    fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback> {
        let mut store = self.store.write()?;
        let id = FeedbackId::new(next_id(store.feedback.iter().map(|f| f.id.get()))?)?;
        let feedback = new_feedback.clone().into_feedback(id);
        store.feedback.push(feedback.clone());
        Ok(feedback)
    }

    fn mark_feedback_responded(&self, id: FeedbackId) -> RepositoryResult<Feedback> {
        let mut store = self.store.write()?;
        let feedback = store
            .feedback
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(RepositoryError::NotFound)?;
        feedback.response_status = ResponseStatus::Responded;
        Ok(feedback.clone())
    }
}

impl TeamReader for InMemoryRepository {
    fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>> {
        Ok(self.store.read()?.team_members.clone())
    }
}

impl TeamWriter for InMemoryRepository {
    fn create_team_member(&self, new_member: &NewTeamMember) -> RepositoryResult<TeamMember> {
        let mut store = self.store.write()?;
        let id = TeamMemberId::new(next_id(store.team_members.iter().map(|m| m.id.get()))?)?;
        let member = new_member.clone().into_member(id);
        store.team_members.push(member.clone());
        Ok(member)
    }
}

impl LoyaltyReader for InMemoryRepository {
    fn list_loyalty_records(&self) -> RepositoryResult<Vec<LoyaltyRecord>> {
        Ok(self.store.read()?.loyalty_records.clone())
    }

    fn get_loyalty_record(&self, id: LoyaltyId) -> RepositoryResult<Option<LoyaltyRecord>> {
        let store = self.store.read()?;
        Ok(store.loyalty_records.iter().find(|r| r.id == id).cloned())
    }
}

impl LoyaltyWriter for InMemoryRepository {
    fn save_loyalty_record(&self, record: &LoyaltyRecord) -> RepositoryResult<()> {
        let mut store = self.store.write()?;
        let existing = store
            .loyalty_records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(RepositoryError::NotFound)?;
        *existing = record.clone();
        Ok(())
    }
}

impl CatalogReader for InMemoryRepository {
    fn list_services(&self) -> RepositoryResult<Vec<ServiceOffering>> {
        Ok(self.store.read()?.services.clone())
    }
}

impl CatalogWriter for InMemoryRepository {
    fn create_service(
        &self,
        new_service: &NewServiceOffering,
    ) -> RepositoryResult<ServiceOffering> {
        let mut store = self.store.write()?;
        let id = ServiceId::new(next_id(store.services.iter().map(|s| s.id.get()))?)?;
        let service = new_service.clone().into_offering(id);
        store.services.push(service.clone());
        Ok(service)
    }
}

impl NotificationReader for InMemoryRepository {
    fn list_notifications(&self) -> RepositoryResult<Vec<Notification>> {
        Ok(self.store.read()?.notifications.clone())
    }
}

impl NotificationWriter for InMemoryRepository {
    fn mark_notification_read(&self, id: NotificationId) -> RepositoryResult<()> {
        let mut store = self.store.write()?;
        let notification = store
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(RepositoryError::NotFound)?;
        notification.read = true;
        Ok(())
    }

    fn dismiss_notification(&self, id: NotificationId) -> RepositoryResult<Notification> {
        let mut store = self.store.write()?;
        let index = store
            .notifications
            .iter()
            .position(|n| n.id == id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(store.notifications.remove(index))
    }

    fn mark_all_notifications_read(&self) -> RepositoryResult<usize> {
        let mut store = self.store.write()?;
        let mut changed = 0;
        for notification in store.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        Ok(changed)
    }
}

impl AnalyticsReader for InMemoryRepository {
    fn analytics_data(&self) -> RepositoryResult<AnalyticsData> {
        Ok(self.store.read()?.analytics.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ClientEmail, PersonName};

    fn repo() -> InMemoryRepository {
        InMemoryRepository::new(Store::demo().expect("demo data"))
    }

    #[test]
    fn created_clients_get_next_id_and_are_listed() {
        let repo = repo();
        let client = repo
            .create_client(&NewClient::new(
                PersonName::new("Ana Souza").unwrap(),
                ClientEmail::new("ana@exemplo.com").unwrap(),
                "(11) 90000-0000",
                vec![],
            ))
            .unwrap();

        assert_eq!(client.id.get(), 6);
        assert_eq!(client.visits, 0);
        let clients = repo.list_clients().unwrap();
        assert_eq!(clients.len(), 6);
        assert_eq!(clients.last().unwrap().name.as_str(), "Ana Souza");
    }

    #[test]
    fn exhausted_identifiers_are_an_error() {
        let mut store = Store::default();
        store.clients.push(
            NewClient::new(
                PersonName::new("Ana Souza").unwrap(),
                ClientEmail::new("ana@exemplo.com").unwrap(),
                "",
                vec![],
            )
            .into_client(ClientId::new(i32::MAX).unwrap()),
        );
        let repo = InMemoryRepository::new(store);

        let result = repo.create_client(&NewClient::new(
            PersonName::new("Bia Lima").unwrap(),
            ClientEmail::new("bia@exemplo.com").unwrap(),
            "",
            vec![],
        ));

        assert!(matches!(result, Err(RepositoryError::Unexpected(_))));
        assert_eq!(repo.list_clients().unwrap().len(), 1);
    }

    #[test]
    fn clones_share_the_same_store() {
        let repo = repo();
        let other = repo.clone();
        other.mark_all_notifications_read().unwrap();
        assert!(repo.list_notifications().unwrap().iter().all(|n| n.read));
    }

    #[test]
    fn delete_unknown_product_is_not_found() {
        let repo = repo();
        let missing = ProductId::new("missing").unwrap();
        assert!(matches!(
            repo.delete_product(&missing),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn delete_product_returns_removed_record() {
        let repo = repo();
        let removed = repo.delete_product(&ProductId::new("3").unwrap()).unwrap();
        assert_eq!(removed.name.as_str(), "Óleo para Barba 30ml");
        assert_eq!(repo.list_products().unwrap().len(), 4);
    }

    #[test]
    fn mark_all_read_counts_changes() {
        let repo = repo();
        assert_eq!(repo.mark_all_notifications_read().unwrap(), 3);
        assert_eq!(repo.mark_all_notifications_read().unwrap(), 0);
    }

    #[test]
    fn status_change_is_stored() {
        let repo = repo();
        let id = AppointmentId::new(3).unwrap();
        repo.set_appointment_status(id, AppointmentStatus::Confirmed)
            .unwrap();
        let stored = repo
            .list_appointments()
            .unwrap()
            .into_iter()
            .find(|a| a.id == id)
            .unwrap();
        assert_eq!(stored.status, AppointmentStatus::Confirmed);
    }
}

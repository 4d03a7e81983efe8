use crate::{
    domain::{
        analytics::AnalyticsData,
        appointment::{Appointment, AppointmentStatus, NewAppointment},
        catalog::{NewServiceOffering, ServiceOffering},
        client::{Client, NewClient},
        feedback::{Feedback, NewFeedback},
        loyalty::LoyaltyRecord,
        notification::Notification,
        product::{NewProduct, Product, UpdateProduct},
        team::{NewTeamMember, TeamMember},
        transaction::Transaction,
        types::{AppointmentId, ClientId, FeedbackId, LoyaltyId, NotificationId, ProductId},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod store;

pub use memory::InMemoryRepository;
pub use store::Store;

pub trait ClientReader {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
}

pub trait ProductReader {
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, id: &ProductId, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    /// Removes the product, returning what was removed.
    fn delete_product(&self, id: &ProductId) -> RepositoryResult<Product>;
}

pub trait AppointmentReader {
    fn list_appointments(&self) -> RepositoryResult<Vec<Appointment>>;
}

pub trait AppointmentWriter {
    fn create_appointment(&self, new_appointment: &NewAppointment)
    -> RepositoryResult<Appointment>;
    fn set_appointment_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> RepositoryResult<Appointment>;
}

pub trait TransactionReader {
    fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>>;
}

pub trait FeedbackReader {
    fn list_feedback(&self) -> RepositoryResult<Vec<Feedback>>;
}

pub trait FeedbackWriter {
    fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback>;
    fn mark_feedback_responded(&self, id: FeedbackId) -> RepositoryResult<Feedback>;
}

pub trait TeamReader {
    fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>>;
}

pub trait TeamWriter {
    fn create_team_member(&self, new_member: &NewTeamMember) -> RepositoryResult<TeamMember>;
}

pub trait LoyaltyReader {
    fn list_loyalty_records(&self) -> RepositoryResult<Vec<LoyaltyRecord>>;
    fn get_loyalty_record(&self, id: LoyaltyId) -> RepositoryResult<Option<LoyaltyRecord>>;
}

pub trait LoyaltyWriter {
    fn save_loyalty_record(&self, record: &LoyaltyRecord) -> RepositoryResult<()>;
}

pub trait CatalogReader {
    fn list_services(&self) -> RepositoryResult<Vec<ServiceOffering>>;
}

pub trait CatalogWriter {
    fn create_service(&self, new_service: &NewServiceOffering)
    -> RepositoryResult<ServiceOffering>;
}

pub trait NotificationReader {
    fn list_notifications(&self) -> RepositoryResult<Vec<Notification>>;
}

pub trait NotificationWriter {
    fn mark_notification_read(&self, id: NotificationId) -> RepositoryResult<()>;
    fn dismiss_notification(&self, id: NotificationId) -> RepositoryResult<Notification>;
    /// Returns how many notifications changed state.
    fn mark_all_notifications_read(&self) -> RepositoryResult<usize>;
}

pub trait AnalyticsReader {
    fn analytics_data(&self) -> RepositoryResult<AnalyticsData>;
}

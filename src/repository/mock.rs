//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::analytics::AnalyticsData;
use crate::domain::appointment::{Appointment, AppointmentStatus, NewAppointment};
use crate::domain::catalog::{NewServiceOffering, ServiceOffering};
use crate::domain::client::{Client, NewClient};
use crate::domain::feedback::{Feedback, NewFeedback};
use crate::domain::loyalty::LoyaltyRecord;
use crate::domain::notification::Notification;
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::team::{NewTeamMember, TeamMember};
use crate::domain::transaction::Transaction;
use crate::domain::types::{
    AppointmentId, ClientId, FeedbackId, LoyaltyId, NotificationId, ProductId,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AnalyticsReader, AppointmentReader, AppointmentWriter, CatalogReader, CatalogWriter,
    ClientReader, ClientWriter, FeedbackReader, FeedbackWriter, LoyaltyReader, LoyaltyWriter,
    NotificationReader, NotificationWriter, ProductReader, ProductWriter, TeamReader, TeamWriter,
    TransactionReader,
};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    }

    impl ProductReader for Repository {
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
        fn get_product_by_id(&self, id: &ProductId) -> RepositoryResult<Option<Product>>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(
            &self,
            id: &ProductId,
            updates: &UpdateProduct,
        ) -> RepositoryResult<Product>;
        fn delete_product(&self, id: &ProductId) -> RepositoryResult<Product>;
    }

    impl AppointmentReader for Repository {
        fn list_appointments(&self) -> RepositoryResult<Vec<Appointment>>;
    }

    impl AppointmentWriter for Repository {
        fn create_appointment(
            &self,
            new_appointment: &NewAppointment,
        ) -> RepositoryResult<Appointment>;
        fn set_appointment_status(
            &self,
            id: AppointmentId,
            status: AppointmentStatus,
        ) -> RepositoryResult<Appointment>;
    }

    impl TransactionReader for Repository {
        fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>>;
    }

    impl FeedbackReader for Repository {
        fn list_feedback(&self) -> RepositoryResult<Vec<Feedback>>;
    }

    impl FeedbackWriter for Repository {
        fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback>;
        fn mark_feedback_responded(&self, id: FeedbackId) -> RepositoryResult<Feedback>;
    }

    impl TeamReader for Repository {
        fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>>;
    }

    impl TeamWriter for Repository {
        fn create_team_member(&self, new_member: &NewTeamMember) -> RepositoryResult<TeamMember>;
    }

    impl LoyaltyReader for Repository {
        fn list_loyalty_records(&self) -> RepositoryResult<Vec<LoyaltyRecord>>;
        fn get_loyalty_record(&self, id: LoyaltyId) -> RepositoryResult<Option<LoyaltyRecord>>;
    }

    impl LoyaltyWriter for Repository {
        fn save_loyalty_record(&self, record: &LoyaltyRecord) -> RepositoryResult<()>;
    }

    impl CatalogReader for Repository {
        fn list_services(&self) -> RepositoryResult<Vec<ServiceOffering>>;
    }

    impl CatalogWriter for Repository {
        fn create_service(
            &self,
            new_service: &NewServiceOffering,
        ) -> RepositoryResult<ServiceOffering>;
    }

    impl NotificationReader for Repository {
        fn list_notifications(&self) -> RepositoryResult<Vec<Notification>>;
    }

    impl NotificationWriter for Repository {
        fn mark_notification_read(&self, id: NotificationId) -> RepositoryResult<()>;
        fn dismiss_notification(&self, id: NotificationId) -> RepositoryResult<Notification>;
        fn mark_all_notifications_read(&self) -> RepositoryResult<usize>;
    }

    impl AnalyticsReader for Repository {
        fn analytics_data(&self) -> RepositoryResult<AnalyticsData>;
    }
}

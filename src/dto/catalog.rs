use serde::Serialize;

use crate::domain::catalog::ServiceOffering;

#[derive(Debug, Serialize)]
pub struct CatalogPageData {
    pub query: String,
    pub services: Vec<ServiceOffering>,
    pub popular: Vec<ServiceOffering>,
}

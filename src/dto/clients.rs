use serde::Serialize;

use crate::domain::client::Client;

/// Client list as filtered by the search box.
#[derive(Debug, Serialize)]
pub struct ClientsPageData {
    pub query: String,
    pub clients: Vec<Client>,
    /// Size of the unfiltered list.
    pub total: usize,
}

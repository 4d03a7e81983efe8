//! Configuration model loaded from external sources.

use chrono::{Local, NaiveDate};
use serde::Deserialize;

fn default_most_used_limit() -> usize {
    5
}

fn default_popular_services_limit() -> usize {
    3
}

fn default_export_dir() -> String {
    ".".to_string()
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Settings shared by every dashboard command.
pub struct DashboardConfig {
    /// JSON seed replacing the bundled demo shop.
    #[serde(default)]
    pub seed_file: Option<String>,
    /// Date treated as "today"; the system date when unset.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    #[serde(default = "default_most_used_limit")]
    pub most_used_limit: usize,
    #[serde(default = "default_popular_services_limit")]
    pub popular_services_limit: usize,
    /// Base directory for relative export paths.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            reference_date: None,
            most_used_limit: default_most_used_limit(),
            popular_services_limit: default_popular_services_limit(),
            export_dir: default_export_dir(),
        }
    }
}

impl DashboardConfig {
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"reference_date": "2023-06-12"}"#).unwrap();
        assert_eq!(config.most_used_limit, 5);
        assert_eq!(config.popular_services_limit, 3);
        assert_eq!(config.export_dir, ".");
        assert_eq!(
            config.reference_date(),
            NaiveDate::from_ymd_opt(2023, 6, 12).unwrap()
        );
    }
}

//! Pre-aggregated figures behind the analytics report.

use serde::{Deserialize, Serialize};

/// Price list used to estimate what a professional billed.
pub const HAIRCUT_PRICE: f64 = 40.0;
pub const BEARD_PRICE: f64 = 25.0;
pub const COLOR_PRICE: f64 = 70.0;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenue {
    pub month: String,
    pub value: f64,
}

/// Bookings of one service in the reporting period.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceDemand {
    pub name: String,
    pub bookings: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeekdayVolume {
    pub day: String,
    pub appointments: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfessionalPerformance {
    pub name: String,
    pub haircuts: u32,
    pub beard: u32,
    pub color: u32,
}

impl ProfessionalPerformance {
    pub fn total_services(&self) -> u64 {
        u64::from(self.haircuts) + u64::from(self.beard) + u64::from(self.color)
    }

    pub fn estimated_revenue(&self) -> f64 {
        f64::from(self.haircuts) * HAIRCUT_PRICE
            + f64::from(self.beard) * BEARD_PRICE
            + f64::from(self.color) * COLOR_PRICE
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsData {
    #[serde(default)]
    pub monthly_revenue: Vec<MonthlyRevenue>,
    #[serde(default)]
    pub service_demand: Vec<ServiceDemand>,
    #[serde(default)]
    pub weekly_appointments: Vec<WeekdayVolume>,
    #[serde(default)]
    pub professionals: Vec<ProfessionalPerformance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_revenue_uses_price_list() {
        let joao = ProfessionalPerformance {
            name: "João Silva".to_string(),
            haircuts: 32,
            beard: 18,
            color: 5,
        };
        assert_eq!(joao.total_services(), 55);
        assert_eq!(joao.estimated_revenue(), 32.0 * 40.0 + 18.0 * 25.0 + 5.0 * 70.0);
    }

    #[test]
    fn total_services_does_not_wrap() {
        let busy = ProfessionalPerformance {
            name: "Rodrigo Almeida".to_string(),
            haircuts: u32::MAX,
            beard: u32::MAX,
            color: 1,
        };
        assert_eq!(busy.total_services(), 2 * u64::from(u32::MAX) + 1);
    }
}

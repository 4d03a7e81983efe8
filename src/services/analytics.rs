//! Analytics report derived from the pre-aggregated figures.

use crate::domain::analytics::{AnalyticsData, ProfessionalPerformance, WeekdayVolume};
use crate::dto::analytics::{AnalyticsPageData, ProfessionalSummary, ServiceShare};
use crate::repository::AnalyticsReader;
use crate::services::ServiceResult;
use crate::stats::{mean_by, percentage, round1, round2, sum_by};

/// Share of all bookings taken by each service, in report order.
pub fn service_share(data: &AnalyticsData) -> Vec<ServiceShare> {
    let total: u64 = data
        .service_demand
        .iter()
        .map(|s| u64::from(s.bookings))
        .sum();
    data.service_demand
        .iter()
        .map(|s| ServiceShare {
            name: s.name.clone(),
            bookings: s.bookings,
            percentage: round1(percentage(u64::from(s.bookings), total)),
        })
        .collect()
}

/// Weekday with the most appointments; the earliest wins a tie.
pub fn busiest_day(weekly: &[WeekdayVolume]) -> Option<WeekdayVolume> {
    weekly
        .iter()
        .fold(None::<&WeekdayVolume>, |best, day| match best {
            Some(best) if best.appointments >= day.appointments => Some(best),
            _ => Some(day),
        })
        .cloned()
}

impl From<&ProfessionalPerformance> for ProfessionalSummary {
    fn from(p: &ProfessionalPerformance) -> Self {
        Self {
            name: p.name.clone(),
            haircuts: p.haircuts,
            beard: p.beard,
            color: p.color,
            total_services: p.total_services(),
            estimated_revenue: p.estimated_revenue(),
        }
    }
}

pub fn build_report(data: AnalyticsData) -> AnalyticsPageData {
    AnalyticsPageData {
        annual_revenue: round2(sum_by(&data.monthly_revenue, |m| m.value)),
        monthly_average: round2(mean_by(&data.monthly_revenue, |m| m.value)),
        service_share: service_share(&data),
        busiest_day: busiest_day(&data.weekly_appointments),
        professionals: data.professionals.iter().map(ProfessionalSummary::from).collect(),
        weekly_appointments: data.weekly_appointments,
        monthly_revenue: data.monthly_revenue,
    }
}

pub fn load_analytics<R>(repo: &R) -> ServiceResult<AnalyticsPageData>
where
    R: AnalyticsReader + ?Sized,
{
    let data = repo.analytics_data().map_err(|err| {
        log::error!("Failed to load analytics data: {err}");
        err
    })?;

    Ok(build_report(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::ServiceDemand;
    use crate::repository::{InMemoryRepository, Store};

    fn report() -> AnalyticsPageData {
        load_analytics(&InMemoryRepository::new(Store::demo().unwrap())).unwrap()
    }

    #[test]
    fn revenue_totals() {
        let report = report();
        assert_eq!(report.annual_revenue, 25240.0);
        assert_eq!(report.monthly_average, 2103.33);
    }

    #[test]
    fn service_share_uses_all_bookings() {
        let report = report();
        assert_eq!(report.service_share[0].percentage, 42.0);
        assert_eq!(report.service_share[4].percentage, 4.0);
    }

    #[test]
    fn saturday_is_busiest() {
        assert_eq!(report().busiest_day.map(|d| d.day), Some("Sáb".to_string()));
    }

    #[test]
    fn ties_keep_first_day() {
        let weekly = vec![
            WeekdayVolume { day: "Seg".to_string(), appointments: 10 },
            WeekdayVolume { day: "Ter".to_string(), appointments: 10 },
        ];
        assert_eq!(busiest_day(&weekly).map(|d| d.day), Some("Seg".to_string()));
        assert_eq!(busiest_day(&[]), None);
    }

    #[test]
    fn professional_revenue_uses_price_list() {
        let report = report();
        let maria = &report.professionals[1];
        assert_eq!(maria.total_services, 40);
        assert_eq!(maria.estimated_revenue, 28.0 * 40.0 + 12.0 * 70.0);
    }

    #[test]
    fn share_of_huge_booking_counts_does_not_wrap() {
        let data = AnalyticsData {
            service_demand: vec![
                ServiceDemand { name: "Corte".to_string(), bookings: u32::MAX },
                ServiceDemand { name: "Barba".to_string(), bookings: u32::MAX },
            ],
            ..AnalyticsData::default()
        };
        let shares = service_share(&data);
        assert_eq!(shares[0].percentage, 50.0);
        assert_eq!(shares[1].percentage, 50.0);
    }

    #[test]
    fn empty_data_reports_zero() {
        let report = build_report(AnalyticsData::default());
        assert_eq!(report.annual_revenue, 0.0);
        assert_eq!(report.monthly_average, 0.0);
        assert!(report.service_share.is_empty());
        assert!(report.busiest_day.is_none());
    }
}

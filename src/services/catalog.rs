//! Service catalog panel.

use crate::domain::catalog::{NewServiceOffering, ServiceOffering};
use crate::dto::Notice;
use crate::dto::catalog::CatalogPageData;
use crate::forms::catalog::AddServiceForm;
use crate::repository::{CatalogReader, CatalogWriter};
use crate::search::{filter_records, query_or_empty};
use crate::services::{ServiceError, ServiceResult};

/// Services flagged as popular, at most `limit` of them, in catalog order.
pub fn popular_services(services: &[ServiceOffering], limit: usize) -> Vec<ServiceOffering> {
    services
        .iter()
        .filter(|s| s.popular)
        .take(limit)
        .cloned()
        .collect()
}

pub fn load_catalog<R>(
    repo: &R,
    query: Option<&str>,
    popular_limit: usize,
) -> ServiceResult<CatalogPageData>
where
    R: CatalogReader + ?Sized,
{
    let query = query_or_empty(query);

    let services = repo.list_services().map_err(|err| {
        log::error!("Failed to list services: {err}");
        err
    })?;

    Ok(CatalogPageData {
        popular: popular_services(&services, popular_limit),
        services: filter_records(services, &query),
        query,
    })
}

pub fn add_service<R>(repo: &R, form: AddServiceForm) -> ServiceResult<Notice>
where
    R: CatalogWriter + ?Sized,
{
    let new_service = NewServiceOffering::try_from(form).map_err(|err| {
        log::warn!("Rejected service form: {err}");
        ServiceError::from(err)
    })?;

    let service = repo.create_service(&new_service).map_err(|err| {
        log::error!("Failed to add a service: {err}");
        err
    })?;

    Ok(Notice::success(
        "Serviço adicionado",
        format!("{} foi adicionado ao catálogo.", service.name),
    ))
}

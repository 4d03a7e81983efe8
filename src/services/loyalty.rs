//! Loyalty punch cards: progress list, visit registration and rewards.

use chrono::NaiveDate;

use crate::domain::loyalty::{LoyaltyRecord, VISITS_PER_REWARD};
use crate::domain::types::LoyaltyId;
use crate::dto::Notice;
use crate::dto::loyalty::{LoyaltyEntry, LoyaltyPageData};
use crate::repository::{LoyaltyReader, LoyaltyWriter};
use crate::search::{filter_records, query_or_empty};
use crate::services::{ServiceError, ServiceResult};

pub fn load_loyalty<R>(repo: &R, query: Option<&str>) -> ServiceResult<LoyaltyPageData>
where
    R: LoyaltyReader + ?Sized,
{
    let query = query_or_empty(query);

    let records = repo.list_loyalty_records().map_err(|err| {
        log::error!("Failed to list loyalty records: {err}");
        err
    })?;

    let entries: Vec<LoyaltyEntry> = filter_records(records, &query)
        .into_iter()
        .map(LoyaltyEntry::from)
        .collect();

    Ok(LoyaltyPageData {
        rewards_available: entries.iter().filter(|e| e.free_haircut_available).count(),
        entries,
        query,
    })
}

fn load_record<R>(repo: &R, id: LoyaltyId) -> ServiceResult<LoyaltyRecord>
where
    R: LoyaltyReader + ?Sized,
{
    repo.get_loyalty_record(id)
        .map_err(|err| {
            log::error!("Failed to load loyalty record {id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

/// Adds one visit to the client's card.
pub fn record_visit<R>(repo: &R, record_id: i32, date: NaiveDate) -> ServiceResult<Notice>
where
    R: LoyaltyReader + LoyaltyWriter + ?Sized,
{
    let mut record = load_record(repo, LoyaltyId::new(record_id)?)?;
    record.record_visit(date);

    repo.save_loyalty_record(&record).map_err(|err| {
        log::error!("Failed to save loyalty record {}: {err}", record.id);
        err
    })?;

    Ok(Notice::success(
        "Visita registrada!",
        format!("Visita adicionada para {}.", record.client),
    ))
}

/// Exchanges a completed card for a free haircut.
pub fn redeem_reward<R>(repo: &R, record_id: i32) -> ServiceResult<Notice>
where
    R: LoyaltyReader + LoyaltyWriter + ?Sized,
{
    let mut record = load_record(repo, LoyaltyId::new(record_id)?)?;

    if !record.redeem() {
        log::warn!(
            "{} tried to redeem with {} of {VISITS_PER_REWARD} visits",
            record.client,
            record.visits_count
        );
        return Err(ServiceError::Conflict(format!(
            "{} ainda não tem um corte grátis disponível",
            record.client
        )));
    }

    repo.save_loyalty_record(&record).map_err(|err| {
        log::error!("Failed to save loyalty record {}: {err}", record.id);
        err
    })?;

    Ok(Notice::success(
        "Cupom aplicado!",
        format!(
            "{} recebeu um corte grátis como recompensa de fidelidade.",
            record.client
        ),
    ))
}

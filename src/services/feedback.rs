//! Customer feedback panel: rating summary and responses.

use crate::domain::feedback::{Feedback, NewFeedback, ResponseStatus, Sentiment};
use crate::domain::types::FeedbackId;
use crate::dto::Notice;
use crate::dto::feedback::FeedbackPageData;
use crate::forms::feedback::AddFeedbackForm;
use crate::repository::{FeedbackReader, FeedbackWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::stats::{DistributionEntry, count_where, distribution, mean_by, round1};

/// Rating buckets as listed on the panel, best first.
const RATING_ORDER: [u8; 5] = [5, 4, 3, 2, 1];

pub fn rating_distribution(feedback: &[Feedback]) -> Vec<DistributionEntry<u8>> {
    distribution(feedback, &RATING_ORDER, |f| f.rating.get())
}

/// Mean rating rounded to one decimal; zero without feedback.
pub fn average_rating(feedback: &[Feedback]) -> f64 {
    round1(mean_by(feedback, |f| f64::from(f.rating.get())))
}

pub fn summarize_feedback(feedback: Vec<Feedback>) -> FeedbackPageData {
    let sentiment = |s: Sentiment| count_where(&feedback, |f| f.sentiment == s);

    FeedbackPageData {
        total: feedback.len(),
        average_rating: average_rating(&feedback),
        positive: sentiment(Sentiment::Positive),
        neutral: sentiment(Sentiment::Neutral),
        negative: sentiment(Sentiment::Negative),
        distribution: rating_distribution(&feedback),
        pending_responses: count_where(&feedback, |f| {
            f.response_status == ResponseStatus::Pending
        }),
        feedback,
    }
}

pub fn load_feedback<R>(repo: &R) -> ServiceResult<FeedbackPageData>
where
    R: FeedbackReader + ?Sized,
{
    let feedback = repo.list_feedback().map_err(|err| {
        log::error!("Failed to list feedback: {err}");
        err
    })?;

    Ok(summarize_feedback(feedback))
}

/// Registers feedback collected outside the app.
pub fn add_feedback<R>(repo: &R, form: AddFeedbackForm) -> ServiceResult<Notice>
where
    R: FeedbackWriter + ?Sized,
{
    let new_feedback = NewFeedback::try_from(form).map_err(|err| {
        log::warn!("Rejected feedback form: {err}");
        ServiceError::from(err)
    })?;

    let feedback = repo.create_feedback(&new_feedback).map_err(|err| {
        log::error!("Failed to add feedback: {err}");
        err
    })?;

    if feedback.rating.get() < 3 {
        log::info!("Low rating {} registered for {}", feedback.rating, feedback.barber);
    }

    Ok(Notice::success(
        "Avaliação registrada",
        "A avaliação foi registrada com sucesso.",
    ))
}

pub fn respond_to_feedback<R>(repo: &R, feedback_id: i32) -> ServiceResult<Notice>
where
    R: FeedbackWriter + ?Sized,
{
    let feedback_id = FeedbackId::new(feedback_id)?;

    repo.mark_feedback_responded(feedback_id).map_err(|err| {
        log::error!("Failed to respond to feedback {feedback_id}: {err}");
        err
    })?;

    Ok(Notice::success(
        "Resposta enviada",
        "Sua resposta foi enviada ao cliente.",
    ))
}

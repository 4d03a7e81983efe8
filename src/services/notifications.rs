//! Notifications card.

use crate::domain::types::NotificationId;
use crate::dto::Notice;
use crate::dto::notifications::NotificationsPageData;
use crate::repository::{NotificationReader, NotificationWriter};
use crate::services::ServiceResult;
use crate::stats::count_where;

pub fn load_notifications<R>(repo: &R) -> ServiceResult<NotificationsPageData>
where
    R: NotificationReader + ?Sized,
{
    let notifications = repo.list_notifications().map_err(|err| {
        log::error!("Failed to list notifications: {err}");
        err
    })?;

    Ok(NotificationsPageData {
        unread: count_where(&notifications, |n| !n.read),
        notifications,
    })
}

pub fn mark_as_read<R>(repo: &R, notification_id: i32) -> ServiceResult<Notice>
where
    R: NotificationWriter + ?Sized,
{
    let notification_id = NotificationId::new(notification_id)?;

    repo.mark_notification_read(notification_id).map_err(|err| {
        log::error!("Failed to mark notification {notification_id} as read: {err}");
        err
    })?;

    Ok(Notice::success(
        "Notificação marcada como lida",
        "A notificação foi marcada como lida com sucesso",
    ))
}

pub fn dismiss<R>(repo: &R, notification_id: i32) -> ServiceResult<Notice>
where
    R: NotificationWriter + ?Sized,
{
    let notification_id = NotificationId::new(notification_id)?;

    repo.dismiss_notification(notification_id).map_err(|err| {
        log::error!("Failed to dismiss notification {notification_id}: {err}");
        err
    })?;

    Ok(Notice::success(
        "Notificação removida",
        "A notificação foi removida com sucesso",
    ))
}

pub fn mark_all_as_read<R>(repo: &R) -> ServiceResult<Notice>
where
    R: NotificationWriter + ?Sized,
{
    let changed = repo.mark_all_notifications_read().map_err(|err| {
        log::error!("Failed to mark notifications as read: {err}");
        err
    })?;
    log::debug!("{changed} notifications marked as read");

    Ok(Notice::success(
        "Todas notificações lidas",
        "Todas as notificações foram marcadas como lidas",
    ))
}

//! In-memory notification set and the actions that mutate it.
//!
//! The list is owned by exactly one panel instance. Every mutation goes
//! through [`NotificationList::dispatch`], which reports whether anything
//! changed so the view layer only re-renders when it has to.

use crate::{
    filter::NotificationFilter,
    notification::{Notification, NotificationId, seed},
};

/// Mutations the user can apply to the notification set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAction {
    /// Flag a single notification as read.
    MarkAsRead(NotificationId),
    /// Flag every notification as read.
    MarkAllAsRead,
    /// Remove a notification from the set permanently.
    Delete(NotificationId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationList {
    notifications: Vec<Notification>,
}

impl NotificationList {
    /// Builds a list from the given records, keeping the first occurrence of
    /// any duplicated id.
    pub fn new(notifications: impl IntoIterator<Item = Notification>) -> Self {
        let mut list = Self::default();
        for notification in notifications {
            if list.get(notification.id).is_some() {
                log::warn!("Skipping duplicate notification id {}", notification.id);
                continue;
            }
            list.notifications.push(notification);
        }
        list
    }

    /// A list holding the hardcoded sample records.
    pub fn seeded() -> Self {
        Self::new(seed())
    }

    /// Applies an action. Returns `true` if the set changed; unknown ids and
    /// repeated actions are silent no-ops.
    pub fn dispatch(&mut self, action: NotificationAction) -> bool {
        let changed = match action {
            NotificationAction::MarkAsRead(id) => match self.position(id) {
                Some(index) if !self.notifications[index].read => {
                    self.notifications[index].read = true;
                    true
                }
                _ => false,
            },
            NotificationAction::MarkAllAsRead => {
                let mut changed = false;
                for notification in self.notifications.iter_mut().filter(|n| !n.read) {
                    notification.read = true;
                    changed = true;
                }
                changed
            }
            NotificationAction::Delete(id) => match self.position(id) {
                Some(index) => {
                    self.notifications.remove(index);
                    true
                }
                None => false,
            },
        };

        if changed {
            log::debug!("Applied {action:?}, {} unread left", self.unread_count());
        }
        changed
    }

    pub fn mark_as_read(&mut self, id: NotificationId) -> bool {
        self.dispatch(NotificationAction::MarkAsRead(id))
    }

    pub fn mark_all_as_read(&mut self) -> bool {
        self.dispatch(NotificationAction::MarkAllAsRead)
    }

    pub fn delete(&mut self, id: NotificationId) -> bool {
        self.dispatch(NotificationAction::Delete(id))
    }

    /// Records matching `filter`, in insertion order.
    pub fn filtered(&self, filter: NotificationFilter) -> impl Iterator<Item = &Notification> {
        self.notifications
            .iter()
            .filter(move |notification| filter.matches(notification))
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.notifications.iter().position(|n| n.id == id)
    }
}

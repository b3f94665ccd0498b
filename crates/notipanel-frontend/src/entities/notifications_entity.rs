use gpui::Context;
use notipanel_core::{NotificationAction, NotificationList};

/// Record set owned by a single notifications panel.
#[derive(Debug, Clone, Default)]
pub struct NotificationsEntity {
    pub list: NotificationList,
}

impl NotificationsEntity {
    /// A fresh entity holding the sample records.
    pub fn seeded() -> Self {
        Self {
            list: NotificationList::seeded(),
        }
    }

    /// Applies `action` and notifies observers if the set changed.
    pub fn apply(&mut self, action: NotificationAction, cx: &mut Context<Self>) -> bool {
        let changed = self.list.dispatch(action);
        if changed {
            cx.notify();
        }
        changed
    }
}

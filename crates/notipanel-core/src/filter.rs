use serde::{Deserialize, Serialize};

use crate::notification::Notification;

/// Subset of notifications displayed by the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFilter {
    /// Every notification, read or not. Default value.
    #[default]
    All,
    Unread,
    Read,
}

impl NotificationFilter {
    /// All filters in the order they are offered to the user.
    pub const ALL: [Self; 3] = [Self::All, Self::Unread, Self::Read];

    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.read,
            Self::Read => notification.read,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Unread => "Unread",
            Self::Read => "Read",
        }
    }

    /// Text shown in place of the list when nothing matches this filter.
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::All => "No notifications",
            Self::Unread => "No unread notifications",
            Self::Read => "No read notifications",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{Notification, NotificationType};

    #[test]
    fn matches_by_read_state() {
        let unread = Notification::new(1, NotificationType::Info, "a", "b");
        let read = unread.clone().read(true);

        assert!(NotificationFilter::All.matches(&unread));
        assert!(NotificationFilter::All.matches(&read));
        assert!(NotificationFilter::Unread.matches(&unread));
        assert!(!NotificationFilter::Unread.matches(&read));
        assert!(NotificationFilter::Read.matches(&read));
        assert!(!NotificationFilter::Read.matches(&unread));
    }

    #[test]
    fn empty_messages_depend_on_filter() {
        assert_eq!(NotificationFilter::All.empty_message(), "No notifications");
        assert_eq!(
            NotificationFilter::Unread.empty_message(),
            "No unread notifications"
        );
        assert_eq!(NotificationFilter::Read.empty_message(), "No read notifications");
    }
}

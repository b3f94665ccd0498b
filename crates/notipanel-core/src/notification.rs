/// Identifier of a notification record. Unique within a [`crate::list::NotificationList`].
pub type NotificationId = u32;

/// Severity or category for user-visible notifications.
///
/// This enum classifies notifications by their intent and visual styling,
/// allowing the UI to display them appropriately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates a non-critical issue that the user should be aware of, but
    /// does not prevent normal operation.
    Warning,
    /// Indicates an error or failure that may affect functionality.
    Error,
    /// Neutral informational message that does not indicate success or failure.
    /// Also used for any type name that is not recognized.
    #[default]
    Info,
}

impl NotificationType {
    /// Parses a lowercase type name. Unrecognized names fall back to
    /// [`NotificationType::Info`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            "info" => Self::Info,
            other => {
                log::trace!("Unknown notification type {other:?}, using info");
                Self::Info
            }
        }
    }
}

/// Importance attached to a notification. Stored with the record but not
/// consulted by the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    #[default]
    Normal,
    Medium,
    High,
}

/// A single alert entry shown in the notifications panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    /// The type/severity of the notification, determining its visual style.
    pub notification_type: NotificationType,
    pub title: String,
    /// The text content to display to the user.
    pub message: String,
    /// Relative display time, e.g. "2 min ago". Never parsed.
    pub time: String,
    pub read: bool,
    pub priority: Priority,
}

impl Notification {
    pub fn new(
        id: NotificationId,
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            notification_type,
            title: title.into(),
            message: message.into(),
            time: String::new(),
            read: false,
            priority: Priority::default(),
        }
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Seed table: id, type name, title, message, display time, read, priority.
const SEED: [(NotificationId, &str, &str, &str, &str, bool, Priority); 4] = [
    (
        1,
        "success",
        "Deployment completed",
        "Version 2.4.0 was deployed to production without errors.",
        "2 min ago",
        false,
        Priority::Normal,
    ),
    (
        2,
        "warning",
        "Storage almost full",
        "You have used 90% of your storage quota. Consider removing old files.",
        "1 hour ago",
        false,
        Priority::High,
    ),
    (
        3,
        "error",
        "Payment failed",
        "We could not charge your card ending in 4242. Please update your billing details.",
        "3 hours ago",
        true,
        Priority::High,
    ),
    (
        4,
        "info",
        "New feature available",
        "Dark mode is now available in the appearance settings.",
        "1 day ago",
        true,
        Priority::Medium,
    ),
];

/// The four records every freshly mounted panel starts with.
pub fn seed() -> Vec<Notification> {
    SEED.iter()
        .map(|&(id, kind, title, message, time, read, priority)| {
            Notification::new(id, NotificationType::from_name(kind), title, message)
                .time(time)
                .read(read)
                .priority(priority)
        })
        .collect()
}

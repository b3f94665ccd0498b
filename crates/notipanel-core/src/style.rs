//! UI-independent presentation tokens.
//!
//! The frontend resolves these against the active theme; keeping the lookup
//! here lets the mapping be tested without a window.

use crate::notification::{Notification, NotificationType};

/// Color role used for a notification's icon and tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Danger,
}

/// Glyph shown next to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Info,
    CircleCheck,
    TriangleAlert,
    CircleX,
}

/// Background of a notification row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    /// Plain panel background. Always used for read notifications.
    Neutral,
    /// Faint tint of the given tone.
    Tinted(Tone),
}

/// Resolved style for one notification type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeStyle {
    pub glyph: Glyph,
    pub tone: Tone,
}

impl NotificationType {
    pub fn style(&self) -> TypeStyle {
        let (glyph, tone) = match self {
            Self::Success => (Glyph::CircleCheck, Tone::Success),
            Self::Warning => (Glyph::TriangleAlert, Tone::Warning),
            Self::Error => (Glyph::CircleX, Tone::Danger),
            Self::Info => (Glyph::Info, Tone::Info),
        };
        TypeStyle { glyph, tone }
    }
}

impl Notification {
    pub fn background(&self) -> Background {
        if self.read {
            Background::Neutral
        } else {
            Background::Tinted(self.notification_type.style().tone)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_its_own_style() {
        let styles = [
            NotificationType::Success,
            NotificationType::Warning,
            NotificationType::Error,
            NotificationType::Info,
        ]
        .map(|kind| kind.style());

        assert_eq!(styles[0].tone, Tone::Success);
        assert_eq!(styles[1].glyph, Glyph::TriangleAlert);
        assert_eq!(styles[2].tone, Tone::Danger);
        assert_eq!(styles[3].glyph, Glyph::Info);
    }

    #[test]
    fn unknown_type_uses_info_style() {
        let kind = NotificationType::from_name("mystery");
        assert_eq!(kind.style(), NotificationType::Info.style());
    }

    #[test]
    fn read_notifications_are_neutral_regardless_of_type() {
        let unread = Notification::new(1, NotificationType::Error, "t", "m");
        assert_eq!(unread.background(), Background::Tinted(Tone::Danger));

        let read = unread.read(true);
        assert_eq!(read.background(), Background::Neutral);
    }
}

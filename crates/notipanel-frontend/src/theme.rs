//! Maps core presentation tokens onto the active `gpui-component` theme.

use gpui::{App, Hsla};
use gpui_component::{ActiveTheme, IconName};
use notipanel_core::style::{Background, Glyph, Tone};

/// Opacity of the tint behind unread notifications.
const TINT_OPACITY: f32 = 0.08;

pub fn icon_name(glyph: Glyph) -> IconName {
    match glyph {
        Glyph::Info => IconName::Info,
        Glyph::CircleCheck => IconName::CircleCheck,
        Glyph::TriangleAlert => IconName::TriangleAlert,
        Glyph::CircleX => IconName::CircleX,
    }
}

pub fn tone_color(tone: Tone, cx: &App) -> Hsla {
    let theme = cx.theme();
    match tone {
        Tone::Info => theme.info,
        Tone::Success => theme.success,
        Tone::Warning => theme.warning,
        Tone::Danger => theme.danger,
    }
}

pub fn background_color(background: Background, cx: &App) -> Hsla {
    match background {
        Background::Neutral => cx.theme().background,
        Background::Tinted(tone) => tone_color(tone, cx).opacity(TINT_OPACITY),
    }
}

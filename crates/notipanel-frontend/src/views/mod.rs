mod notifications_panel;

pub use notifications_panel::{NotificationsPanel, NotificationsPanelEvent};

use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, IconName, Root, StyledExt,
    button::{Button, ButtonVariants},
};
use notipanel_core::config::PanelConfig;

/// Application window contents: a header bar with the bell button and the
/// notifications panel it controls.
pub struct FrontendUi {
    title: SharedString,
    panel: Entity<NotificationsPanel>,
}

impl FrontendUi {
    pub fn new(config: &PanelConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let panel_open = config.open_on_start;
        let panel = cx.new(|cx| NotificationsPanel::new(config, panel_open, window, cx));

        cx.subscribe_in(
            &panel,
            window,
            |this, _, event: &NotificationsPanelEvent, _, cx| match event {
                NotificationsPanelEvent::OpenChange(open) => this.set_panel_open(*open, cx),
            },
        )
        .detach();
        // Keeps the unread badge on the bell in sync with the panel.
        cx.observe(&panel, |_, _, cx| cx.notify()).detach();

        Self {
            title: "notipanel".into(),
            panel,
        }
    }

    pub fn set_panel_open(&mut self, open: bool, cx: &mut Context<Self>) {
        log::debug!(
            "Notifications panel {}",
            if open { "opened" } else { "closed" }
        );
        self.panel.update(cx, |panel, cx| panel.set_open(open, cx));
        cx.notify();
    }
}

impl Render for FrontendUi {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notification_layer = Root::render_notification_layer(window, cx);
        let unread = {
            let panel = self.panel.read(cx);
            panel.unread_count(cx)
        };

        div()
            .relative()
            .flex()
            .flex_col()
            .size_full()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .px_4()
                    .py_2()
                    .border_b_1()
                    .border_color(cx.theme().border)
                    .child(div().child(self.title.clone()).font_bold())
                    .child(
                        Button::new("toggle_notifications")
                            .icon(IconName::Bell)
                            .ghost()
                            .when(unread > 0, |this| this.label(unread.to_string()))
                            .on_click(cx.listener(|this, _, _, cx| {
                                let open = !this.panel.read(cx).is_open();
                                this.set_panel_open(open, cx);
                            })),
                    ),
            )
            .child(
                div()
                    .p_5()
                    .size_full()
                    .text_color(cx.theme().muted_foreground)
                    .child("Use the bell to open your notifications."),
            )
            .child(self.panel.clone())
            .children(notification_layer)
    }
}

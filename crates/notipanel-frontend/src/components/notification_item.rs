use std::rc::Rc;

use gpui::{
    App, ClickEvent, IntoElement, ParentElement, SharedString, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
};
use notipanel_core::Notification;

use crate::theme::{background_color, icon_name, tone_color};

type ClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App)>;

/// One row of the notifications list.
#[derive(IntoElement)]
pub struct NotificationItem {
    notification: Notification,
    on_mark_read: Option<ClickHandler>,
    on_delete: Option<ClickHandler>,
}

impl NotificationItem {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            on_mark_read: None,
            on_delete: None,
        }
    }

    /// Handler for the "mark as read" button. The button is only shown while
    /// the notification is unread.
    pub fn on_mark_read(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_mark_read = Some(Rc::new(handler));
        self
    }

    pub fn on_delete(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_delete = Some(Rc::new(handler));
        self
    }
}

impl gpui::RenderOnce for NotificationItem {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let notification = self.notification;
        let id = notification.id;
        let read = notification.read;
        let style = notification.notification_type.style();
        let accent = tone_color(style.tone, cx);
        let background = background_color(notification.background(), cx);
        let muted = cx.theme().muted_foreground;

        let on_mark_read = self.on_mark_read.filter(|_| !read);

        div()
            .w_full()
            .flex()
            .items_start()
            .gap_3()
            .p_3()
            .rounded_md()
            .border_1()
            .border_color(cx.theme().border)
            .bg(background)
            .child(Icon::new(icon_name(style.glyph)).text_color(accent))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(div().text_sm().font_semibold().child(notification.title))
                            .when(!read, |this| {
                                this.child(div().size_2().rounded_full().bg(accent))
                            }),
                    )
                    .child(div().text_sm().text_color(muted).child(notification.message))
                    .child(div().text_xs().text_color(muted).child(notification.time)),
            )
            .child(
                div()
                    .flex()
                    .gap_1()
                    .when_some(on_mark_read, |this, handler| {
                        this.child(
                            Button::new(SharedString::from(format!("mark_read_{id}")))
                                .icon(IconName::Check)
                                .ghost()
                                .xsmall()
                                .tooltip("Mark as read")
                                .on_click(move |event, window, cx| handler(event, window, cx)),
                        )
                    })
                    .when_some(self.on_delete, |this, handler| {
                        this.child(
                            Button::new(SharedString::from(format!("delete_{id}")))
                                .icon(IconName::Delete)
                                .ghost()
                                .xsmall()
                                .tooltip("Delete")
                                .on_click(move |event, window, cx| handler(event, window, cx)),
                        )
                    }),
            )
    }
}

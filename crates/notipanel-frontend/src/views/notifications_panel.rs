use gpui::{
    AnyElement, App, AppContext, Context, Entity, EventEmitter, InteractiveElement, IntoElement,
    MouseButton, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
    div, prelude::FluentBuilder, px,
};
use gpui_component::{
    ActiveTheme, Disableable, Icon, IconName, IndexPath, Sizable, StyledExt, WindowExt,
    button::{Button, ButtonVariants},
    notification::{Notification as Toast, NotificationType as ToastType},
    select::{Select, SelectEvent, SelectItem, SelectState},
};
use notipanel_core::{
    Notification, NotificationAction, NotificationFilter, NotificationId, config::PanelConfig,
};

use crate::{
    components::notification_item::NotificationItem,
    entities::notifications_entity::NotificationsEntity,
};

/// Emitted when the panel wants its owner to open or close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationsPanelEvent {
    OpenChange(bool),
}

#[derive(Debug, Clone)]
struct FilterOption {
    label: SharedString,
    value: NotificationFilter,
}

impl FilterOption {
    fn new(value: NotificationFilter) -> Self {
        Self {
            label: value.label().into(),
            value,
        }
    }
}

impl SelectItem for FilterOption {
    type Value = NotificationFilter;

    fn title(&self) -> SharedString {
        self.label.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.value
    }
}

/// Dismissible panel listing the notifications with filter, read and delete
/// controls.
///
/// Visibility is controlled by the owner: the panel renders only while
/// [`NotificationsPanel::set_open`] was last called with `true`, and asks to
/// be closed by emitting [`NotificationsPanelEvent::OpenChange`].
pub struct NotificationsPanel {
    open: bool,
    title: SharedString,
    panel_width: f32,
    list_max_height: f32,
    filter: NotificationFilter,
    filter_select: Entity<SelectState<Vec<FilterOption>>>,
    notifications: Entity<NotificationsEntity>,
}

impl NotificationsPanel {
    pub fn new(
        config: &PanelConfig,
        open: bool,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let notifications = cx.new(|_| NotificationsEntity::seeded());
        cx.observe(&notifications, |_, _, cx| cx.notify()).detach();

        let filter = config.default_filter;
        let filter_select = cx.new(|cx| {
            let options: Vec<FilterOption> = NotificationFilter::ALL
                .into_iter()
                .map(FilterOption::new)
                .collect();
            let selected = NotificationFilter::ALL
                .iter()
                .position(|option| *option == filter);

            SelectState::new(options, selected.map(IndexPath::new), window, cx)
        });

        cx.subscribe_in(
            &filter_select,
            window,
            |this, _, event: &SelectEvent<Vec<FilterOption>>, _, cx| match event {
                SelectEvent::Confirm(value) => {
                    if let Some(filter) = value {
                        this.set_filter(*filter, cx);
                    }
                }
            },
        )
        .detach();

        Self {
            open,
            title: config.title.clone().into(),
            panel_width: config.panel_width,
            list_max_height: config.list_max_height,
            filter,
            filter_select,
            notifications,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool, cx: &mut Context<Self>) {
        if self.open != open {
            self.open = open;
            cx.notify();
        }
    }

    /// Asks the owner to change visibility. The panel itself stays as it is
    /// until [`Self::set_open`] is called.
    fn request_open_change(&mut self, open: bool, cx: &mut Context<Self>) {
        cx.emit(NotificationsPanelEvent::OpenChange(open));
    }

    pub fn filter(&self) -> NotificationFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: NotificationFilter, cx: &mut Context<Self>) {
        if self.filter != filter {
            log::debug!("Notification filter changed to {filter:?}");
            self.filter = filter;
            cx.notify();
        }
    }

    pub fn unread_count(&self, cx: &App) -> usize {
        self.notifications.read(cx).list.unread_count()
    }

    /// "Mark all as read" is only enabled while something is unread.
    pub fn can_mark_all_read(&self, cx: &App) -> bool {
        self.unread_count(cx) > 0
    }

    /// Records matching the active filter, in insertion order.
    pub fn visible_notifications(&self, cx: &App) -> Vec<Notification> {
        self.notifications
            .read(cx)
            .list
            .filtered(self.filter)
            .cloned()
            .collect()
    }

    fn apply(&mut self, action: NotificationAction, cx: &mut Context<Self>) -> bool {
        self.notifications
            .update(cx, |notifications, cx| notifications.apply(action, cx))
    }

    pub fn mark_as_read(&mut self, id: NotificationId, cx: &mut Context<Self>) {
        self.apply(NotificationAction::MarkAsRead(id), cx);
    }

    pub fn mark_all_as_read(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.apply(NotificationAction::MarkAllAsRead, cx) {
            window.push_notification(
                Toast::new()
                    .message("All notifications marked as read")
                    .with_type(ToastType::Success),
                cx,
            );
        }
    }

    pub fn delete(&mut self, id: NotificationId, window: &mut Window, cx: &mut Context<Self>) {
        if self.apply(NotificationAction::Delete(id), cx) {
            window.push_notification(
                Toast::new()
                    .message("Notification deleted")
                    .with_type(ToastType::Info),
                cx,
            );
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let unread = self.unread_count(cx);

        div()
            .flex()
            .items_center()
            .justify_between()
            .gap_2()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(div().child(self.title.clone()).text_lg().font_bold())
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!("{unread} unread")),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap_1()
                    .child(
                        Button::new("mark_all_read")
                            .icon(IconName::Check)
                            .label("Mark all as read")
                            .ghost()
                            .small()
                            .disabled(!self.can_mark_all_read(cx))
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.mark_all_as_read(window, cx);
                            })),
                    )
                    .child(
                        Button::new("close_notifications")
                            .icon(IconName::Close)
                            .ghost()
                            .small()
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.request_open_change(false, cx);
                            })),
                    ),
            )
    }

    fn render_list(&self, visible: Vec<Notification>, cx: &mut Context<Self>) -> impl IntoElement {
        let items: Vec<NotificationItem> = visible
            .into_iter()
            .map(|notification| {
                let id = notification.id;
                NotificationItem::new(notification)
                    .on_mark_read(cx.listener(move |this, _, _, cx| this.mark_as_read(id, cx)))
                    .on_delete(cx.listener(move |this, _, window, cx| {
                        this.delete(id, window, cx)
                    }))
            })
            .collect();

        div()
            .id("notification_list")
            .max_h(px(self.list_max_height))
            .overflow_y_scroll()
            .flex()
            .flex_col()
            .gap_2()
            .when_else(
                items.is_empty(),
                |this| {
                    this.child(
                        div()
                            .py_8()
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(Icon::new(IconName::Bell))
                            .child(self.filter.empty_message()),
                    )
                },
                |this| this.children(items),
            )
    }
}

impl EventEmitter<NotificationsPanelEvent> for NotificationsPanel {}

impl Render for NotificationsPanel {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !self.open {
            return div().into_any_element();
        }

        let visible = self.visible_notifications(cx);

        let panel: AnyElement = div()
            .absolute()
            .top(px(56.))
            .right(px(16.))
            .w(px(self.panel_width))
            .occlude()
            .flex()
            .flex_col()
            .gap_3()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().popover)
            .text_color(cx.theme().popover_foreground)
            .shadow_lg()
            .child(self.render_header(cx))
            .child(Select::new(&self.filter_select).w_full())
            .child(self.render_list(visible, cx))
            .into_any_element();

        div()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .size_full()
                    .bg(cx.theme().overlay)
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, _, cx| this.request_open_change(false, cx)),
                    ),
            )
            .child(panel)
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use gpui::{Entity, TestAppContext, VisualTestContext};
    use notipanel_core::config::PanelConfig;

    use super::*;

    fn init(cx: &mut TestAppContext) -> &mut VisualTestContext {
        cx.update(gpui_component::init);
        cx.add_empty_window()
    }

    fn build_panel(open: bool, cx: &mut VisualTestContext) -> Entity<NotificationsPanel> {
        cx.update(|window, cx| {
            cx.new(|cx| NotificationsPanel::new(&PanelConfig::default(), open, window, cx))
        })
    }

    fn visible_ids(
        panel: &Entity<NotificationsPanel>,
        cx: &mut VisualTestContext,
    ) -> Vec<NotificationId> {
        panel.read_with(cx, |panel, cx| {
            panel
                .visible_notifications(cx)
                .iter()
                .map(|notification| notification.id)
                .collect()
        })
    }

    #[gpui::test]
    fn close_request_only_emits_event(cx: &mut TestAppContext) {
        let cx = init(cx);
        let panel = build_panel(true, cx);

        let events = Rc::new(RefCell::new(Vec::new()));
        cx.update(|_, cx| {
            let events = events.clone();
            cx.subscribe(&panel, move |_, event: &NotificationsPanelEvent, _| {
                events.borrow_mut().push(*event);
            })
            .detach();
        });

        panel.update(cx, |panel, cx| panel.request_open_change(false, cx));
        cx.run_until_parked();

        assert_eq!(
            *events.borrow(),
            vec![NotificationsPanelEvent::OpenChange(false)]
        );
        assert!(panel.read_with(cx, |panel, _| panel.is_open()));

        panel.update(cx, |panel, cx| panel.set_open(false, cx));
        assert!(!panel.read_with(cx, |panel, _| panel.is_open()));
    }

    #[gpui::test]
    fn mark_as_read_lowers_unread_count(cx: &mut TestAppContext) {
        let cx = init(cx);
        let panel = build_panel(false, cx);
        assert_eq!(panel.read_with(cx, |panel, cx| panel.unread_count(cx)), 2);

        panel.update(cx, |panel, cx| panel.mark_as_read(2, cx));
        assert_eq!(panel.read_with(cx, |panel, cx| panel.unread_count(cx)), 1);

        // Unknown ids leave the set alone.
        panel.update(cx, |panel, cx| panel.mark_as_read(99, cx));
        assert_eq!(panel.read_with(cx, |panel, cx| panel.unread_count(cx)), 1);
    }

    #[gpui::test]
    fn mark_all_disabled_once_everything_is_read(cx: &mut TestAppContext) {
        let cx = init(cx);
        let panel = build_panel(false, cx);
        assert!(panel.read_with(cx, |panel, cx| panel.can_mark_all_read(cx)));

        panel.update(cx, |panel, cx| {
            panel.mark_as_read(1, cx);
            panel.mark_as_read(2, cx);
        });
        assert!(!panel.read_with(cx, |panel, cx| panel.can_mark_all_read(cx)));

        // Nothing changes, so no toast is pushed and no root view is needed.
        cx.update(|window, cx| {
            panel.update(cx, |panel, cx| panel.mark_all_as_read(window, cx));
        });
        assert_eq!(panel.read_with(cx, |panel, cx| panel.unread_count(cx)), 0);
        assert_eq!(visible_ids(&panel, cx), vec![1, 2, 3, 4]);
    }

    #[gpui::test]
    fn filter_drives_visible_subset_and_empty_state(cx: &mut TestAppContext) {
        let cx = init(cx);
        let panel = build_panel(false, cx);
        assert_eq!(
            panel.read_with(cx, |panel, _| panel.filter()),
            NotificationFilter::All
        );

        panel.update(cx, |panel, cx| panel.set_filter(NotificationFilter::Unread, cx));
        assert_eq!(visible_ids(&panel, cx), vec![1, 2]);

        panel.update(cx, |panel, cx| panel.set_filter(NotificationFilter::Read, cx));
        assert_eq!(visible_ids(&panel, cx), vec![3, 4]);

        panel.update(cx, |panel, cx| {
            panel.mark_as_read(1, cx);
            panel.mark_as_read(2, cx);
            panel.set_filter(NotificationFilter::Unread, cx);
        });
        assert!(visible_ids(&panel, cx).is_empty());
        assert_eq!(
            panel.read_with(cx, |panel, _| panel.filter().empty_message()),
            "No unread notifications"
        );

        panel.update(cx, |panel, cx| panel.set_filter(NotificationFilter::All, cx));
        assert_eq!(visible_ids(&panel, cx), vec![1, 2, 3, 4]);
    }

    #[gpui::test]
    fn new_panel_starts_from_seed(cx: &mut TestAppContext) {
        let cx = init(cx);
        let first = build_panel(false, cx);
        first.update(cx, |panel, cx| {
            panel.mark_as_read(1, cx);
            panel.mark_as_read(2, cx);
        });
        assert_eq!(first.read_with(cx, |panel, cx| panel.unread_count(cx)), 0);

        let second = build_panel(false, cx);
        assert_eq!(visible_ids(&second, cx), vec![1, 2, 3, 4]);
        assert_eq!(second.read_with(cx, |panel, cx| panel.unread_count(cx)), 2);
    }
}

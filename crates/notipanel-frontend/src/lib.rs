//! gpui frontend for the notifications panel.
//!
//! [`run`] opens a single window hosting [`views::FrontendUi`], which owns a
//! [`views::NotificationsPanel`] and toggles it from a bell button.

use gpui::{AppContext, Application, WindowOptions};
use gpui_component::Root;
use notipanel_core::config::PanelConfig;

pub mod components;
pub mod entities;
pub mod theme;
pub mod views;

pub fn run(config: PanelConfig) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                log::info!("Opening notifications window");
                let view = cx.new(|cx| crate::views::FrontendUi::new(&config, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}

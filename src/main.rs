mod config;

fn main() {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let config = config::load_config().unwrap_or_else(|err| {
        log::warn!("Using default configuration: {err}");
        notipanel_core::config::PanelConfig::default()
    });

    notipanel_frontend::run(config).expect("failed to run frontend");
}

mod app;
mod config;
mod effects;
mod logging;
mod ui;

use pantry_logging::ui_info;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let config = config::ApiConfig::from_env();
    ui_info!("starting; recommendation api at {}", config.base_url);

    let mut app = app::App::new(config);
    app.run()
}

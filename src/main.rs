use anyhow::Context;
use env_logger::Builder;
use log::{LevelFilter, info};
use std::path::Path;

use entity_count_plot::config::{CONFIG_FILE_NAME, PlotterConfig};
use entity_count_plot::pipeline;
use entity_count_plot::ui::NativeWindow;

fn main() -> anyhow::Result<()> {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("entity_count_plot"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    info!("Starting up");

    let config = PlotterConfig::load_or_default(Path::new(CONFIG_FILE_NAME)).context("Failed to load settings")?;

    let mut window = NativeWindow::new(config.clone());
    pipeline::run(&config, &mut window)
}

mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use shotlens_core::config::ViewerConfig;

/// Optional config file read at startup.
const CONFIG_ENV: &str = "SHOTLENS_CONFIG";

fn load_config() -> ViewerConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return ViewerConfig::default();
    };
    match ViewerConfig::load(std::path::Path::new(&path)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring {CONFIG_ENV}: {e}");
            ViewerConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Shotlens"),
        ..Default::default()
    };

    eframe::run_native(
        "Shotlens",
        options,
        Box::new(|cc| Ok(Box::new(app::ShotlensApp::new(&cc.egui_ctx, config)?))),
    )
}

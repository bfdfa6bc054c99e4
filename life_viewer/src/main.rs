// main.rs - Desktop viewer for the sparse Game of Life grid

use eframe::egui;
use life::LifeConfig;

mod app;
mod ui;

use app::LifeApp;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> Result<(), eframe::Error> {
    // Load .env locally; fine when there is none.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = match LifeConfig::load_or_default() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "bad config, using defaults");
            LifeConfig::default()
        }
    };
    tracing::info!(?config, "starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window),
        ..Default::default()
    };

    eframe::run_native(
        "Sparse Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(&config))),
    )
}

// GameLog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Log store construction and eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use gamelog::app;
pub use gamelog::core;
pub use gamelog::platform;
pub use gamelog::ui;
pub use gamelog::util;

use clap::Parser;
use std::path::PathBuf;

/// GameLog - immediate-mode GUI demo with an in-process game log.
///
/// Buttons in the Game Control window append entries; the Game Log window
/// filters, clears, saves, and copies them.
#[derive(Parser, Debug)]
#[command(name = "GameLog", version, about)]
struct Cli {
    /// Initial log window filter: info, warning, or all.
    #[arg(short = 'f', long = "filter-level")]
    filter_level: Option<core::filter::FilterLevel>,

    /// File written by "Save To File".
    #[arg(short = 'o', long = "save-file")]
    save_file: Option<PathBuf>,

    /// Do not mirror log entries to stdout.
    #[arg(long = "no-console")]
    no_console: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before tracing exists so its [logging] section can
    // configure the subscriber; warnings are reported once it is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %platform_paths.config_file().display(),
        "GameLog starting"
    );

    // CLI overrides config.
    let filter_level = cli.filter_level.unwrap_or(config.filter_level);
    let save_path = cli.save_file.unwrap_or(config.save_file);
    let console_mirror = config.console_mirror && !cli.no_console;

    let mut log = core::store::LogStore::new();
    if console_mirror {
        log.add_sink(core::sink::ConsoleSink);
    }

    let mut state = app::state::AppState::new(log, filter_level, save_path, cli.debug);
    state.start_up();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_SIZE)
            .with_min_inner_size(util::constants::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode);
            Ok(Box::new(gui::GameLogApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch GameLog GUI: {e}");
        std::process::exit(1);
    }
}

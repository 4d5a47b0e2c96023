// icongen - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing (no options; stray arguments are rejected)
// 2. Logging initialisation
// 3. Icon emission to the default output location

use clap::Parser;
use icongen::{app, util};

/// icongen - one-shot generator for the application's SVG icon.
///
/// Writes the fixed 1024x1024 icon document to
/// `<exe-dir>/../src-tauri/icons/icon.svg` and prints the manual steps for
/// converting it to PNG and bundling the platform icon set.
#[derive(Parser, Debug)]
#[command(name = "icongen", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    util::logging::init();

    tracing::info!(version = util::constants::APP_VERSION, "icongen starting");

    let result = app::emit::default_output_dir().and_then(|dir| app::emit::run(&dir));

    if let Err(e) = result {
        tracing::error!(error = %e, "Icon generation failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! Command-line entry point for the Icon Renderer.
//!
//! With no arguments this renders the 1024px app icon to the conventional
//! asset path, overwriting whatever is there. The output path, size, and
//! layout profile can all be overridden.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use nutrigen::{IconProfile, IconRenderer};

const DEFAULT_OUTPUT: &str = "assets/AppIcon.appiconset/icon_1024.png";

#[derive(Parser)]
#[command(name = "app-icon", about = "Procedurally render the app icon")]
struct Cli {
    /// Where to write the rendered PNG
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Canvas edge length in pixels (defaults to the profile's size)
    #[arg(long)]
    size: Option<u32>,

    /// JSON profile overriding the default layout colors
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,
}

fn main() -> ExitCode {
    let _logger = nutrigen::logging::init_logging();
    let cli = Cli::parse();

    let mut profile = match load_profile(&cli) {
        Ok(profile) => profile,
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(size) = cli.size {
        profile.size = size;
    }

    println!("Generating app icon...");
    println!("Output: {}", cli.output.display());

    let renderer = IconRenderer::new(profile);
    match renderer.render_to_file(&cli.output) {
        Ok(()) => {
            println!("App icon created: {}", cli.output.display());
            println!("   Size: {size}x{size}px", size = renderer.profile().size);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_profile(cli: &Cli) -> Result<IconProfile, String> {
    match &cli.profile {
        None => Ok(IconProfile::default()),
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|err| format!("cannot read profile '{}': {err}", path.display()))?;
            IconProfile::from_json(&json)
                .map_err(|err| format!("invalid profile '{}': {err}", path.display()))
        }
    }
}

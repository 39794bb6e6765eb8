//! Direct3DLib CLI tool using the safe Rust API

use clap::{Parser, Subcommand};
use d3d9rs::{DummyWindow, parse_version_token, validate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "d3d9rs")]
#[command(about = "Direct3D 9 shader blob tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show kind, version and size of a compiled shader blob
    Info {
        /// Input blob file (e.g. VS_DiffuseOpaque.o)
        input: PathBuf,
    },

    /// Validate the token-stream shape of a compiled shader blob
    Check {
        /// Input blob file
        input: PathBuf,
    },

    /// Create and destroy a hidden device-anchor window
    Window,
}

fn shader_info(input: PathBuf) -> Result<(), String> {
    let bytes =
        std::fs::read(&input).map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let (kind, version) = parse_version_token(&bytes).map_err(|e| format!("{}", e))?;

    println!("Shader: {}_{}_{}", kind.prefix(), version.major, version.minor);
    println!("Size: {} bytes ({} tokens)", bytes.len(), bytes.len() / 4);

    Ok(())
}

fn check_shader(input: PathBuf) -> Result<(), String> {
    let bytes =
        std::fs::read(&input).map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let (kind, version) = validate(&bytes)
        .map_err(|e| format!("{}: {}", input.display(), e))?;

    eprintln!(
        "{}: ok ({}_{}_{}, {} tokens)",
        input.display(),
        kind.prefix(),
        version.major,
        version.minor,
        bytes.len() / 4
    );

    Ok(())
}

fn window_test() -> Result<(), String> {
    let window = DummyWindow::new().map_err(|e| format!("{}", e))?;
    println!("Created hidden window {:p}", window.hwnd());
    drop(window);
    eprintln!("Window destroyed");

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { input } => shader_info(input),
        Commands::Check { input } => check_shader(input),
        Commands::Window => window_test(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

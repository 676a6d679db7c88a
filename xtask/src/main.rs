//! Build automation tasks for roomplan
//!
//! Usage:
//!   cargo xtask build-web         # Build WASM bundle into dist/web
//!   cargo xtask package-native    # Release binary plus sample config in dist/native

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BIN_NAME: &str = "roomplan";
const MQ_JS_BUNDLE: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

/// Minimal loader page for the macroquad WASM build
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>roomplan</title>
    <style>
        html, body, canvas { margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; background: #1c1c21; }
    </style>
</head>
<body>
    <canvas id="glcanvas" tabindex="1"></canvas>
    <script src="mq_js_bundle.js"></script>
    <script>load("roomplan.wasm");</script>
</body>
</html>
"#;

/// Sample config shipped next to native builds
const SAMPLE_CONFIG: &str = r#"(
    room_size: 20.0,
    tile_count: 15,
    wall_height: 3.0,
    pan_speed: 0.3,
    window_width: 1024,
    window_height: 768,
    color_seed: None,
)
"#;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for roomplan")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb {
        /// Mark as dev build (adds DEV to the page title)
        #[arg(long)]
        dev: bool,
    },
    /// Build a native release into dist/native
    PackageNative,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::PackageNative => package_native(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(Command::new("curl").args(["-L", "-o"]).arg(dest).arg(url))
}

/// Remove and recreate an output directory
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir).with_context(|| format!("removing {}", dir.display()))?;
    }
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(())
}

/// Build WASM for web deployment
fn build_web(dev: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown"]),
    )?;

    fresh_dir(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", BIN_NAME);
    std::fs::copy(root.join("target/wasm32-unknown-unknown/release").join(&wasm), dist.join(&wasm))
        .context("copying wasm binary")?;

    let index = if dev {
        println!("Applying DEV build modifications...");
        INDEX_HTML.replace("<title>roomplan", "<title>[DEV] roomplan")
    } else {
        INDEX_HTML.to_string()
    };
    std::fs::write(dist.join("index.html"), index)?;

    download_file(MQ_JS_BUNDLE, &dist.join("mq_js_bundle.js"))?;

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Build a native release with a sample config
fn package_native() -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/native");

    println!("Building native release...");
    run_cmd(Command::new("cargo").current_dir(&root).args(["build", "--release"]))?;

    fresh_dir(&dist)?;

    let binary = if cfg!(target_os = "windows") {
        format!("{}.exe", BIN_NAME)
    } else {
        BIN_NAME.to_string()
    };
    std::fs::copy(root.join("target/release").join(&binary), dist.join(&binary))
        .context("copying release binary")?;
    std::fs::write(dist.join("roomplan.ron"), SAMPLE_CONFIG)?;

    println!("Native build complete: dist/native/");
    Ok(())
}

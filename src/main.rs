use anyhow::Context;
use clap::{ArgAction, Parser};
use scratchpad::export::save_snapshot;
use scratchpad::loader::ImageLoader;
use scratchpad::{Config, Draw};
use std::fs;
use std::path::PathBuf;

mod script;

#[derive(Parser, Debug)]
#[command(name = "scratchpad")]
#[command(version, about = "Freehand drawing surface with a background-restoring eraser")]
struct Cli {
    /// Replay pointer events from a script file
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the resulting PNG here instead of the snapshot directory
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Read settings from this file instead of ~/.config/scratchpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Background image (path or file:// URL), overriding the config
    #[arg(long, short = 'b', value_name = "IMAGE")]
    background: Option<String>,

    /// Frame the exported image with the configured border
    #[arg(long, action = ArgAction::SetTrue)]
    border: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        // No script: show usage
        println!("scratchpad: Freehand drawing surface with a background-restoring eraser");
        println!();
        println!("Usage:");
        println!("  scratchpad --script strokes.txt --output drawing.png");
        println!("  scratchpad --help      Show help");
        println!();
        println!("Script commands (one per line, # starts a comment):");
        println!("  press X Y | move X Y | release    mouse events");
        println!("  touch press X Y | touch move X Y  touch events");
        println!("  ... outside                       event seen outside the surface");
        println!("  eraser                            toggle erase mode");
        println!("  layout LEFT TOP WIDTH HEIGHT      on-screen placement of the surface");
        println!("  repaint                           wipe all strokes");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(background) = cli.background {
        config.background.image = Some(background);
    }

    let source = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let steps = script::parse(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;
    log::info!("Replaying {} commands from {}", steps.len(), script_path.display());

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let loader = ImageLoader::new(runtime.handle());
    let mut draw = Draw::new(config.to_options(), &loader)?;
    let state = runtime.block_on(draw.background_ready())?;
    log::debug!("Background state: {:?}", state);

    script::replay(&mut draw, &steps)?;

    let include_border = cli.border || config.export.include_border;
    let png = draw.snapshot_png(include_border)?;

    let saved = match cli.output {
        Some(path) => {
            fs::write(&path, &png)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path
        }
        None => save_snapshot(&png, &config.snapshot_config())?,
    };

    println!("Saved drawing to {}", saved.display());
    Ok(())
}

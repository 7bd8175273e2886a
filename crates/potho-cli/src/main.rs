mod output;
mod tui;

use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use potho_config::{Config, OutputFormat};
use potho_render::{
    Theme, render_str,
    transcript::{parse_payload, parse_transcript, render_pointer, render_transcript},
};

use output::Rendered;

/// Render AI reply text (bullets, **bold**, $math$) for display.
#[derive(Debug, Parser)]
#[command(name = "potho-cli", version)]
struct Cli {
    /// File to read; stdin when omitted
    file: Option<PathBuf>,

    /// Output format: text, html, json or tui
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Treat input as JSON and render the string at this pointer (e.g. /analysis)
    #[arg(short, long, conflicts_with = "transcript")]
    pointer: Option<String>,

    /// Treat input as a JSON array of {"sender", "text"} chat messages
    #[arg(short, long)]
    transcript: bool,

    /// Override the configured theme: light or dark
    #[arg(long)]
    theme: Option<Theme>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::info!("Config path: {}", config_path.display());
    let loaded = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    let mut config = loaded
        .context("Failed to load config file")?
        .unwrap_or_else(|| {
            log::debug!("No config file found, using defaults");
            Config::default()
        });
    if let Some(theme) = cli.theme {
        config.set_theme(theme);
    }

    let input = read_input(&cli)?;
    let rendered = render_input(&cli, &input)?;
    log::debug!("Rendered {} blocks", rendered.block_count());

    let format = cli.format.unwrap_or(config.format);
    let options = config.render_options();
    match format {
        OutputFormat::Text => print!("{}", output::to_text(&rendered, &options)),
        OutputFormat::Html => print!("{}", output::to_html(&rendered, &options)),
        OutputFormat::Json => {
            println!("{}", output::to_json(&rendered).context("Failed to serialize output")?)
        }
        OutputFormat::Tui => tui::run(rendered, config, config_path)?,
    }

    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn render_input(cli: &Cli, input: &str) -> Result<Rendered> {
    if cli.transcript {
        let messages = parse_transcript(input)?;
        return Ok(Rendered::Transcript(render_transcript(&messages)));
    }
    if let Some(pointer) = &cli.pointer {
        let payload = parse_payload(input)?;
        return Ok(Rendered::Text(render_pointer(&payload, pointer)));
    }
    Ok(Rendered::Text(render_str(input)))
}

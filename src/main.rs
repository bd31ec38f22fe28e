//! FigLogo - FIGlet-style ASCII art logos from the command line
//!
//! ```text
//!   _____ _       _
//!  |  ___(_) __ _| |    ___   __ _  ___
//!  | |_  | |/ _` | |   / _ \ / _` |/ _ \
//!  |  _| | | (_| | |__| (_) | (_| | (_) |
//!  |_|   |_|\__, |_____\___/ \__, |\___/
//!           |___/            |___/
//! ```

use base64::Engine;
use clap::Parser;
use figlogo_config::ConfigManager;
use figlogo_core::{
    ArtGenerator, FontCatalog, FontResolver, GenerationError, ImageExporter, RenderSession,
};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// FigLogo - turn text into ASCII art logos
#[derive(Parser, Debug)]
#[command(name = "figlogo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to render
    text: Option<String>,

    /// Font to render with
    #[arg(short = 'f', long)]
    font: Option<String>,

    /// Pick a random font instead
    #[arg(short = 'r', long)]
    random: bool,

    /// Save the logo as an image (format from the extension, PNG by default)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Copy the logo to the clipboard
    #[arg(long)]
    copy: bool,

    /// List available fonts and exit
    #[arg(long)]
    list_fonts: bool,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    // Set up logging; stdout is reserved for the art itself
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("figlogo={}", log_level)),
        ))
        .init();

    tracing::debug!("Starting FigLogo v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(&args) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let manager = ConfigManager::load(args.config.as_deref())?;
    if args.write_config {
        manager.save()?;
        println!("Configuration written to {}", manager.path().display());
        return Ok(());
    }
    let config = manager.config();

    let catalog = figlogo_core::init(&config.render.font_dirs)?;
    if args.list_fonts {
        for name in catalog.available_fonts() {
            println!("{}", name);
        }
        return Ok(());
    }

    let requested = args
        .font
        .as_deref()
        .unwrap_or(config.render.default_font.as_str());
    let session = render(
        &catalog,
        args.text.as_deref().unwrap_or(""),
        requested,
        args.random,
    )?;
    if let Some(rendering) = session.current() {
        println!("{}", rendering.logo);
        println!("Selected Font: {}", rendering.font);
    }

    if args.copy {
        let escape = osc52(session.copy_text()?);
        match clipboard_target(std::io::stdout().is_terminal(), std::io::stderr().is_terminal()) {
            Some(ClipboardTarget::Stdout) => {
                let mut stdout = std::io::stdout();
                stdout.write_all(escape.as_bytes())?;
                stdout.flush()?;
                println!("Logo copied to clipboard!");
            }
            Some(ClipboardTarget::Stderr) => {
                let mut stderr = std::io::stderr();
                stderr.write_all(escape.as_bytes())?;
                stderr.flush()?;
                eprintln!("Logo copied to clipboard!");
            }
            None => {
                tracing::warn!("No terminal attached, clipboard escape not sent");
                eprintln!("Logo not copied: no terminal to receive it");
            }
        }
    }

    if let Some(ref output) = args.output {
        let exporter = ImageExporter::new(config.export.to_export_settings()?);
        let report = session.export(&exporter, output)?;
        println!(
            "Logo successfully saved as {} ({}x{})",
            report.path.display(),
            report.width,
            report.height
        );
    }

    Ok(())
}

/// Generate `text` in the requested font and commit it to a fresh session.
/// Empty text is reported before the font is looked at.
fn render<C: FontCatalog + ?Sized>(
    catalog: &C,
    text: &str,
    font: &str,
    random: bool,
) -> anyhow::Result<RenderSession> {
    if text.is_empty() {
        return Err(GenerationError::EmptyInput.into());
    }
    let font = FontResolver::new(catalog).resolve(font, random)?;
    let logo = ArtGenerator::new(catalog).generate(text, &font)?;

    let mut session = RenderSession::new();
    session.commit(logo, font);
    Ok(session)
}

/// Stream that receives the OSC 52 escape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardTarget {
    Stdout,
    Stderr,
}

/// The escape only means something to a terminal; redirected output must stay plain
fn clipboard_target(
    stdout_is_terminal: bool,
    stderr_is_terminal: bool,
) -> Option<ClipboardTarget> {
    if stdout_is_terminal {
        Some(ClipboardTarget::Stdout)
    } else if stderr_is_terminal {
        Some(ClipboardTarget::Stderr)
    } else {
        None
    }
}

/// Terminal escape that asks the emulator to put `text` on the clipboard
fn osc52(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", payload)
}

//! Command‑line entry point for the `hpaint` tool.
//!
//! Without a subcommand it opens the demo window. The other subcommands render
//! the same scene headless or print a curve's step trace.

use std::{
    fmt::Display,
    io::{self, BufWriter},
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use hilbertpaint::curve::MAX_ORDER;
use log::info;

/// CLI command implementations.
mod cmd;

#[derive(Parser)]
#[command(name = "hpaint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute; opens the window when omitted.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
/// Subcommands supported by the `hpaint` tool.
enum Commands {
    #[command(about = "Open the animation window (default)")]
    /// Open the animation window.
    Gui {
        #[arg(long = "dev", help = "Show frame timing and live curve count")]
        /// Enable the developer overlay.
        dev: bool,
    },

    #[command(about = "Render the finished scene to a PNG without opening a window")]
    /// Render the finished scene headless.
    Render {
        #[arg(long = "seed", help = "Seed for segment colours (random when omitted)")]
        /// Optional colour seed.
        seed: Option<u64>,

        #[arg(help = "Output PNG file path")]
        /// Output file path.
        output: PathBuf,
    },

    #[command(about = "Print the step trace of a single curve")]
    /// Print every step of one curve at the origin.
    Steps {
        #[arg(
            long = "order",
            default_value_t = 2,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_ORDER)),
            help = "Curve order"
        )]
        /// Curve order.
        order: u32,

        #[arg(long = "seed", default_value_t = 0, help = "Seed for segment colours")]
        /// Colour seed.
        seed: u64,
    },
}

/// Print a success message or exit with an error and its causes.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => {
            if !ok_msg.is_empty() {
                println!("{ok_msg}");
            }
        }
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Install the logger. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_micros()
        .init();
}

/// Handle the `gui` subcommand.
fn handle_gui(dev: bool) -> Result<()> {
    hpaint_gui::gui_with_options(hpaint_gui::GuiOptions {
        show_dev_overlay: dev,
    })
}

/// Handle the `render` subcommand.
fn handle_render(seed: Option<u64>, output: &Path) -> Result<()> {
    let image = cmd::render(seed)?;
    image.save(output)?;
    info!("wrote {}", output.display());
    Ok(())
}

/// Handle the `steps` subcommand.
fn handle_steps(order: u32, seed: u64) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    let written = cmd::write_steps(order, seed, &mut out)?;
    info!("printed {written} steps");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command.unwrap_or(Commands::Gui { dev: false }) {
        Commands::Gui { dev } => report_ok(handle_gui(dev), ""),
        Commands::Render { seed, output } => report_ok(handle_render(seed, &output), "OK!"),
        Commands::Steps { order, seed } => report_ok(handle_steps(order, seed), ""),
    }
}

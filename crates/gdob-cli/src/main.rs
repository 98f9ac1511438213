//! `gdob` CLI — convert between outline notes and GDevelop JSON variables.
//!
//! ## Usage
//!
//! ```sh
//! # Outline (e.g. an Obsidian note) to pretty-printed JSON (stdin → stdout)
//! printf -- '- Level: #5\n- Name: Alice' | gdob to-json
//!
//! # From file to file, minified
//! gdob to-json -i scenario.md -o scenario.json --compact
//!
//! # JSON back to outline text
//! gdob to-outline -i scenario.json
//!
//! # Boundary mode: always succeeds, prints the error sentinel on failure
//! gdob convert --direction to-json -i scenario.md
//!
//! # Debug logging on stderr (or set GDOB_LOG=debug)
//! gdob -vv to-json -i scenario.md
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use gdob_core::{Direction, JsonStyle, Options, DEFAULT_MAX_DEPTH};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `gdob_core=trace`.
const LOG_ENV: &str = "GDOB_LOG";

#[derive(Parser)]
#[command(
    name = "gdob",
    version,
    about = "Convert between outline notation and GDevelop JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum container nesting accepted in either direction
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert outline text to JSON
    ToJson {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Convert JSON back to outline text
    ToOutline {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert in the given direction, writing the error sentinel instead of failing
    Convert {
        /// `to-json` or `to-outline`
        #[arg(short, long)]
        direction: Direction,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut options = Options {
        max_depth: cli.max_depth,
        ..Options::default()
    };

    match cli.command {
        Commands::ToJson {
            input,
            output,
            compact,
        } => {
            options.json_style = json_style(compact);
            let text = read_input(input.as_deref())?;
            let json = gdob_core::to_json_with(&text, &options).map_err(|err| {
                anyhow::Error::new(err).context(Direction::ToJson.sentinel())
            })?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::ToOutline { input, output } => {
            let json = read_input(input.as_deref())?;
            let text = gdob_core::to_outline_with(&json, &options).map_err(|err| {
                anyhow::Error::new(err).context(Direction::ToOutline.sentinel())
            })?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Convert {
            direction,
            input,
            output,
            compact,
        } => {
            options.json_style = json_style(compact);
            let text = read_input(input.as_deref())?;
            let converted = gdob_core::convert(&text, direction, &options);
            write_output(output.as_deref(), &converted)?;
        }
    }

    Ok(())
}

fn json_style(compact: bool) -> JsonStyle {
    if compact {
        JsonStyle::Compact
    } else {
        JsonStyle::Pretty
    }
}

/// Install the stderr log subscriber. `GDOB_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
            tracing::info!(path, bytes = content.len(), "output written");
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

//! Tint CLI
//!
//! Stands in for the app boot path: reads the theme record the admin panel
//! would fetch from its theme endpoint, applies it, and prints the
//! resulting style variables. Also exposes the color math for inspection.
//!
//! Logs go to stderr so stdout stays a clean stylesheet.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tint_theme::RampBinding;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use commands::{BindingArg, OutputFormat};

/// Derive brand shade ramps and CSS variables from a theme record
#[derive(Parser, Debug)]
#[command(name = "tint")]
#[command(about = "Derive brand shade ramps and CSS variables from a theme record")]
#[command(version)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply a theme record (JSON or TOML, `-` for stdin) and print the variables
    Apply {
        /// Theme record file
        file: PathBuf,

        /// How ramp entries bind to weight slots
        #[arg(long, value_enum, default_value_t = BindingArg::Reference)]
        binding: BindingArg,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,
    },

    /// Print the shade ramp derived from a seed color
    Shades {
        /// Seed color (#RGB or #RRGGBB)
        hex: String,

        /// Lightness steps in percent, comma separated (defaults to the binding's steps)
        #[arg(long, value_delimiter = ',')]
        steps: Option<Vec<f64>>,

        /// Binding whose steps are used when --steps is not given
        #[arg(long, value_enum, default_value_t = BindingArg::Reference)]
        binding: BindingArg,
    },

    /// Show the RGB and HSL readings of a hex color
    Convert {
        /// Color (#RGB or #RRGGBB)
        hex: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = match cli.command {
        Commands::Apply {
            file,
            binding,
            format,
        } => commands::apply(&file, binding.into(), format)?,
        Commands::Shades {
            hex,
            steps,
            binding,
        } => {
            let steps = steps.unwrap_or_else(|| RampBinding::from(binding).steps().to_vec());
            commands::shades(&hex, &steps)
        }
        Commands::Convert { hex } => commands::convert(&hex),
    };

    print!("{output}");
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

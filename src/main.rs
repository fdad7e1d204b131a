//! termfolio CLI
//!
//! Interactive terminal résumé, or a plain dump of it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use termfolio::config::{Config, DEFAULT_BLINK_MS, DEFAULT_REVEAL_MS};
use termfolio::content::profile;
use termfolio::error::Result;
use termfolio::logging::{LogConfig, init_logging};
use termfolio::report::{OutputFormat, format_profile};

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "Interactive terminal résumé")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Per-character reveal delay of the terminal animation, in ms
    #[arg(long, global = true, default_value_t = DEFAULT_REVEAL_MS)]
    reveal_ms: u64,

    /// Caret blink period, in ms
    #[arg(long, global = true, default_value_t = DEFAULT_BLINK_MS)]
    blink_ms: u64,

    /// Show the terminal text fully revealed immediately
    #[arg(long, global = true)]
    no_animation: bool,

    /// Log file (default: platform data dir)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive résumé (default)
    View,

    /// Print the résumé to stdout without animation
    Print {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
    match init_logging(&log_config) {
        Ok(path) => debug!(path = %path.display(), "logging initialized"),
        Err(e) => eprintln!("Note: logging disabled ({})", e),
    }

    let result = match cli.command {
        None | Some(Commands::View) => cmd_view(cli.reveal_ms, cli.blink_ms, !cli.no_animation),
        Some(Commands::Print { format }) => cmd_print(format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_view(reveal_ms: u64, blink_ms: u64, animate: bool) -> Result<()> {
    let config = Config::from_millis(reveal_ms, blink_ms, animate)?;
    termfolio::tui::run(&config)
}

fn cmd_print(format: OutputFormat) -> Result<()> {
    let out = format_profile(&profile(), format)?;
    print!("{}", out);
    Ok(())
}

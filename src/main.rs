use spring_widgets::{check_date, logging, options, resolve_config, show_config};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "spring-widgets", version, about = "Spring AI Chat selector and date picker widgets")]
struct Cli {
    /// Path to the widget config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skip the TUI and run a subcommand directly
    #[arg(long)]
    no_tui: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show config and log locations
    Info,
    /// List the demo options, optionally filtered like the combobox search
    Options {
        /// Case-insensitive label filter
        #[arg(long)]
        search: Option<String>,
    },
    /// Check whether a date is selectable under the given bounds
    CheckDate {
        /// Date to check (YYYY-MM-DD)
        date: String,
        /// Earliest selectable date
        #[arg(long)]
        min: Option<String>,
        /// Latest selectable date
        #[arg(long)]
        max: Option<String>,
        /// Dates that can never be picked
        #[arg(long, num_args = 1..)]
        exclude: Vec<String>,
    },
    /// Print the effective config as JSON
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // If a subcommand is given or --no-tui is set, run in CLI mode
    if cli.no_tui || cli.command.is_some() {
        logging::init_stderr_logging();
        match cli.command {
            Some(Commands::Info) => spring_widgets::info(cli.config.as_deref()),
            Some(Commands::Options { search }) => options(search.as_deref()),
            Some(Commands::CheckDate { date, min, max, exclude }) => {
                check_date(&date, min.as_deref(), max.as_deref(), &exclude)
            }
            Some(Commands::Config) => show_config(&resolve_config(cli.config.as_deref())?),
            None => {
                eprintln!("No subcommand given. Run without --no-tui to launch the TUI.");
                Ok(())
            }
        }
    } else {
        let _guard = match spring_widgets::config::data_dir() {
            Some(dir) => logging::init_file_logging(&dir)?,
            None => None,
        };
        let config = resolve_config(cli.config.as_deref())?;
        info!(constraints = ?config.constraints(), "config loaded");
        spring_widgets::tui::run(config).await
    }
}

//! GrokNews CLI - latest news plus an LLM summary
//!
//! The pipeline lives in lib.rs; this file parses arguments, sets up logging and
//! the environment, and drives the prompt loop.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use groknews::{logging, ui, Config, Pipeline};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "groknews")]
#[command(author, version, about = "Latest news on a topic, summarised by an LLM", long_about = None)]
struct Cli {
    /// Path to a groknews.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and summarise news for a single topic
    Search {
        /// Topic to search for
        topic: String,
    },
    /// Print the effective configuration (API keys masked)
    Config,
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dotenv = load_dotenv();
    logging::init_logging(cli.verbose);
    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        Err(e) => tracing::debug!(error = %e, "no environment file loaded"),
    }

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "groknews", &mut io::stdout());
        }
        Some(Commands::Config) => {
            let config = Config::load(cli.config.as_deref())?;
            print!("{}", config.to_redacted_toml()?);
        }
        Some(Commands::Search { topic }) => {
            let pipeline = Pipeline::new(Config::load(cli.config.as_deref())?)?;
            let mut out = io::stdout();
            ui::render_status(&mut out, "Fetching news... hold your neurons.")?;
            let outcome = pipeline.run(&topic).await;
            ui::render_outcome(&mut out, &outcome)?;
            if !outcome.is_success() {
                std::process::exit(1);
            }
        }
        None => {
            // Default: interactive prompt loop, one cycle at a time
            let pipeline = Pipeline::new(Config::load(cli.config.as_deref())?)?;
            interactive(&pipeline).await?;
        }
    }

    Ok(())
}

async fn interactive(pipeline: &Pipeline) -> anyhow::Result<()> {
    let mut out = io::stdout();
    ui::render_banner(&mut out)?;

    loop {
        // End of input closes the loop like declining to continue
        let Some(action) = ui::collect_action()? else {
            break;
        };
        if action.triggered {
            ui::render_status(&mut out, "Fetching news... hold your neurons.")?;
        }
        if let Some(outcome) = ui::run_action(pipeline, &action).await {
            ui::render_outcome(&mut out, &outcome)?;
            println!();
        }

        if !ui::ask_continue()? {
            break;
        }
    }

    Ok(())
}

/// Load `.env` (or `$GROKNEWS_DOTENV_PATH`) before logging and config read the environment
fn load_dotenv() -> dotenvy::Result<PathBuf> {
    match std::env::var("GROKNEWS_DOTENV_PATH") {
        Ok(path) => dotenvy::from_path(&path).map(|_| PathBuf::from(path)),
        Err(_) => dotenvy::dotenv(),
    }
}

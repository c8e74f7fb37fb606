/// Roster - searchable user directory in the terminal
use clap::{Parser, Subcommand};
use roster_cli::{app, browser::Browser, config::RosterConfig, DEFAULT_LOG_FILTER};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Search a remote user directory by name", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and search interactively (default)
    Browse,
    /// Run one search, print the matches and exit
    Search {
        /// Name substring; empty matches everyone
        #[arg(default_value = "")]
        term: String,
        /// Sort the matches A-Z
        #[arg(long)]
        sort: bool,
    },
    /// Print past searches
    History,
    /// Erase past searches
    ClearHistory,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the rendered list
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = RosterConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => browse(&config).await?,
        Commands::Search { term, sort } => search(&config, &term, sort).await?,
        Commands::History => show_history(&config).await?,
        Commands::ClearHistory => clear_history(&config).await?,
    }

    Ok(())
}

async fn browse(config: &RosterConfig) -> anyhow::Result<()> {
    let list = app::start_session(config).await?;
    let mut browser = Browser::new(list);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    browser.run(stdin, &mut stdout).await?;

    Ok(())
}

async fn search(config: &RosterConfig, term: &str, sort: bool) -> anyhow::Result<()> {
    let mut list = app::start_session(config).await?;
    print!("{}", app::search_once(&mut list, term, sort).await?);
    Ok(())
}

async fn show_history(config: &RosterConfig) -> anyhow::Result<()> {
    let store = app::open_store(config).await?;
    print!("{}", app::history_report(&store).await?);
    Ok(())
}

async fn clear_history(config: &RosterConfig) -> anyhow::Result<()> {
    let store = app::open_store(config).await?;
    print!("{}", app::clear_history(store).await?);
    Ok(())
}

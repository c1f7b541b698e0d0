use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use tidy_feed::{FeedClient, RemoteTodoView};

mod config;
mod list;
mod logging;
mod manage;
mod render;
mod state;

use crate::config::LogSection;
use crate::render::render_dashboard;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TIDY_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "tidy", version = VERSION, about = "Dashboard, API todo list and personal todo manager")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the dashboard and its navigation entries (default)
    Dashboard,

    /// View Todo List (API): load a page of sample todos from the remote feed
    List {
        /// Page size (default: config feed.page_size)
        #[arg(long)]
        limit: Option<usize>,

        /// Feed base URL (default: config feed.base_url)
        #[arg(long)]
        base_url: Option<String>,

        /// Print the loaded records as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Manage Personal Todos: interactive in-memory todo manager
    Manage,

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.tidy/config.toml with defaults (keeps an existing file)
    Init,

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only `list` and `config show` need the file; other pages run on defaults.
    let loaded = config::load_config();
    let filter = match &loaded {
        Ok(cfg) => cfg.log.filter.clone(),
        Err(_) => LogSection::default().filter,
    };
    logging::init(&filter);

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            config::or_default(loaded);
            print!("{}", render_dashboard());
        }

        Command::List {
            limit,
            base_url,
            json,
        } => {
            let cfg = loaded?;
            tracing::debug!(?cfg, "loaded config");
            let page_size = limit.unwrap_or(cfg.feed.page_size);
            let base_url = base_url.unwrap_or(cfg.feed.base_url);

            let client = FeedClient::new(base_url.as_str()).context("build feed client")?;
            let mut view = RemoteTodoView::new(client);
            list::run(&mut view, page_size, json, &mut io::stdout().lock())
                .await
                .with_context(|| format!("feed {base_url}"))?;
        }

        Command::Manage => {
            config::or_default(loaded);
            let stdin = io::stdin();
            let session = manage::Session::new(stdin.lock(), io::stdout());
            session.run()?;
            print!("\n{}", render_dashboard());
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = loaded?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

//! Topic Help - Binary Entry Point
//!
//! Serves the help tools over MCP on stdio, or runs the REPL with `--repl`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use topic_help::repl::Repl;
use topic_help::server::McpServer;
use topic_help::tools::register_all_tools;
use topic_help::{HelpConfig, HelpDesk};

#[derive(Parser, Debug)]
#[command(name = "help-server", version, about = "Topic documentation and operation listings")]
struct Args {
    /// Run the interactive shell instead of the MCP server
    #[arg(long)]
    repl: bool,

    /// Listing width in cells [env: HELP_MAX_WIDTH]
    #[arg(long)]
    width: Option<usize>,

    /// Gap between listing columns, at least 4 [env: HELP_COLUMN_PADDING]
    #[arg(long)]
    padding: Option<usize>,

    /// Similarity a misspelled keyword must exceed, in [0, 1) [env: HELP_FUZZY_THRESHOLD]
    #[arg(long)]
    threshold: Option<f64>,

    /// Directory of `<topic>.md` files replacing built-in prose [env: HELP_DOCS_DIR]
    #[arg(long)]
    docs_dir: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> HelpConfig {
        let mut config = HelpConfig::from_env();
        if let Some(width) = self.width {
            config.max_width = width;
        }
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        if let Some(threshold) = self.threshold {
            config.fuzzy_threshold = threshold;
        }
        if let Some(dir) = &self.docs_dir {
            config.docs_dir = Some(dir.clone());
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    // stdout carries JSON-RPC, so logs go to stderr
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    ctrlc::set_handler(|| {
        log::info!("interrupted, exiting");
        std::process::exit(0);
    })
    .context("failed to install Ctrl+C handler")?;

    let config = args.config();
    let desk = HelpDesk::with_config(&config).context("failed to load help topics")?;

    if args.repl {
        let mut repl = Repl::new(&desk, io::stdout());
        if io::stdin().is_terminal() {
            repl.run_editor()?;
        } else {
            repl = repl.without_prompt();
            repl.run(io::stdin().lock())?;
        }
        return Ok(());
    }

    let mut server = McpServer::new();
    register_all_tools(&mut server, Arc::new(desk));
    server.run()?;
    Ok(())
}

mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::io::{self, Write};
use std::sync::Arc;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::cmd::commit::{self, CommitCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::openai::OpenAiClient;

#[derive(Parser)]
#[command(
    name = "commit-helper",
    author,
    version,
    about = "Generate a git commit message from a description of changes"
)]
struct Cli {
    /// Changes as a string or path to a .diff file.
    changes: String,

    /// Additional instruction to guide the generated message.
    #[arg(short, long, default_value = "")]
    instruction: String,

    /// Log progress to stderr (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = execute(cli).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

async fn execute(cli: Cli) -> AppResult<()> {
    let config = AppConfig::load()?;
    let mut stdout = io::stdout();
    run(cli, config, &mut stdout).await
}

async fn run<W: Write>(cli: Cli, config: AppConfig, out: &mut W) -> AppResult<()> {
    let language_model = Arc::new(OpenAiClient::new(
        config.api_key.clone(),
        config.base_url.clone(),
        config.model.clone(),
    ));
    let context = AppContext::new(config, language_model);

    commit::run(
        &context,
        CommitCommandArgs {
            changes: cli.changes,
            instruction: Some(cli.instruction),
        },
        out,
    )
    .await
}

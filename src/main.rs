use anyhow::{Context, Result};
use clap::Parser;
use indicatif::MultiProgress;
use std::process::ExitCode;
use tracing::error;

use mdsync::cli::Cli;
use mdsync::config::Config;
use mdsync::coordinator::RunCoordinator;
use mdsync::logging;
use mdsync::model::RunSummary;
use mdsync::progress::BarProgress;
use mdsync::repository::{FileRunState, GitOracle};
use mdsync::translator::OpenAiTranslator;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let bars = MultiProgress::new();

    if let Err(e) = logging::init(&cli.log_file, bars.clone()) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match run(cli, bars).await {
        Ok(summary) if summary.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, bars: MultiProgress) -> Result<RunSummary> {
    let config = Config::from_cli(cli)?;

    let translator = OpenAiTranslator::new(config.backend.clone())?;
    let oracle = GitOracle::discover(&config.source_root);
    let store = FileRunState::new(&config.state_file);

    let mut coordinator = RunCoordinator::new(&config, &translator, &oracle, &store);
    if config.verbose {
        coordinator = coordinator.with_progress(BarProgress::new(bars));
    }
    coordinator.run().await.context("Translation run aborted")
}

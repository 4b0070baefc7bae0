use ag_client::HttpArticleApi;
use ag_core::{Action, Status};
use ag_form::FormController;
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

mod cli;
mod logging;
mod view;

use cli::{Cli, Commands};
use view::TerminalView;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let store = ag_storage::create_store(&cli.store, cli.store_path.clone())
        .context("failed to open settings store")?;
    let view = Arc::new(TerminalView::new(
        &cli.api_base,
        &cli.form,
        cli.out_dir.clone(),
        cli.preview_out.clone(),
    ));
    let controller = FormController::new(store, view, Arc::new(HttpArticleApi::new()));

    controller.initialize().await;
    debug!("Running {:?}", cli.command);

    let status = match cli.command {
        Commands::Generate => controller.dispatch(Action::Generate).await,
        Commands::Export { zip: false } => controller.dispatch(Action::Export).await,
        Commands::Export { zip: true } => controller.export_zip().await,
        Commands::Health => controller.check_health().await,
    };

    Ok(exit_code(status))
}

fn exit_code(status: Status) -> ExitCode {
    if status.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

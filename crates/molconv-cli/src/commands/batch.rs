use crate::cli::BatchArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::ui::{CliProgressHandler, UiEvent};
use molconv::engine::config::ConversionDirection;
use molconv::engine::progress::ProgressReporter;
use molconv::workflows::batch;
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn run(
    args: BatchArgs,
    direction: ConversionDirection,
    config: &AppConfig,
    ui_sender: mpsc::Sender<UiEvent>,
) -> Result<()> {
    let out_dir = match args.out_dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(CliError::Io)?,
    };

    let progress_handler = CliProgressHandler::new(ui_sender);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the batch conversion workflow...");
    let report = tokio::task::block_in_place(|| {
        batch::run(
            &args.input_dir,
            &out_dir,
            direction,
            &config.conversion,
            &reporter,
        )
    })?;

    if report.is_empty() {
        println!(
            "No *.{} files found in {}.",
            direction.source().extension(),
            args.input_dir.display()
        );
        return Ok(());
    }

    let converted = report.len() - report.failure_count();
    let renamed: usize = report.succeeded().map(|r| r.renamed_chain_count()).sum();
    println!(
        "Converted {} of {} file(s) into {}.",
        converted,
        report.len(),
        out_dir.display()
    );
    if renamed > 0 {
        println!("Renamed {} chain(s) in total to fit the PDB format.", renamed);
    }

    if report.is_success() {
        return Ok(());
    }

    for (path, error) in report.failed() {
        warn!("{:?}: {}", path, error);
        eprintln!("  ✗ {}: {}", path.display(), error);
    }
    Err(CliError::BatchFailed {
        failed: report.failure_count(),
        total: report.len(),
    })
}

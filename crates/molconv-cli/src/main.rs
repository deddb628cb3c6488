mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod ui;

use crate::cli::{Cli, Commands};
use crate::config::PartialAppConfig;
use crate::error::{CliError, Result};
use crate::ui::UiManager;
use clap::Parser;
use tokio::task;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    let (ui_manager, ui_sender, shutdown_sender) = UiManager::new(cli.quiet);
    let ui_handle = task::spawn(ui_manager.run());

    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone(), ui_sender.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    let command_result = async {
        info!("molconverter v{} starting up.", env!("CARGO_PKG_VERSION"));
        debug!("Full CLI arguments parsed: {:?}", &cli);

        let config = PartialAppConfig::load(cli.config.as_deref())?.merge_with_cli(&cli)?;
        debug!("Resolved configuration: {:?}", &config);

        if let Some(num_threads) = config.threads {
            info!(
                "Setting Rayon global thread pool to {} threads.",
                num_threads
            );
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .map_err(|e| {
                    CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
                })?;
        }

        let direction = cli.command.direction();
        match cli.command {
            Commands::MmcifToPdb(args) => {
                info!("Dispatching to 'mmcif-to-pdb' command.");
                commands::convert::run(args.cif_file, args.pdb_file, direction, &config).await
            }
            Commands::PdbToMmcif(args) => {
                info!("Dispatching to 'pdb-to-mmcif' command.");
                commands::convert::run(args.pdb_file, args.cif_file, direction, &config).await
            }
            Commands::MultiMmcifToPdb(args) => {
                info!("Dispatching to 'multi-mmcif-to-pdb' command.");
                commands::batch::run(args, direction, &config, ui_sender).await
            }
            Commands::MultiPdbToMmcif(args) => {
                info!("Dispatching to 'multi-pdb-to-mmcif' command.");
                commands::batch::run(args, direction, &config, ui_sender).await
            }
        }
    }
    .await;

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    if shutdown_sender.send(true).is_err() {
        warn!("UI manager may have already exited before shutdown signal.");
    }

    ui_handle
        .await
        .map_err(|e| CliError::Other(anyhow::anyhow!("UI manager task failed: {}", e)))?;

    command_result
}

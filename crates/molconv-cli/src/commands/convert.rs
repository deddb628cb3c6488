use crate::config::AppConfig;
use crate::error::{CliError, Result};
use molconv::engine::config::ConversionDirection;
use molconv::workflows::convert;
use std::path::{Path, PathBuf};
use tracing::info;

/// Converts one file; `output` falls back to the input stem with the target
/// extension in the current directory.
pub async fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    direction: ConversionDirection,
    config: &AppConfig,
) -> Result<()> {
    let output = match output {
        Some(path) => path,
        None => default_output(&input, direction)?,
    };

    info!("Invoking the single-file conversion workflow...");
    let report = tokio::task::block_in_place(|| {
        convert::run(&input, &output, direction, &config.conversion)
    })?;

    if let Some(map) = &report.chain_map {
        let renamed = map.renamed().count();
        if renamed > 0 {
            println!(
                "Renamed {} of {} chain(s) to fit the PDB format (use -v to list them).",
                renamed,
                map.len()
            );
        }
    }
    println!(
        "✓ Converted {} → {} ({} chains, {} atoms)",
        report.input.display(),
        report.output.display(),
        report.chain_count,
        report.atom_count
    );

    Ok(())
}

fn default_output(input: &Path, direction: ConversionDirection) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(CliError::Io)?;
    Ok(convert::default_output_path(input, direction.target(), &cwd)?)
}

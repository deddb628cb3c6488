use super::convert::{self, ConversionReport, default_output_path};
use crate::core::io::StructureFormat;
use crate::engine::config::{ConversionConfig, ConversionDirection};
use crate::engine::error::ConversionError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of converting one file of a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<ConversionReport, ConversionError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &ConversionReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&Path, &ConversionError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.input.as_path(), e)))
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Regular files directly inside `dir` whose extension is exactly the
/// canonical one of `format`, sorted by path.
///
/// # Errors
///
/// Returns an error if `dir` is missing, not a directory, or unreadable.
pub fn collect_inputs(dir: &Path, format: StructureFormat) -> Result<Vec<PathBuf>, ConversionError> {
    if !dir.exists() {
        return Err(ConversionError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(ConversionError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let io_err = |source| ConversionError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && format.matches_extension(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Converts every matching file in `input_dir`, writing results to `out_dir`.
///
/// Files are converted independently and, with the `parallel` feature, on the
/// rayon thread pool. A failing file is recorded in the returned report and
/// never stops the others.
///
/// # Errors
///
/// Only fails as a whole if the input directory cannot be listed or the output
/// directory cannot be created.
#[instrument(skip_all, name = "batch_workflow", fields(input_dir = %input_dir.display()))]
pub fn run(
    input_dir: &Path,
    out_dir: &Path,
    direction: ConversionDirection,
    config: &ConversionConfig,
    reporter: &ProgressReporter,
) -> Result<BatchReport, ConversionError> {
    let inputs = collect_inputs(input_dir, direction.source())?;

    if inputs.is_empty() {
        warn!(
            "No *.{} files found in {:?}. Nothing to convert.",
            direction.source().extension(),
            input_dir
        );
        return Ok(BatchReport::default());
    }

    fs::create_dir_all(out_dir).map_err(|source| ConversionError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    info!(
        "Converting {} file(s) ({}) into {:?}",
        inputs.len(),
        direction,
        out_dir
    );
    reporter.report(Progress::PhaseStart {
        name: format!("Converting {} files ({})", inputs.len(), direction),
    });
    reporter.report(Progress::TaskStart {
        total: inputs.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = inputs.iter();

    #[cfg(feature = "parallel")]
    let iterator = inputs.par_iter();

    let outcomes: Vec<FileOutcome> = iterator
        .map(|input| {
            let outcome = convert_one(input, out_dir, direction, config);
            if let Err(e) = &outcome.result {
                warn!("Failed to convert {:?}: {}", input, e);
                reporter.report(Progress::ItemFailed {
                    item: input.display().to_string(),
                    reason: e.to_string(),
                });
            }
            if let Some(name) = input.file_name() {
                reporter.report(Progress::StatusUpdate {
                    text: name.to_string_lossy().into_owned(),
                });
            }
            reporter.report(Progress::TaskIncrement { amount: 1 });
            outcome
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let report = BatchReport { outcomes };
    info!(
        converted = report.len() - report.failure_count(),
        failed = report.failure_count(),
        "Batch conversion finished."
    );
    reporter.report(Progress::PhaseFinish);
    Ok(report)
}

fn convert_one(
    input: &Path,
    out_dir: &Path,
    direction: ConversionDirection,
    config: &ConversionConfig,
) -> FileOutcome {
    let result = default_output_path(input, direction.target(), out_dir)
        .and_then(|output| convert::run(input, &output, direction, config));
    FileOutcome {
        input: input.to_path_buf(),
        result,
    }
}

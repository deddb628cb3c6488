use crate::core::chains::{ChainMap, compact_structure};
use crate::core::io::{MmcifFile, PdbFile, Strictness, StructureFile, StructureFormat};
use crate::engine::config::{ConversionConfig, ConversionDirection};
use crate::engine::error::ConversionError;
use pdbtbx::PDB;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// What a successful single-file conversion did.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub direction: ConversionDirection,
    /// Present only when the target format required chain compaction.
    pub chain_map: Option<ChainMap>,
    pub chain_count: usize,
    pub atom_count: usize,
}

impl ConversionReport {
    pub fn renamed_chain_count(&self) -> usize {
        self.chain_map
            .as_ref()
            .map_or(0, |map| map.renamed().count())
    }
}

/// Output path for `input` converted to `target`: the input's stem with the
/// target extension, placed in `out_dir`.
///
/// # Errors
///
/// Returns [`ConversionError::NoFileStem`] if `input` has no file name.
pub fn default_output_path(
    input: &Path,
    target: StructureFormat,
    out_dir: &Path,
) -> Result<PathBuf, ConversionError> {
    let stem = input.file_stem().ok_or_else(|| ConversionError::NoFileStem {
        path: input.to_path_buf(),
    })?;
    let mut name = OsString::from(stem);
    name.push(".");
    name.push(target.extension());
    Ok(out_dir.join(name))
}

/// Converts a single structure file.
///
/// The output file is written atomically: either a complete file appears at
/// `output` or nothing does.
///
/// # Errors
///
/// Returns an error if the input is missing, cannot be parsed, has too many
/// chains for the PDB format, or the output cannot be written.
#[instrument(skip_all, name = "convert_workflow", fields(input = %input.display()))]
pub fn run(
    input: &Path,
    output: &Path,
    direction: ConversionDirection,
    config: &ConversionConfig,
) -> Result<ConversionReport, ConversionError> {
    if !input.exists() {
        return Err(ConversionError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    if !input.is_file() {
        return Err(ConversionError::NotAFile {
            path: input.to_path_buf(),
        });
    }
    info!("Converting {:?} ({}) to {:?}", input, direction, output);

    let mut pdb = read_structure(input, direction.source(), config.read_strictness)?;
    if pdb.atom_count() == 0 {
        return Err(ConversionError::EmptyStructure {
            path: input.to_path_buf(),
        });
    }

    let chain_map = if direction.requires_compaction() {
        let map = compact_structure(&mut pdb)?;
        for (new, old) in map.renamed() {
            info!("Renaming chain {} to {}", old, new);
        }
        Some(map)
    } else {
        None
    };

    write_structure(&pdb, output, direction.target(), config.write_strictness)?;
    info!("Wrote {:?}", output);

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        direction,
        chain_map,
        chain_count: pdb.chain_count(),
        atom_count: pdb.atom_count(),
    })
}

fn read_structure(
    path: &Path,
    format: StructureFormat,
    level: Strictness,
) -> Result<PDB, ConversionError> {
    let pdb = match format {
        StructureFormat::Pdb => PdbFile::read_from_path(path, level)?,
        StructureFormat::Mmcif => MmcifFile::read_from_path(path, level)?,
    };
    Ok(pdb)
}

fn write_structure(
    pdb: &PDB,
    path: &Path,
    format: StructureFormat,
    level: Strictness,
) -> Result<(), ConversionError> {
    match format {
        StructureFormat::Pdb => PdbFile::write_to_path(pdb, path, level)?,
        StructureFormat::Mmcif => MmcifFile::write_to_path(pdb, path, level)?,
    }
    Ok(())
}

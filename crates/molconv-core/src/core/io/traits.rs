use super::atomic::write_atomically;
use super::error::{StructureIoError, join_messages};
use super::format::StructureFormat;
use super::strictness::Strictness;
use pdbtbx::{PDB, PDBError, ReadOptions};
use std::path::Path;
use tracing::{debug, warn};

/// Defines the interface for reading and writing structure file formats.
///
/// Implementors only name their format and how `pdbtbx` serializes it; path
/// handling, diagnostics and atomic output are shared.
pub trait StructureFile {
    /// The format this implementation reads and writes.
    const FORMAT: StructureFormat;

    /// Serializes `pdb` to the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the diagnostics `pdbtbx` produced if validation or writing failed.
    fn save(pdb: &PDB, path: &str, level: Strictness) -> Result<(), Vec<PDBError>>;

    /// Reads a structure from a file path.
    ///
    /// Non-fatal diagnostics from the parser are logged as warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not UTF-8 or the parser rejects the file.
    fn read_from_path<P: AsRef<Path>>(path: P, level: Strictness) -> Result<PDB, StructureIoError> {
        let path = path.as_ref();
        let path_str = utf8_path(path)?;
        debug!("Reading {} file {:?} ({} mode)", Self::FORMAT, path, level);

        let (pdb, warnings) = ReadOptions::new()
            .set_format(Self::FORMAT.to_pdbtbx())
            .set_level(level.into())
            .read(path_str)
            .map_err(|errors| StructureIoError::Read {
                path: path.to_path_buf(),
                message: join_messages(&errors),
            })?;

        for warning in &warnings {
            warn!("{:?}: {}", path, warning);
        }
        debug!(
            chains = pdb.chain_count(),
            atoms = pdb.atom_count(),
            "Structure loaded."
        );
        Ok(pdb)
    }

    /// Writes a structure to a file path.
    ///
    /// The file only appears at `path` once it has been written completely.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or `pdbtbx` refuses to
    /// serialize the structure.
    fn write_to_path<P: AsRef<Path>>(
        pdb: &PDB,
        path: P,
        level: Strictness,
    ) -> Result<(), StructureIoError> {
        let path = path.as_ref();
        debug!("Writing {} file {:?}", Self::FORMAT, path);

        write_atomically(path, |temp| {
            let temp_str = utf8_path(temp)?;
            Self::save(pdb, temp_str, level).map_err(|errors| StructureIoError::Write {
                path: path.to_path_buf(),
                message: join_messages(&errors),
            })
        })
    }
}

fn utf8_path(path: &Path) -> Result<&str, StructureIoError> {
    path.to_str().ok_or_else(|| StructureIoError::InvalidPath {
        path: path.to_path_buf(),
    })
}

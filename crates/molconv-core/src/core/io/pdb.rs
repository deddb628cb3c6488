use super::format::StructureFormat;
use super::strictness::Strictness;
use super::traits::StructureFile;
use pdbtbx::{PDB, PDBError};

/// The fixed-column legacy PDB format.
///
/// Chain identifiers must be a single character; compact them before writing.
pub struct PdbFile;

impl StructureFile for PdbFile {
    const FORMAT: StructureFormat = StructureFormat::Pdb;

    fn save(pdb: &PDB, path: &str, level: Strictness) -> Result<(), Vec<PDBError>> {
        pdbtbx::save_pdb(pdb, path, level.into())
    }
}

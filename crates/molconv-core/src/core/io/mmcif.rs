use super::format::StructureFormat;
use super::strictness::Strictness;
use super::traits::StructureFile;
use pdbtbx::{PDB, PDBError};

/// The tag-based mmCIF format.
pub struct MmcifFile;

impl StructureFile for MmcifFile {
    const FORMAT: StructureFormat = StructureFormat::Mmcif;

    fn save(pdb: &PDB, path: &str, level: Strictness) -> Result<(), Vec<PDBError>> {
        pdbtbx::save_mmcif(pdb, path, level.into())
    }
}

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureFormat {
    Pdb,
    Mmcif,
}

impl StructureFormat {
    /// Canonical file extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            StructureFormat::Pdb => "pdb",
            StructureFormat::Mmcif => "cif",
        }
    }

    /// Guesses the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdb" | "ent" => Some(StructureFormat::Pdb),
            "cif" | "mmcif" => Some(StructureFormat::Mmcif),
            _ => None,
        }
    }

    /// True if `path` carries exactly the canonical extension of this format.
    pub fn matches_extension(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension())
    }

    pub fn to_pdbtbx(self) -> pdbtbx::Format {
        match self {
            StructureFormat::Pdb => pdbtbx::Format::Pdb,
            StructureFormat::Mmcif => pdbtbx::Format::Mmcif,
        }
    }
}

impl fmt::Display for StructureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StructureFormat::Pdb => "PDB",
                StructureFormat::Mmcif => "mmCIF",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_the_canonical_one() {
        assert_eq!(StructureFormat::Pdb.extension(), "pdb");
        assert_eq!(StructureFormat::Mmcif.extension(), "cif");
    }

    #[test]
    fn from_path_recognizes_common_extensions_case_insensitively() {
        assert_eq!(
            StructureFormat::from_path(Path::new("1abc.PDB")),
            Some(StructureFormat::Pdb)
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("pdb1abc.ent")),
            Some(StructureFormat::Pdb)
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("dir/7lcj.cif")),
            Some(StructureFormat::Mmcif)
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("7lcj.mmcif")),
            Some(StructureFormat::Mmcif)
        );
    }

    #[test]
    fn from_path_returns_none_for_unknown_or_missing_extension() {
        assert_eq!(StructureFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(StructureFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn matches_extension_is_exact() {
        assert!(StructureFormat::Mmcif.matches_extension(Path::new("a.cif")));
        assert!(!StructureFormat::Mmcif.matches_extension(Path::new("a.CIF")));
        assert!(!StructureFormat::Mmcif.matches_extension(Path::new("a.cif.gz")));
        assert!(StructureFormat::Pdb.matches_extension(Path::new("dir/b.pdb")));
        assert!(!StructureFormat::Pdb.matches_extension(Path::new("b.ent")));
    }

    #[test]
    fn display_uses_conventional_names() {
        assert_eq!(StructureFormat::Pdb.to_string(), "PDB");
        assert_eq!(StructureFormat::Mmcif.to_string(), "mmCIF");
    }
}

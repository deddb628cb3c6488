use crate::core::io::{Strictness, StructureFormat};
use std::fmt;

/// Which way a conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionDirection {
    MmcifToPdb,
    PdbToMmcif,
}

impl ConversionDirection {
    pub fn source(self) -> StructureFormat {
        match self {
            ConversionDirection::MmcifToPdb => StructureFormat::Mmcif,
            ConversionDirection::PdbToMmcif => StructureFormat::Pdb,
        }
    }

    pub fn target(self) -> StructureFormat {
        match self {
            ConversionDirection::MmcifToPdb => StructureFormat::Pdb,
            ConversionDirection::PdbToMmcif => StructureFormat::Mmcif,
        }
    }

    /// Only the PDB format limits chain identifiers to one character.
    pub fn requires_compaction(self) -> bool {
        self.target() == StructureFormat::Pdb
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionConfig {
    pub read_strictness: Strictness,
    pub write_strictness: Strictness,
}

#[derive(Default)]
pub struct ConversionConfigBuilder {
    read_strictness: Option<Strictness>,
    write_strictness: Option<Strictness>,
}

impl ConversionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_strictness(mut self, level: Strictness) -> Self {
        self.read_strictness = Some(level);
        self
    }
    pub fn write_strictness(mut self, level: Strictness) -> Self {
        self.write_strictness = Some(level);
        self
    }

    pub fn build(self) -> ConversionConfig {
        ConversionConfig {
            read_strictness: self.read_strictness.unwrap_or_default(),
            write_strictness: self.write_strictness.unwrap_or_default(),
        }
    }
}

use clap::{Args, Parser, Subcommand};
use molconv::core::io::Strictness;
use molconv::engine::config::ConversionDirection;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "molconverter",
    author = "molconv developers",
    version,
    about = "molconverter - Convert molecular structures between the mmCIF and PDB formats, one file at a time or a whole directory in parallel.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO including every chain rename, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for batch conversion.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override how strictly input files are parsed (strict, medium or loose).
    #[arg(long, global = true, value_name = "LEVEL")]
    pub strictness: Option<Strictness>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an mmCIF file to PDB format, compacting chain identifiers to one character.
    #[command(alias = "mmcif_to_pdb")]
    MmcifToPdb(MmcifToPdbArgs),
    /// Convert a PDB file to mmCIF format.
    #[command(alias = "pdb_to_mmcif")]
    PdbToMmcif(PdbToMmcifArgs),
    /// Convert every *.cif file in a directory to PDB format.
    #[command(alias = "multi_mmcif_to_pdb")]
    MultiMmcifToPdb(BatchArgs),
    /// Convert every *.pdb file in a directory to mmCIF format.
    #[command(alias = "multi_pdb_to_mmcif")]
    MultiPdbToMmcif(BatchArgs),
}

impl Commands {
    pub fn direction(&self) -> ConversionDirection {
        match self {
            Commands::MmcifToPdb(_) | Commands::MultiMmcifToPdb(_) => {
                ConversionDirection::MmcifToPdb
            }
            Commands::PdbToMmcif(_) | Commands::MultiPdbToMmcif(_) => {
                ConversionDirection::PdbToMmcif
            }
        }
    }
}

/// Arguments for the `mmcif-to-pdb` subcommand.
#[derive(Args, Debug)]
pub struct MmcifToPdbArgs {
    /// Path to the mmCIF input file.
    #[arg(value_name = "CIF_FILE")]
    pub cif_file: PathBuf,

    /// Path to the PDB output file.
    /// Defaults to the input name with a .pdb extension in the current directory.
    #[arg(long, value_name = "PATH")]
    pub pdb_file: Option<PathBuf>,
}

/// Arguments for the `pdb-to-mmcif` subcommand.
#[derive(Args, Debug)]
pub struct PdbToMmcifArgs {
    /// Path to the PDB input file.
    #[arg(value_name = "PDB_FILE")]
    pub pdb_file: PathBuf,

    /// Path to the mmCIF output file.
    /// Defaults to the input name with a .cif extension in the current directory.
    #[arg(long, value_name = "PATH")]
    pub cif_file: Option<PathBuf>,
}

/// Arguments shared by the directory-wide subcommands.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory containing the input files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory for the converted files. Created if missing.
    /// Defaults to the current directory.
    #[arg(long, value_name = "PATH")]
    pub out_dir: Option<PathBuf>,
}

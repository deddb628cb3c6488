use molconv::core::chains::{CHAIN_ALPHABET, compact_structure};
use molconv::core::io::{MmcifFile, PdbFile, Strictness, StructureFile};
use molconv::engine::config::{ConversionConfig, ConversionDirection};
use molconv::engine::progress::{Progress, ProgressReporter};
use molconv::workflows::{batch, convert};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn chain_ids(pdb: &pdbtbx::PDB) -> Vec<String> {
    pdb.chains().map(|c| c.id().to_string()).collect()
}

fn chain_ids_per_model(pdb: &pdbtbx::PDB) -> Vec<Vec<String>> {
    pdb.models()
        .map(|m| m.chains().map(|c| c.id().to_string()).collect())
        .collect()
}

#[test]
fn mmcif_to_pdb_and_back_preserves_content() {
    let dir = tempfile::tempdir().unwrap();
    let pdb_path = dir.path().join("two_chains.pdb");
    let cif_path = dir.path().join("two_chains.cif");
    let config = ConversionConfig::default();

    let forward = convert::run(
        &fixture("two_chains.cif"),
        &pdb_path,
        ConversionDirection::MmcifToPdb,
        &config,
    )
    .unwrap();
    assert_eq!(forward.renamed_chain_count(), 0);
    assert_eq!(forward.chain_count, 2);
    assert_eq!(forward.atom_count, 16);

    let back = convert::run(&pdb_path, &cif_path, ConversionDirection::PdbToMmcif, &config).unwrap();
    assert!(back.chain_map.is_none());

    let original = MmcifFile::read_from_path(fixture("two_chains.cif"), Strictness::Loose).unwrap();
    let round_tripped = MmcifFile::read_from_path(&cif_path, Strictness::Loose).unwrap();

    assert_eq!(round_tripped.chain_count(), original.chain_count());
    assert_eq!(round_tripped.residue_count(), original.residue_count());
    assert_eq!(round_tripped.atom_count(), original.atom_count());
    assert_eq!(chain_ids(&round_tripped), ["A", "B"]);
}

#[test]
fn long_chain_identifiers_are_compacted_for_pdb_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("long_chains.pdb");

    let report = convert::run(
        &fixture("long_chains.cif"),
        &output,
        ConversionDirection::MmcifToPdb,
        &ConversionConfig::default(),
    )
    .unwrap();

    let map = report.chain_map.as_ref().unwrap();
    assert_eq!(map.get("A"), Some("A"));
    assert_eq!(
        map.renamed().collect::<Vec<_>>(),
        [("B", "AB"), ("C", "BCD")]
    );

    let written = PdbFile::read_from_path(&output, Strictness::Loose).unwrap();
    assert_eq!(chain_ids(&written), ["A", "B", "C"]);
    assert_eq!(written.atom_count(), 24);
}

#[test]
fn every_chain_rename_is_logged_at_info() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("long_chains.pdb");
    let log_path = dir.path().join("convert.log");

    let file = fs::File::create(&log_path).unwrap();
    let file_layer = fmt::layer().with_writer(file).with_ansi(false);
    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(file_layer);

    tracing::subscriber::with_default(subscriber, || {
        convert::run(
            &fixture("long_chains.cif"),
            &output,
            ConversionDirection::MmcifToPdb,
            &ConversionConfig::default(),
        )
        .unwrap();
    });

    let content = fs::read_to_string(&log_path).unwrap();
    let renames: Vec<&str> = content
        .lines()
        .filter(|line| line.contains("Renaming chain"))
        .collect();
    assert_eq!(renames.len(), 2, "log was:\n{content}");
    assert!(renames[0].contains("INFO"));
    assert!(renames[0].contains("Renaming chain AB to B"));
    assert!(renames[1].contains("Renaming chain BCD to C"));
}

#[test]
fn multi_model_structure_keeps_chain_identifiers_consistent() {
    let mut pdb = MmcifFile::read_from_path(fixture("multi_model.cif"), Strictness::Loose).unwrap();
    assert_eq!(pdb.model_count(), 2);

    let map = compact_structure(&mut pdb).unwrap();

    assert_eq!(
        chain_ids_per_model(&pdb),
        [["A", "B", "X"], ["A", "B", "X"]]
    );
    assert_eq!(map.len(), 3);
    assert_eq!(
        map.renamed().collect::<Vec<_>>(),
        [("B", "AB"), ("X", "XY")]
    );
}

#[test]
fn multi_model_structure_converts_to_pdb() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("multi_model.pdb");

    let report = convert::run(
        &fixture("multi_model.cif"),
        &output,
        ConversionDirection::MmcifToPdb,
        &ConversionConfig::default(),
    )
    .unwrap();

    assert_eq!(report.renamed_chain_count(), 2);
    let written = PdbFile::read_from_path(&output, Strictness::Loose).unwrap();
    assert_eq!(
        chain_ids_per_model(&written),
        [["A", "B", "X"], ["A", "B", "X"]]
    );
    let original = MmcifFile::read_from_path(fixture("multi_model.cif"), Strictness::Loose).unwrap();
    assert_eq!(written.atom_count(), original.atom_count());
}

#[test]
fn pdb_to_mmcif_keeps_chain_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("two_chains.cif");

    let report = convert::run(
        &fixture("two_chains.pdb"),
        &output,
        ConversionDirection::PdbToMmcif,
        &ConversionConfig::default(),
    )
    .unwrap();

    assert!(report.chain_map.is_none());
    let written = MmcifFile::read_from_path(&output, Strictness::Loose).unwrap();
    assert_eq!(chain_ids(&written), ["A", "B"]);
    assert_eq!(written.atom_count(), 16);
}

fn write_many_chain_cif(path: &Path, chains: usize) {
    let mut text = String::from(
        "data_MANY\n#\nloop_\n_atom_site.group_PDB\n_atom_site.id\n_atom_site.type_symbol\n\
         _atom_site.label_atom_id\n_atom_site.label_alt_id\n_atom_site.label_comp_id\n\
         _atom_site.label_asym_id\n_atom_site.label_entity_id\n_atom_site.label_seq_id\n\
         _atom_site.pdbx_PDB_ins_code\n_atom_site.Cartn_x\n_atom_site.Cartn_y\n_atom_site.Cartn_z\n\
         _atom_site.occupancy\n_atom_site.B_iso_or_equiv\n_atom_site.pdbx_formal_charge\n\
         _atom_site.auth_seq_id\n_atom_site.auth_comp_id\n_atom_site.auth_asym_id\n\
         _atom_site.auth_atom_id\n_atom_site.pdbx_PDB_model_num\n",
    );
    for i in 0..chains {
        let chain = format!("C{i:02}");
        text.push_str(&format!(
            "ATOM {} C CA . GLY {chain} {} 1 ? {:.3} 0.000 0.000 1.00 20.00 ? 1 GLY {chain} CA 1\n",
            i + 1,
            i + 1,
            i as f64 * 4.0
        ));
    }
    text.push_str("#\n");
    fs::write(path, text).unwrap();
}

#[test]
fn structure_with_too_many_chains_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("many.cif");
    let output = dir.path().join("many.pdb");
    write_many_chain_cif(&input, CHAIN_ALPHABET.len() + 1);

    let err = convert::run(
        &input,
        &output,
        ConversionDirection::MmcifToPdb,
        &ConversionConfig::default(),
    )
    .unwrap_err();

    assert!(err.is_out_of_chains(), "unexpected error: {err}");
    assert!(!output.exists());
}

#[test]
fn batch_conversion_isolates_failing_files() {
    let input_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    fs::copy(fixture("two_chains.cif"), input_dir.path().join("first.cif")).unwrap();
    fs::copy(fixture("long_chains.cif"), input_dir.path().join("second.cif")).unwrap();
    write_many_chain_cif(&input_dir.path().join("crowded.cif"), 70);
    fs::copy(fixture("two_chains.pdb"), input_dir.path().join("ignored.pdb")).unwrap();

    let events = Mutex::new(Vec::new());
    let reporter = ProgressReporter::with_callback(Box::new(|p: Progress| {
        if let Progress::TaskIncrement { amount } = p {
            events.lock().unwrap().push(amount);
        }
    }));

    let report = batch::run(
        input_dir.path(),
        out_dir.path(),
        ConversionDirection::MmcifToPdb,
        &ConversionConfig::default(),
        &reporter,
    )
    .unwrap();
    drop(reporter);

    assert_eq!(report.len(), 3);
    assert_eq!(report.failure_count(), 1);
    let (failed_path, failure) = report.failed().next().unwrap();
    assert_eq!(failed_path, input_dir.path().join("crowded.cif"));
    assert!(failure.is_out_of_chains());

    let mut written: Vec<String> = fs::read_dir(out_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, ["first.pdb", "second.pdb"]);

    assert_eq!(events.into_inner().unwrap(), [1, 1, 1]);
}

#[test]
fn batch_pdb_to_mmcif_creates_missing_output_directory() {
    let input_dir = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    let out_dir = scratch.path().join("nested").join("out");
    fs::copy(fixture("two_chains.pdb"), input_dir.path().join("7abc.pdb")).unwrap();

    let report = batch::run(
        input_dir.path(),
        &out_dir,
        ConversionDirection::PdbToMmcif,
        &ConversionConfig::default(),
        &ProgressReporter::new(),
    )
    .unwrap();

    assert!(report.is_success());
    let produced: Vec<_> = report.succeeded().map(|r| r.output.clone()).collect();
    assert_eq!(produced, [out_dir.join("7abc.cif")]);
    assert!(out_dir.join("7abc.cif").is_file());
}

use super::error::StructureIoError;
use std::path::Path;
use tracing::trace;

/// Runs `write` against a temporary sibling of `destination` and moves the
/// result into place only if it succeeded. On failure the temporary file is
/// removed and `destination` is left untouched.
pub(crate) fn write_atomically<F>(destination: &Path, write: F) -> Result<(), StructureIoError>
where
    F: FnOnce(&Path) -> Result<(), StructureIoError>,
{
    let dir = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let suffix = destination
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    let temp_path = tempfile::Builder::new()
        .prefix(".molconv-")
        .suffix(&suffix)
        .tempfile_in(dir)?
        .into_temp_path();
    trace!("Writing to temporary file {:?}", &temp_path);

    write(&temp_path)?;

    temp_path
        .persist(destination)
        .map_err(|e| StructureIoError::Io(e.error))?;
    Ok(())
}

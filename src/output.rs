use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::codegen::GeneratedSource;

/// Writes `source` to `path` as a single unit.
///
/// Returns `false` without touching the file when it already holds exactly the
/// same text, so cargo does not see a fresh mtime and rebuild dependents.
#[instrument(level = "debug", skip(source))]
pub fn write_if_changed(path: &Path, source: &GeneratedSource) -> io::Result<bool> {
    let text = source.to_string();

    match std::fs::read(path) {
        Ok(existing) if existing == text.as_bytes() => {
            tracing::debug!("{} is up to date", path.display());
            return Ok(false);
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, text)?;
    tracing::debug!("wrote {} bytes to {}", source.len(), path.display());

    Ok(true)
}

/// Build script helper: writes `source` to `$OUT_DIR/file_name` and returns
/// the path, ready for `include!`.
pub fn emit_to_out_dir(file_name: &str, source: &GeneratedSource) -> io::Result<PathBuf> {
    let out_dir = std::env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "OUT_DIR is not set; emit_to_out_dir must run inside a build script",
        )
    })?;

    let path = Path::new(&out_dir).join(file_name);
    write_if_changed(&path, source)?;

    Ok(path)
}

//! Artifact output to the filesystem.

use crate::artifact::Artifact;
use crate::error::CodegenError;
use std::fs;
use std::path::Path;

/// Writes one `<label>.ts` file per artifact into `dir`.
///
/// The directory is created if absent and existing files are overwritten,
/// so regenerating over the same schema leaves identical output behind.
/// Artifact content is written without transformation.
///
/// # Errors
/// Returns `CodegenError::Io` if the directory or a file cannot be written.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<(), CodegenError> {
    fs::create_dir_all(dir)?;

    for artifact in artifacts {
        let path = dir.join(artifact.file_name());
        fs::write(&path, &artifact.content)?;
        tracing::debug!("wrote {}", path.display());
    }

    Ok(())
}

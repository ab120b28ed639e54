use crate::shared::error::SbomExportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Replaces path separators so a report name stays a single file name
/// segment inside the output directory.
///
/// Report names come from project display names and from archive member
/// names returned by the service, neither of which is trusted.
pub fn sanitize_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet is accepted.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            );
        }
    };

    if metadata.is_symlink() {
        return Err(SbomExportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} operations on symbolic links are not allowed",
                operation
            ),
            hint: "Remove the symbolic link or choose another output directory".to_string(),
        }
        .into());
    }

    Ok(())
}

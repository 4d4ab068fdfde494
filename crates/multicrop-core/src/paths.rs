//! Output naming and selection validation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::MulticropConfig;
use crate::error::MulticropError;

/// Derive the output path for `source` by prefixing its file name.
///
/// `dir/name.ext` becomes `dir/{prefix}name.ext`; the directory is kept.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use multicrop_core::paths::derive_output_path;
///
/// let out = derive_output_path(Path::new("/a/b/cat.png"), "Multicropped-");
/// assert_eq!(out, Path::new("/a/b/Multicropped-cat.png"));
/// ```
pub fn derive_output_path(source: &Path, prefix: &str) -> PathBuf {
    let mut file_name = OsString::from(prefix);
    if let Some(name) = source.file_name() {
        file_name.push(name);
    }
    source.with_file_name(file_name)
}

/// Check that a file selection is usable before anything is decoded.
///
/// # Errors
///
/// - `MulticropError::NoFilesSelected` for an empty selection
/// - `MulticropError::UnsupportedExtension` for the first path whose
///   extension is missing or not in the allow-list
pub fn validate_selection<P: AsRef<Path>>(
    paths: &[P],
    config: &MulticropConfig,
) -> Result<(), MulticropError> {
    if paths.is_empty() {
        return Err(MulticropError::NoFilesSelected);
    }

    for path in paths {
        let path = path.as_ref();
        let allowed = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| config.allows_extension(ext));
        if !allowed {
            return Err(MulticropError::UnsupportedExtension {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

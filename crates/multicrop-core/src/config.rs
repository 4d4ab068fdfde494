//! Session settings.

use serde::{Deserialize, Serialize};

/// Prefix inserted before the file name of every output.
pub const DEFAULT_OUTPUT_PREFIX: &str = "Multicropped-";

/// Extensions accepted when files are selected.
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Settings for a crop session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MulticropConfig {
    /// Prefix for output file names
    pub output_prefix: String,
    /// Lowercase extensions accepted by selection validation
    pub allowed_extensions: Vec<String>,
    /// JPEG quality (1 to 100) for JPEG sources
    pub jpeg_quality: u8,
}

impl Default for MulticropConfig {
    fn default() -> Self {
        Self {
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            jpeg_quality: 95,
        }
    }
}

impl MulticropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check an extension against the allow-list, ignoring case.
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }
}

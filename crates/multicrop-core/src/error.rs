//! Error type for session and pipeline operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::CropRect;
use crate::transform::CropError;

/// Errors reported by the crop session.
///
/// Lower-level decode, encode and crop errors are folded in here with the
/// offending path attached, so batch reports can name the file that failed.
#[derive(Debug, Error)]
pub enum MulticropError {
    /// The file is missing, corrupt, or not an image.
    #[error("Cannot read image {}: {reason}", .path.display())]
    UnreadableImage { path: PathBuf, reason: String },

    /// The operation needs a loaded reference image.
    #[error("No reference image loaded")]
    NoReferenceImage,

    /// A crop was requested with no rectangle drawn.
    #[error("Nothing to crop: no rectangle selected")]
    NoActiveSelection,

    /// The drawn rectangle has zero width or height.
    #[error("Selection {0} is empty")]
    EmptySelection(CropRect),

    /// A recorded crop does not fit the image it is replayed on.
    #[error("Crop {rect} does not fit {width}x{height} image {}", .path.display())]
    CropOutOfBounds {
        path: PathBuf,
        rect: CropRect,
        width: u32,
        height: u32,
    },

    /// The output could not be encoded or written.
    #[error("Cannot write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    /// A selected file does not have an allowed image extension.
    #[error("Files selected must be images: {}", .path.display())]
    UnsupportedExtension { path: PathBuf },

    /// The file selection was empty.
    #[error("No files selected")]
    NoFilesSelected,
}

impl MulticropError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::UnreadableImage {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Write {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Attach a path to a crop failure.
    pub(crate) fn from_crop(path: impl Into<PathBuf>, err: CropError) -> Self {
        match err {
            CropError::EmptyRegion(rect) => Self::EmptySelection(rect),
            CropError::OutOfBounds {
                rect,
                width,
                height,
            } => Self::CropOutOfBounds {
                path: path.into(),
                rect,
                width,
                height,
            },
        }
    }

    /// Path of the file this error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::UnreadableImage { path, .. }
            | Self::CropOutOfBounds { path, .. }
            | Self::Write { path, .. }
            | Self::UnsupportedExtension { path } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MulticropError::unreadable("/a/b.png", "truncated");
        assert_eq!(err.to_string(), "Cannot read image /a/b.png: truncated");

        let err = MulticropError::EmptySelection(CropRect::new(3, 3, 3, 3));
        assert_eq!(err.to_string(), "Selection (3, 3, 3, 3) is empty");

        let err = MulticropError::UnsupportedExtension {
            path: PathBuf::from("notes.txt"),
        };
        assert_eq!(err.to_string(), "Files selected must be images: notes.txt");
    }

    #[test]
    fn test_from_crop_attaches_path() {
        let rect = CropRect::new(0, 0, 50, 50);
        let err = MulticropError::from_crop(
            "/a/small.png",
            CropError::OutOfBounds {
                rect,
                width: 40,
                height: 40,
            },
        );

        assert_eq!(err.path(), Some(std::path::Path::new("/a/small.png")));
        assert_eq!(
            err.to_string(),
            "Crop (0, 0, 50, 50) does not fit 40x40 image /a/small.png"
        );
    }

    #[test]
    fn test_path_absent_for_session_errors() {
        assert!(MulticropError::NoReferenceImage.path().is_none());
        assert!(MulticropError::NoActiveSelection.path().is_none());
    }
}

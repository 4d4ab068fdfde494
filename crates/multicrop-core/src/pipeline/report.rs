//! Per-file outcomes of batch operations.

use std::path::PathBuf;

use image::{DynamicImage, ImageFormat};

use crate::error::MulticropError;

/// A cropped image paired with where it should be written.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    /// File the image was read from.
    pub source: PathBuf,
    /// File the image will be written to.
    pub output: PathBuf,
    /// Final cropped raster.
    pub image: DynamicImage,
    /// Encoding to write with, matching the source.
    pub format: ImageFormat,
}

/// One file that a batch step skipped.
#[derive(Debug)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub error: MulticropError,
}

/// Successes and failures of a batch step, in input order.
#[derive(Debug)]
pub struct BatchReport<T> {
    pub succeeded: Vec<T>,
    pub failed: Vec<BatchFailure>,
}

impl<T> Default for BatchReport<T> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<T> BatchReport<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_success(&mut self, item: T) {
        self.succeeded.push(item);
    }

    pub fn push_failure(&mut self, path: impl Into<PathBuf>, error: MulticropError) {
        self.failed.push(BatchFailure {
            path: path.into(),
            error,
        });
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Human-readable outcome, e.g. `2 of 3 saved; failures: /a/b.png (...)`.
    pub fn summary(&self, verb: &str) -> String {
        let mut summary = format!("{} of {} {}", self.succeeded.len(), self.total(), verb);
        if !self.failed.is_empty() {
            let failures: Vec<String> = self
                .failed
                .iter()
                .map(|failure| format!("{} ({})", failure.path.display(), failure.error))
                .collect();
            summary.push_str("; failures: ");
            summary.push_str(&failures.join(", "));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_all_succeeded() {
        let mut report = BatchReport::new();
        report.push_success(1);
        report.push_success(2);

        assert!(report.is_complete());
        assert_eq!(report.summary("saved"), "2 of 2 saved");
    }

    #[test]
    fn test_summary_with_failures() {
        let mut report = BatchReport::new();
        report.push_success(1);
        report.push_failure("/a/bad.png", MulticropError::unreadable("/a/bad.png", "corrupt"));

        assert!(!report.is_complete());
        assert_eq!(report.total(), 2);
        assert_eq!(
            report.summary("saved"),
            "1 of 2 saved; failures: /a/bad.png (Cannot read image /a/bad.png: corrupt)"
        );
        assert_eq!(report.failed[0].path, PathBuf::from("/a/bad.png"));
    }

    #[test]
    fn test_empty_report() {
        let report: BatchReport<()> = BatchReport::default();
        assert_eq!(report.total(), 0);
        assert_eq!(report.summary("cropped"), "0 of 0 cropped");
    }
}

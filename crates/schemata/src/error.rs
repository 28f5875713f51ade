//! Error types for Schemata operations.
//!
//! [`SchemataError`] covers every way a render call can fail, from a bad
//! descriptor to an unwritable output path. Each variant carries a short
//! remediation hint, see [`SchemataError::hint`].

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for Schemata operations.
#[derive(Debug, Error)]
pub enum SchemataError {
    #[error("Invalid shape #{index} ({label:?}): {reason}")]
    InvalidShape {
        index: usize,
        label: String,
        reason: String,
    },

    #[error("Invalid connector #{index}: {reason}")]
    InvalidConnector { index: usize, reason: String },

    #[error("Invalid annotation #{index}: {reason}")]
    InvalidAnnotation { index: usize, reason: String },

    #[error("Invalid legend entry #{index}: {reason}")]
    InvalidLegend { index: usize, reason: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("The {backend} backend is not available in this build")]
    DependencyMissing {
        backend: &'static str,
        feature: &'static str,
    },

    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SchemataError {
    /// Returns a short remediation hint for this error.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::InvalidShape { .. } => {
                "fix the shape's size or position: coordinates must be finite and width/height positive"
            }
            Self::InvalidConnector { .. } => "fix the connector's endpoints: they must be finite",
            Self::InvalidAnnotation { .. } => "fix the annotation's position or color",
            Self::InvalidLegend { .. } => "fix the legend entry's color",
            Self::Render(_) => "check the output path and format (.png or .svg)",
            Self::DependencyMissing { .. } => {
                "rebuild with the `png` cargo feature enabled, or write an .svg file instead"
            }
            Self::Io { .. } => "make sure the output directory exists and is writable",
            Self::Config(_) => "fix the configuration file",
        }
    }
}

impl From<crate::export::Error> for SchemataError {
    fn from(error: crate::export::Error) -> Self {
        Self::Render(error.to_string())
    }
}

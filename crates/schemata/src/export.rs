//! Export backends that turn an assembled SVG document into file bytes.
//!
//! # Pipeline Position
//!
//! ```text
//! Descriptors
//!     ↓ validate
//! Canvas (projected, layered SVG nodes)
//!     ↓ into_document
//! svg::Document
//!     ↓ export (this module)
//! Output bytes → file
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: the document serialized as-is
//! - `png`: rasterized through `resvg`, only with the `png` cargo feature
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`SchemataError::Render`] at the crate boundary.
//!
//! [`SchemataError::Render`]: crate::SchemataError::Render

#[cfg(feature = "png")]
pub mod png;
pub mod svg;

use std::{fmt, path::Path};

/// Abstraction for export backends.
pub trait Exporter {
    /// Serializes `document` into the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the document cannot be converted.
    fn export_document(&self, document: &::svg::Document) -> Result<Vec<u8>, Error>;
}

/// Output file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Picks the format from a path's extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] for a missing or unsupported extension.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("png") => Ok(Self::Png),
            Some(other) => Err(Error::Render(format!(
                "unsupported output format `.{other}`, expected .png or .svg"
            ))),
            None => Err(Error::Render(format!(
                "output path `{}` has no extension, expected .png or .svg",
                path.display()
            ))),
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out/flow.png")).unwrap(),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("flow.SVG")).unwrap(),
            OutputFormat::Svg
        );
    }

    #[test]
    fn test_unknown_extension_is_render_error() {
        let err = OutputFormat::from_path(Path::new("flow.jpg")).unwrap_err();
        assert!(err.to_string().contains(".jpg"));

        let err = OutputFormat::from_path(Path::new("flow")).unwrap_err();
        assert!(err.to_string().contains("no extension"));
    }

    #[test]
    fn test_format_display_matches_extension() {
        assert_eq!(OutputFormat::Png.to_string(), "png");
        assert_eq!(OutputFormat::Svg.extension(), "svg");
    }
}

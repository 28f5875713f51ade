//! SVG export backend.

use log::debug;

use super::{Error, Exporter};

/// Writes the document as SVG text.
///
/// Attribute order and number formatting come straight from the document, so
/// the same diagram always serializes to the same bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgExporter;

impl SvgExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for SvgExporter {
    fn export_document(&self, document: &::svg::Document) -> Result<Vec<u8>, Error> {
        let content = document.to_string();
        debug!(bytes = content.len(); "SVG document serialized");
        Ok(content.into_bytes())
    }
}

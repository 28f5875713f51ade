//! PNG export backend, rasterizing the SVG document with `resvg`.

use log::{debug, info};
use resvg::{tiny_skia, usvg};

use super::{Error, Exporter};

/// Rasterizes the document at `pixel_ratio` device pixels per SVG pixel.
#[derive(Debug, Clone, Copy)]
pub struct PngExporter {
    pixel_ratio: f32,
}

impl PngExporter {
    pub fn new(pixel_ratio: f32) -> Self {
        Self { pixel_ratio }
    }

    fn raster_size(&self, tree: &usvg::Tree) -> Result<(u32, u32), Error> {
        let size = tree.size().to_int_size();
        let width = (size.width() as f32 * self.pixel_ratio).ceil();
        let height = (size.height() as f32 * self.pixel_ratio).ceil();

        if !width.is_finite() || !height.is_finite() || width < 1.0 || height < 1.0 {
            return Err(Error::Render(format!(
                "cannot rasterize a {width}x{height} image; check canvas.pixel_ratio"
            )));
        }
        if width > u32::MAX as f32 || height > u32::MAX as f32 {
            return Err(Error::Render(format!(
                "raster size {width}x{height} exceeds supported limits"
            )));
        }

        Ok((width as u32, height as u32))
    }
}

impl Exporter for PngExporter {
    fn export_document(&self, document: &::svg::Document) -> Result<Vec<u8>, Error> {
        let content = document.to_string();

        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();

        let tree = usvg::Tree::from_str(&content, &options)
            .map_err(|err| Error::Render(format!("failed to parse generated SVG: {err}")))?;

        let (width, height) = self.raster_size(&tree)?;
        info!(width, height, pixel_ratio = self.pixel_ratio; "Rasterizing PNG");

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            Error::Render(format!("failed to allocate a {width}x{height} surface"))
        })?;

        let transform = tiny_skia::Transform::from_scale(self.pixel_ratio, self.pixel_ratio);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let bytes = pixmap
            .encode_png()
            .map_err(|err| Error::Render(format!("failed to encode PNG: {err}")))?;
        debug!(bytes = bytes.len(); "PNG encoded");

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn square(size: u32) -> ::svg::Document {
        ::svg::Document::new()
            .set("viewBox", format!("0 0 {size} {size}"))
            .set("width", size)
            .set("height", size)
            .add(
                ::svg::node::element::Rectangle::new()
                    .set("width", size)
                    .set("height", size)
                    .set("fill", "#4ECDC4"),
            )
    }

    #[test]
    fn test_export_writes_png_signature() {
        let bytes = PngExporter::new(1.0).export_document(&square(20)).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_pixel_ratio_scales_raster() {
        let exporter = PngExporter::new(2.0);
        let content = square(20).to_string();
        let tree = usvg::Tree::from_str(&content, &usvg::Options::default()).unwrap();
        assert_eq!(exporter.raster_size(&tree).unwrap(), (40, 40));
    }

    #[test]
    fn test_zero_pixel_ratio_is_rejected() {
        let err = PngExporter::new(0.0).export_document(&square(20)).unwrap_err();
        assert!(err.to_string().contains("pixel_ratio"));
    }
}

//! Rasterizing rendered SVG documents.

use log::debug;
use resvg::{tiny_skia, usvg};

use crate::Error;

/// Renders an SVG document to PNG bytes, one pixel per SVG unit.
///
/// Labels are drawn with the system fonts.
pub(crate) fn rasterize(svg: &str) -> Result<Vec<u8>, Error> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| Error::Raster(format!("generated SVG did not parse: {err}")))?;

    let size = tree.size().to_int_size();
    debug!(width = size.width(), height = size.height(); "Rasterizing document");
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        Error::Raster(format!(
            "cannot allocate a {}x{} image",
            size.width(),
            size.height()
        ))
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| Error::Raster(format!("PNG encoding failed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_rasterize_writes_png() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20" viewBox="0 0 40 20"><path d="M 0 10 L 40 10" stroke="red"/></svg>"#;
        let png = rasterize(svg).unwrap();
        assert!(png.starts_with(PNG_SIGNATURE));

        // IHDR carries the size right after the signature and chunk header
        assert_eq!(&png[16..20], &40u32.to_be_bytes());
        assert_eq!(&png[20..24], &20u32.to_be_bytes());
    }

    #[test]
    fn test_rasterize_rejects_garbage() {
        assert!(matches!(rasterize("not svg"), Err(Error::Raster(_))));
    }
}

//! Writing rendered boards to disk.

use std::{io::Write, path::Path};

use log::{error, info};
use tempfile::NamedTempFile;

use crate::Error;

mod png;
mod svg;

pub use self::svg::SvgSurface;
pub(crate) use self::png::rasterize;

/// Output formats [`Board::save`](crate::board::Board::save) can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    /// The SVG document rasterized at one pixel per SVG unit.
    Png,
}

/// Picks the output format from the file extension, case-insensitively.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown or missing extensions.
///
/// ```
/// # use std::path::Path;
/// # use optika::export::{OutputFormat, format_for_path};
/// assert_eq!(format_for_path(Path::new("setup.SVG")).unwrap(), OutputFormat::Svg);
/// assert_eq!(format_for_path(Path::new("setup.png")).unwrap(), OutputFormat::Png);
/// assert!(format_for_path(Path::new("setup.pdf")).is_err());
/// ```
pub fn format_for_path(path: &Path) -> Result<OutputFormat, Error> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "svg" => Ok(OutputFormat::Svg),
        "png" => Ok(OutputFormat::Png),
        _ => Err(Error::UnsupportedFormat(extension)),
    }
}

/// Writes an already rendered document to `path`.
///
/// The bytes go to a temporary file in the target directory, which then
/// replaces `path`. A failed write leaves neither a partial file nor the
/// temporary one.
pub(crate) fn write_document(path: &Path, content: &[u8]) -> Result<(), Error> {
    let file_name = path.display().to_string();
    info!(file_name = file_name.as_str(), bytes = content.len(); "Writing document");

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = match NamedTempFile::new_in(directory) {
        Ok(file) => file,
        Err(err) => {
            error!(file_name = file_name.as_str(), err:err; "Failed to create output file");
            return Err(Error::IoFailure(err));
        }
    };

    if let Err(err) = file.write_all(content) {
        error!(file_name = file_name.as_str(), err:err; "Failed to write document content");
        return Err(Error::IoFailure(err));
    }

    if let Err(err) = file.persist(path) {
        error!(file_name = file_name.as_str(), err:err; "Failed to move document into place");
        return Err(Error::IoFailure(err.error));
    }

    Ok(())
}

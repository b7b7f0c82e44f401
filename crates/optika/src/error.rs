//! Error types for Optika operations.

use std::io;

use thiserror::Error;

use optika_core::{geometry::GeometryError, identifier::Id};

/// The main error type for Optika operations.
///
/// A failed `resolve`, `render` or `save` never leaves a board altered, and
/// a failed `save` never leaves a partially written file behind.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot compute bounds of empty geometry")]
    EmptyGeometry,

    #[error("unknown component kind `{0}`")]
    UnknownComponentKind(String),

    #[error("anchor position {t} on beam `{beam}` is outside [0, 1]")]
    AnchorOutOfRange { beam: Id, t: f64 },

    #[error("anchor references `{0}`, which is not on the board")]
    DanglingAnchor(Id),

    #[error("unsupported output format `{0}`, expected `svg` or `png`")]
    UnsupportedFormat(String),

    #[error("failed to rasterize: {0}")]
    Raster(String),

    #[error("I/O error: {0}")]
    IoFailure(#[from] io::Error),

    #[error("invalid wavelength {0} nm, must be finite and positive")]
    InvalidWavelength(f64),

    #[error("section ratio must not sum to zero")]
    InvalidRatio,

    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<GeometryError> for Error {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::EmptyGeometry => Self::EmptyGeometry,
            GeometryError::DegenerateRatio => Self::InvalidRatio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_errors_convert() {
        assert!(matches!(
            Error::from(GeometryError::EmptyGeometry),
            Error::EmptyGeometry
        ));
        assert!(matches!(
            Error::from(GeometryError::DegenerateRatio),
            Error::InvalidRatio
        ));
    }

    #[test]
    fn test_messages_name_the_culprit() {
        let err = Error::DanglingAnchor(Id::new("ghost_beam"));
        assert!(err.to_string().contains("ghost_beam"));

        let err = Error::AnchorOutOfRange {
            beam: Id::new("probe"),
            t: 1.5,
        };
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("probe"));

        let err = Error::UnsupportedFormat("pdf".to_string());
        assert!(err.to_string().contains("pdf"));
    }
}

//! Catalog loading and validation errors.

use orrery_orbit::ElementsError;

/// Errors that can occur when loading or validating a body catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read catalog: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse catalog: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// A body's orbital elements are outside the solver's domain.
    #[error("body `{name}` has invalid orbital elements: {source}")]
    InvalidElements {
        name: String,
        #[source]
        source: ElementsError,
    },

    /// Two entries (bodies or moons of the same parent) share a name.
    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    /// A planet or comet without orbital elements.
    #[error("body `{0}` has no orbital elements")]
    MissingElements(String),

    /// A star with orbital elements, or more than one star.
    #[error("star `{0}` must be unique and must not carry orbital elements")]
    InvalidStar(String),

    /// A moon with a non-positive period or distance.
    #[error("moon `{moon}` of `{body}` is invalid: {reason}")]
    InvalidMoon {
        body: String,
        moon: String,
        reason: &'static str,
    },
}

//! Orbital element validation errors.

/// Reasons a set of orbital elements falls outside the solver's domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElementsError {
    /// Semi-major axis must be finite and strictly positive.
    #[error("semi-major axis must be positive, got {0} AU")]
    SemiMajorAxis(f64),

    /// Only closed orbits (0 <= e < 1) are supported.
    #[error("eccentricity must be in [0, 1), got {0}")]
    Eccentricity(f64),

    /// Orbital period must be finite and strictly positive.
    #[error("orbital period must be positive, got {0} years")]
    Period(f64),

    /// An angular element is NaN or infinite.
    #[error("angle `{name}` is not finite")]
    NonFiniteAngle {
        /// Which element was rejected.
        name: &'static str,
    },
}

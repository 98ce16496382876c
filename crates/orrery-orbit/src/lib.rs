//! Keplerian orbital mechanics for the orrery.
//!
//! Converts six classical orbital elements plus an instant in time into a
//! heliocentric position in an ecliptic-like frame. Everything in this crate is
//! a pure function of its inputs: no I/O, no hidden state, safe to call from
//! any thread.
//!
//! The pipeline for one evaluation:
//!
//! 1. Days since J2000 ([`epoch`]).
//! 2. Mean anomaly propagated with the catalog period ([`epoch`]).
//! 3. Eccentric anomaly from Kepler's equation, fixed 10 Newton steps ([`kepler`]).
//! 4. True anomaly and radius, then rotation into the ecliptic frame ([`frame`]).
//!
//! Moons do not go through this pipeline; see [`moon`].

pub mod elements;
pub mod epoch;
pub mod error;
pub mod frame;
pub mod kepler;
pub mod moon;
pub mod position;
pub mod sampler;

pub use elements::OrbitalElements;
pub use epoch::{
    DAYS_PER_YEAR, J2000, J2000_UNIX_DAYS, days_since_j2000, days_since_unix_epoch,
    instant_after_days, mean_anomaly_at, mean_motion_deg_per_day, normalize_degrees,
};
pub use error::ElementsError;
pub use frame::{DisplayFrame, OrbitalFrame, ecliptic_to_display};
pub use kepler::{KEPLER_ITERATIONS, kepler_residual, orbital_radius, solve_kepler, true_anomaly};
pub use moon::{VisualBand, moon_angle, moon_offset};
pub use position::{OrbitalState, evaluate, evaluate_days, orbital_state};
pub use sampler::{sample_circle, sample_ellipse, sample_orbit};

/// A position in the solver's ecliptic frame, in AU.
pub type Position3D = glam::DVec3;

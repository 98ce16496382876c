//! Body catalog for the orrery.
//!
//! A static table of named bodies. Each record splits into physics-only
//! [`OrbitalElements`](orrery_orbit::OrbitalElements), consumed by the orbit
//! solver, and [`DisplayMetadata`], consumed by rendering and UI. The table is
//! built in, or loaded from a RON file and validated at load time.

mod body;
mod builtin;
mod catalog;
mod error;

pub use body::{BodyClass, BodyRecord, DisplayMetadata, MoonRecord};
pub use builtin::{comets, planets};
pub use catalog::Catalog;
pub use error::CatalogError;

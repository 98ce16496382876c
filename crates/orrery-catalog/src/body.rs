//! Catalog records: physics and presentation kept in separate structs.

use orrery_orbit::OrbitalElements;
use serde::{Deserialize, Serialize};

/// Broad category of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyClass {
    /// The central star. Fixed at the origin, carries no orbital elements.
    Star,
    /// A planet, possibly with moons.
    Planet,
    /// A comet on an eccentric heliocentric orbit.
    Comet,
}

/// Everything the render and UI layers need that the orbit solver does not.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayMetadata {
    /// Visual size relative to Earth. `None` when the renderer sizes the body
    /// itself (the Sun).
    pub size: Option<f64>,
    /// Tint as `0xRRGGBB`.
    pub color: u32,
    /// Texture file name under the texture root.
    pub texture: Option<String>,
    /// Short category label shown under the name, e.g. "Periodic Comet".
    pub kind: Option<String>,
    /// Free-form description for the detail panel.
    pub description: Option<String>,
    /// Fixed distance label overriding the semi-major axis, e.g. "0 AU".
    pub distance_label: Option<String>,
    /// Draw a ring system around the body.
    pub has_rings: bool,
}

/// A moon. Placed with the circular approximation, never with Kepler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoonRecord {
    pub name: String,
    /// Visual size relative to Earth.
    pub size: f64,
    /// Real mean distance from the parent in AU.
    pub distance: f64,
    /// Orbital period in Julian years.
    pub period: f64,
    /// Tint as `0xRRGGBB`.
    pub color: u32,
    #[serde(default)]
    pub texture: Option<String>,
}

/// One named entry in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    pub name: String,
    pub class: BodyClass,
    /// Heliocentric elements; `None` only for the star.
    #[serde(default)]
    pub elements: Option<OrbitalElements>,
    #[serde(default)]
    pub display: DisplayMetadata,
    #[serde(default)]
    pub moons: Vec<MoonRecord>,
}

impl BodyRecord {
    /// Look up a moon of this body by name.
    pub fn moon(&self, name: &str) -> Option<&MoonRecord> {
        self.moons.iter().find(|m| m.name == name)
    }

    /// Real distances of every moon, in catalog order.
    pub fn moon_distances(&self) -> Vec<f64> {
        self.moons.iter().map(|m| m.distance).collect()
    }
}

//! Orbital-plane to ecliptic rotation, and the hand-off to display axes.

use glam::DVec3;

use crate::elements::OrbitalElements;

/// Precomputed rotation from an orbit's perifocal plane into the ecliptic frame.
///
/// Built once per element set; applying it is a handful of multiplies, which
/// matters for orbit-line sampling where the same rotation is reused hundreds
/// of times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalFrame {
    cos_i: f64,
    sin_i: f64,
    cos_o: f64,
    sin_o: f64,
    cos_w: f64,
    sin_w: f64,
}

impl OrbitalFrame {
    /// Build the rotation from inclination, node longitude and argument of
    /// periapsis (all in degrees on the elements).
    pub fn from_elements(elements: &OrbitalElements) -> Self {
        let (sin_i, cos_i) = elements.inclination.to_radians().sin_cos();
        let (sin_o, cos_o) = elements.longitude_ascending.to_radians().sin_cos();
        let (sin_w, cos_w) = elements.argument_periapsis.to_radians().sin_cos();
        Self {
            cos_i,
            sin_i,
            cos_o,
            sin_o,
            cos_w,
            sin_w,
        }
    }

    /// Rotate an in-plane point `(x_orb, y_orb)` into the ecliptic frame.
    pub fn to_ecliptic(&self, x_orb: f64, y_orb: f64) -> DVec3 {
        let Self {
            cos_i,
            sin_i,
            cos_o,
            sin_o,
            cos_w,
            sin_w,
        } = *self;

        let x = x_orb * (cos_w * cos_o - sin_w * sin_o * cos_i)
            - y_orb * (sin_w * cos_o + cos_w * sin_o * cos_i);
        let y = x_orb * (cos_w * sin_o + sin_w * cos_o * cos_i)
            - y_orb * (sin_w * sin_o - cos_w * cos_o * cos_i);
        let z = x_orb * (sin_w * sin_i) + y_orb * (cos_w * sin_i);

        DVec3::new(x, y, z)
    }
}

/// Permute ecliptic axes (Z toward the ecliptic pole) into Y-up display axes.
///
/// `(x, y, z) -> (x, z, -y)`.
pub fn ecliptic_to_display(p: DVec3) -> DVec3 {
    DVec3::new(p.x, p.z, -p.y)
}

/// Uniform scale plus axis permutation applied by the render driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayFrame {
    /// Display units per AU.
    pub scale: f64,
}

impl DisplayFrame {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Map an ecliptic position in AU to display coordinates.
    pub fn to_display(&self, ecliptic: DVec3) -> DVec3 {
        ecliptic_to_display(ecliptic) * self.scale
    }
}

impl Default for DisplayFrame {
    fn default() -> Self {
        Self { scale: 10.0 }
    }
}

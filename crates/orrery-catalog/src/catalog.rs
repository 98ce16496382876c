//! The body catalog: lookup, RON persistence and load-time validation.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::body::{BodyClass, BodyRecord};
use crate::builtin;
use crate::error::CatalogError;

/// An ordered, validated table of bodies.
///
/// Read-only once built: the render driver and the UI borrow records from it
/// but never mutate them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    bodies: Vec<BodyRecord>,
}

impl Catalog {
    /// Build and validate a catalog from records.
    pub fn new(bodies: Vec<BodyRecord>) -> Result<Self, CatalogError> {
        let catalog = Self { bodies };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in Solar System table.
    pub fn builtin() -> Self {
        Self {
            bodies: builtin::all_bodies(),
        }
    }

    /// Parse and validate a catalog from RON text.
    pub fn from_ron_str(contents: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = ron::from_str(contents).map_err(CatalogError::ParseError)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(CatalogError::ReadError)?;
        let catalog = Self::from_ron_str(&contents)?;
        log::info!(
            "Loaded catalog with {} bodies from {}",
            catalog.bodies.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Serialize as pretty RON, the format [`from_ron_str`](Self::from_ron_str) reads.
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, pretty)
    }

    /// Check every record: element domains, unique names, exactly one star at
    /// most, and sane moon parameters.
    ///
    /// Orbits with eccentricity near 1 are accepted but logged, since the
    /// fixed-iteration Kepler solver loses accuracy as e approaches 1.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        let mut star_seen = false;

        for body in &self.bodies {
            if !names.insert(body.name.as_str()) {
                return Err(CatalogError::DuplicateName(body.name.clone()));
            }

            match (body.class, &body.elements) {
                (BodyClass::Star, None) if !star_seen => star_seen = true,
                (BodyClass::Star, _) => return Err(CatalogError::InvalidStar(body.name.clone())),
                (_, None) => return Err(CatalogError::MissingElements(body.name.clone())),
                (_, Some(elements)) => {
                    elements
                        .validate()
                        .map_err(|source| CatalogError::InvalidElements {
                            name: body.name.clone(),
                            source,
                        })?;
                    if elements.is_near_parabolic() {
                        log::warn!(
                            "{} has eccentricity {}; Kepler solutions may be inaccurate",
                            body.name,
                            elements.eccentricity
                        );
                    }
                }
            }

            let mut moon_names = HashSet::new();
            for moon in &body.moons {
                if !moon_names.insert(moon.name.as_str()) {
                    return Err(CatalogError::DuplicateName(moon.name.clone()));
                }
                let reason = if !(moon.period.is_finite() && moon.period > 0.0) {
                    Some("period must be positive")
                } else if !(moon.distance.is_finite() && moon.distance > 0.0) {
                    Some("distance must be positive")
                } else {
                    None
                };
                if let Some(reason) = reason {
                    return Err(CatalogError::InvalidMoon {
                        body: body.name.clone(),
                        moon: moon.name.clone(),
                        reason,
                    });
                }
            }
        }
        Ok(())
    }

    /// All records in catalog order.
    pub fn bodies(&self) -> &[BodyRecord] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Look up a body by exact name.
    pub fn get(&self, name: &str) -> Option<&BodyRecord> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// The central star, if the catalog has one.
    pub fn star(&self) -> Option<&BodyRecord> {
        self.bodies.iter().find(|b| b.class == BodyClass::Star)
    }

    pub fn planets(&self) -> impl Iterator<Item = &BodyRecord> {
        self.bodies.iter().filter(|b| b.class == BodyClass::Planet)
    }

    pub fn comets(&self) -> impl Iterator<Item = &BodyRecord> {
        self.bodies.iter().filter(|b| b.class == BodyClass::Comet)
    }

    /// Names in the order the navigation list shows them: planets, then comets.
    pub fn navigation_order(&self) -> Vec<&str> {
        self.planets()
            .chain(self.comets())
            .map(|b| b.name.as_str())
            .collect()
    }

    /// Find the parent body of a moon by the moon's name.
    pub fn parent_of_moon(&self, moon: &str) -> Option<&BodyRecord> {
        self.bodies.iter().find(|b| b.moon(moon).is_some())
    }
}

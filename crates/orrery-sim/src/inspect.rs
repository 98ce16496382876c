//! Detail records, camera focus and picking.

use glam::DVec3;
use orrery_catalog::{BodyClass, BodyRecord, MoonRecord};

use crate::scene::{Scene, Selection};

/// Earth radius in km; catalog sizes are relative to it.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Camera distance used when focusing the star.
pub const STAR_FOCUS_DISTANCE: f64 = 25.0;
const FALLBACK_IMAGE: &str = "/textures/sun.jpg";

/// What the detail panel shows for one body or moon.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDetails {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub distance: String,
    pub radius: String,
    pub image: String,
    pub satellites: Vec<String>,
}

impl BodyDetails {
    pub fn for_body(record: &BodyRecord) -> Self {
        let display = &record.display;
        let distance = match (&display.distance_label, &record.elements) {
            (Some(label), _) => label.clone(),
            (None, Some(elements)) => format!("{} AU", elements.semi_major_axis),
            (None, None) => "N/A".to_string(),
        };
        Self {
            title: record.name.clone(),
            subtitle: display
                .kind
                .clone()
                .unwrap_or_else(|| "Celestial Body".to_string()),
            description: display
                .description
                .clone()
                .unwrap_or_else(|| "No description.".to_string()),
            distance,
            radius: radius_label(display.size),
            image: image_path(display.texture.as_deref()),
            satellites: record.moons.iter().map(|m| m.name.clone()).collect(),
        }
    }

    /// Moons carry no kind or description. Their distance from the parent is
    /// shown as the bare catalog number.
    pub fn for_moon(moon: &MoonRecord) -> Self {
        Self {
            title: moon.name.clone(),
            subtitle: "Celestial Body".to_string(),
            description: "No description.".to_string(),
            distance: moon.distance.to_string(),
            radius: radius_label(Some(moon.size)),
            image: image_path(moon.texture.as_deref()),
            satellites: Vec::new(),
        }
    }
}

fn radius_label(size: Option<f64>) -> String {
    match size {
        Some(size) => format!("{} km", (size * EARTH_RADIUS_KM).round() as i64),
        None => "N/A".to_string(),
    }
}

fn image_path(texture: Option<&str>) -> String {
    match texture {
        Some(texture) => format!("/textures/{texture}"),
        None => FALLBACK_IMAGE.to_string(),
    }
}

/// Camera placement for a focus transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: DVec3,
    pub target: DVec3,
}

/// Look at `world_position` from `(d, d/2, d)` away, `d = max(size, 0.1) * 4`.
///
/// `size` defaults to 1. The star always uses [`STAR_FOCUS_DISTANCE`].
pub fn focus_pose(world_position: DVec3, size: Option<f64>, is_star: bool) -> CameraPose {
    let distance = if is_star {
        STAR_FOCUS_DISTANCE
    } else {
        size.unwrap_or(1.0).max(0.1) * 4.0
    };
    CameraPose {
        position: world_position + DVec3::new(distance, distance / 2.0, distance),
        target: world_position,
    }
}

/// Diameter in pixels of the size-comparison disc.
pub fn comparison_diameter_px(size: Option<f64>) -> f64 {
    (size.unwrap_or(1.0) * 100.0).clamp(10.0, 200.0)
}

/// Ray-sphere intersection. Returns `(t_near, t_far)`, or `None` on a miss.
///
/// `dir` must be normalized.
pub fn ray_sphere_intersect(origin: DVec3, dir: DVec3, center: DVec3, radius: f64) -> Option<(f64, f64)> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    Some((-b - sqrt_disc, -b + sqrt_disc))
}

/// A successful pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub selection: Selection,
    /// Distance along the ray to the first surface hit.
    pub distance: f64,
}

impl Scene {
    /// Catalog-backed details for a selection.
    pub fn details(&self, selection: Selection) -> Option<BodyDetails> {
        let bodies = self.catalog().bodies();
        match selection {
            Selection::Body(index) => bodies.get(index).map(BodyDetails::for_body),
            Selection::Moon { body, moon } => bodies
                .get(body)
                .and_then(|b| b.moons.get(moon))
                .map(BodyDetails::for_moon),
        }
    }

    /// Camera pose that frames a selection at its current position.
    pub fn focus(&self, selection: Selection) -> Option<CameraPose> {
        let position = self.world_position(selection)?;
        let bodies = self.catalog().bodies();
        let (size, is_star) = match selection {
            Selection::Body(index) => {
                let body = bodies.get(index)?;
                (body.display.size, body.class == BodyClass::Star)
            }
            Selection::Moon { body, moon } => (Some(bodies.get(body)?.moons.get(moon)?.size), false),
        };
        Some(focus_pose(position, size, is_star))
    }

    /// Nearest body or moon whose rendered sphere the ray hits.
    ///
    /// A ray starting inside a sphere hits it at distance 0.
    pub fn pick(&self, origin: DVec3, direction: DVec3) -> Option<PickHit> {
        let dir = direction.try_normalize()?;
        let mut best: Option<PickHit> = None;

        let mut consider = |selection: Selection, center: DVec3, radius: f64| {
            let Some((near, far)) = ray_sphere_intersect(origin, dir, center, radius) else {
                return;
            };
            if far < 0.0 {
                return;
            }
            let distance = near.max(0.0);
            if best.is_none_or(|hit| distance < hit.distance) {
                best = Some(PickHit {
                    selection,
                    distance,
                });
            }
        };

        for (index, body) in self.bodies().iter().enumerate() {
            consider(Selection::Body(index), body.world_position(), body.radius);
            for (moon_index, moon) in body.moons.iter().enumerate() {
                consider(
                    Selection::Moon {
                        body: index,
                        moon: moon_index,
                    },
                    moon.world_position(),
                    moon.radius,
                );
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneSettings;
    use orrery_catalog::Catalog;
    use orrery_orbit::J2000;

    fn scene() -> Scene {
        Scene::new(Catalog::builtin(), SceneSettings::default(), J2000)
    }

    #[test]
    fn test_planet_details() {
        let scene = scene();
        let details = scene.details(scene.find("Mars").unwrap()).unwrap();
        assert_eq!(details.title, "Mars");
        assert_eq!(details.subtitle, "Celestial Body");
        assert_eq!(details.distance, "1.524 AU");
        assert_eq!(details.radius, "3377 km");
        assert_eq!(details.image, "/textures/mars.jpg");
        assert_eq!(details.satellites, vec!["Phobos", "Deimos"]);
    }

    #[test]
    fn test_sun_details() {
        let scene = scene();
        let details = scene.details(scene.find("Sun").unwrap()).unwrap();
        assert_eq!(details.subtitle, "Star");
        assert_eq!(details.distance, "0 AU");
        assert_eq!(details.radius, "N/A");
        assert_eq!(details.image, "/textures/sun.jpg");
    }

    #[test]
    fn test_moon_details() {
        let scene = scene();
        let details = scene.details(scene.find("Moon").unwrap()).unwrap();
        assert_eq!(details.subtitle, "Celestial Body");
        assert_eq!(details.description, "No description.");
        assert_eq!(details.distance, "0.00257");
        assert_eq!(details.radius, "1720 km");
        assert!(details.satellites.is_empty());
    }

    #[test]
    fn test_details_fallbacks() {
        let record = BodyRecord {
            name: "Nameless".to_string(),
            class: BodyClass::Planet,
            elements: None,
            display: Default::default(),
            moons: Vec::new(),
        };
        let details = BodyDetails::for_body(&record);
        assert_eq!(details.subtitle, "Celestial Body");
        assert_eq!(details.description, "No description.");
        assert_eq!(details.distance, "N/A");
        assert_eq!(details.radius, "N/A");
        assert_eq!(details.image, "/textures/sun.jpg");
    }

    #[test]
    fn test_focus_pose() {
        let target = DVec3::new(1.0, 2.0, 3.0);
        let pose = focus_pose(target, Some(2.0), false);
        assert_eq!(pose.target, target);
        assert_eq!(pose.position, target + DVec3::new(8.0, 4.0, 8.0));

        let tiny = focus_pose(DVec3::ZERO, Some(0.01), false);
        assert!((tiny.position - DVec3::new(0.4, 0.2, 0.4)).length() < 1e-12);

        let default = focus_pose(DVec3::ZERO, None, false);
        assert_eq!(default.position, DVec3::new(4.0, 2.0, 4.0));

        let star = focus_pose(DVec3::ZERO, Some(100.0), true);
        assert_eq!(star.position, DVec3::new(25.0, 12.5, 25.0));
    }

    #[test]
    fn test_scene_focus_follows_body() {
        let scene = scene();
        let selection = scene.find("Jupiter").unwrap();
        let pose = scene.focus(selection).unwrap();
        let position = scene.world_position(selection).unwrap();
        assert_eq!(pose.target, position);
        assert!((pose.position - position - DVec3::new(44.8, 22.4, 44.8)).length() < 1e-9);
    }

    #[test]
    fn test_comparison_diameter() {
        assert_eq!(comparison_diameter_px(Some(1.0)), 100.0);
        assert_eq!(comparison_diameter_px(Some(11.2)), 200.0);
        assert_eq!(comparison_diameter_px(Some(0.05)), 10.0);
        assert_eq!(comparison_diameter_px(None), 100.0);
    }

    #[test]
    fn test_ray_sphere_intersect() {
        let hit = ray_sphere_intersect(DVec3::new(0.0, 0.0, -10.0), DVec3::Z, DVec3::ZERO, 2.0);
        let (near, far) = hit.unwrap();
        assert!((near - 8.0).abs() < 1e-12);
        assert!((far - 12.0).abs() < 1e-12);

        assert!(ray_sphere_intersect(DVec3::new(5.0, 0.0, -10.0), DVec3::Z, DVec3::ZERO, 2.0).is_none());
    }

    #[test]
    fn test_pick_nearest() {
        let scene = scene();
        let earth = scene.body("Earth").unwrap().world_position();
        // Straight down onto Earth from above.
        let hit = scene.pick(earth + DVec3::new(0.0, 50.0, 0.0), -DVec3::Y).unwrap();
        assert_eq!(hit.selection, scene.find("Earth").unwrap());
        assert!((hit.distance - (50.0 - 0.3)).abs() < 1e-9);

        // From outside the system toward the origin the Sun is hit.
        let hit = scene.pick(DVec3::new(0.0, 100.0, 0.0), DVec3::new(0.0, -3.0, 0.0)).unwrap();
        assert_eq!(hit.selection, scene.find("Sun").unwrap());
    }

    #[test]
    fn test_pick_miss() {
        let scene = scene();
        assert!(scene.pick(DVec3::new(0.0, 100.0, 0.0), DVec3::Y).is_none());
        assert!(scene.pick(DVec3::ZERO, DVec3::ZERO).is_none());
    }
}

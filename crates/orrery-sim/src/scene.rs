//! Per-frame body transforms, spin and orbit lines.
//!
//! The scene is a flat list of body nodes in catalog order. Each orbiting body
//! has a *system* transform (translation only) that moons hang off; spin is
//! kept separate so it never drags the moons around. Moon world transforms are
//! composed explicitly as `system * local` every update.

use glam::{DAffine3, DQuat, DVec3, EulerRot};
use orrery_catalog::{BodyClass, BodyRecord, Catalog};
use orrery_config::SimConfig;
use orrery_orbit::{
    DisplayFrame, J2000_UNIX_DAYS, OrbitalElements, VisualBand, days_since_j2000, evaluate_days,
    moon_angle, moon_offset, sample_circle, sample_ellipse, sample_orbit,
};
use time::OffsetDateTime;
use tracing::debug;

use crate::clock::SimulationClock;

/// Rendered radius of every comet nucleus, in display units.
pub const COMET_RADIUS: f64 = 0.15;
/// Catalog size to rendered radius.
const SIZE_TO_RADIUS: f64 = 0.3;
const PLANET_MIN_RADIUS: f64 = 0.2;
const MOON_MIN_RADIUS: f64 = 0.05;

/// Planet spin per update is `PLANET_SPIN / period_years` radians.
const PLANET_SPIN: f64 = 0.005;
/// Comet tumble per update about x and y.
const COMET_TUMBLE: (f64, f64) = (0.01, 0.02);
const MOON_SPIN: f64 = 0.01;

/// Identifies a pickable node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Index into [`Scene::bodies`].
    Body(usize),
    /// Moon `moon` of body `body`.
    Moon { body: usize, moon: usize },
}

/// Scene settings lifted out of [`SimConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSettings {
    pub sun_size: f64,
    pub orbit_scale: f64,
    pub planet_scale: f64,
    pub orbit_steps: usize,
    pub comet_orbit_steps: usize,
    pub moon_orbit_segments: usize,
    pub show_labels: bool,
}

impl From<&SimConfig> for SceneSettings {
    fn from(config: &SimConfig) -> Self {
        Self {
            sun_size: config.sun_size,
            orbit_scale: config.orbit_scale,
            planet_scale: config.planet_scale,
            orbit_steps: config.orbit_steps,
            comet_orbit_steps: config.comet_orbit_steps,
            moon_orbit_segments: config.moon_orbit_segments,
            show_labels: config.show_labels,
        }
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self::from(&SimConfig::default())
    }
}

/// A star, planet or comet.
#[derive(Clone, Debug)]
pub struct BodyNode {
    pub name: String,
    pub class: BodyClass,
    elements: Option<OrbitalElements>,
    /// Rendered sphere radius in display units.
    pub radius: f64,
    /// Heliocentric ecliptic position in AU at the last update.
    pub ecliptic_position: DVec3,
    /// Translation of the body's system group in display units.
    pub system: DAffine3,
    /// Mesh rotation as XYZ Euler angles in radians.
    pub rotation: DVec3,
    /// Closed orbit polyline in display units. Empty for the star.
    pub orbit_line: Vec<DVec3>,
    pub moons: Vec<MoonNode>,
}

impl BodyNode {
    pub fn world_position(&self) -> DVec3 {
        self.system.translation
    }

    /// System translation followed by the body's own spin.
    pub fn mesh_transform(&self) -> DAffine3 {
        let r = self.rotation;
        self.system * DAffine3::from_quat(DQuat::from_euler(EulerRot::XYZ, r.x, r.y, r.z))
    }

    pub fn elements(&self) -> Option<&OrbitalElements> {
        self.elements.as_ref()
    }
}

/// A moon riding on its parent's system transform.
#[derive(Clone, Debug)]
pub struct MoonNode {
    pub name: String,
    /// Rendered sphere radius in display units.
    pub radius: f64,
    /// Visual distance from the parent center in display units.
    pub orbit_radius: f64,
    /// Orbital period in years.
    pub period: f64,
    /// Spin about the local Y axis in radians.
    pub spin: f64,
    /// Offset and spin relative to the parent's system.
    pub local: DAffine3,
    /// `parent.system * local` as of the last update.
    pub world: DAffine3,
    /// Guide circle in the parent's local frame.
    pub guide: Vec<DVec3>,
}

impl MoonNode {
    pub fn world_position(&self) -> DVec3 {
        self.world.translation
    }
}

/// All drawable state derived from a catalog and the simulation clock.
#[derive(Clone, Debug)]
pub struct Scene {
    catalog: Catalog,
    settings: SceneSettings,
    frame: DisplayFrame,
    bodies: Vec<BodyNode>,
    show_labels: bool,
}

impl Scene {
    /// Build every node and place it at `start`. Orbit lines are sampled from
    /// `start` as well.
    pub fn new(catalog: Catalog, settings: SceneSettings, start: OffsetDateTime) -> Self {
        let frame = DisplayFrame::new(settings.orbit_scale);
        let bodies = catalog
            .bodies()
            .iter()
            .map(|record| build_node(record, &settings))
            .collect();

        let mut scene = Self {
            catalog,
            settings,
            frame,
            bodies,
            show_labels: settings.show_labels,
        };
        scene.rebuild_orbit_lines(start);
        scene.place(days_since_j2000(start));

        debug!(
            "Scene built: {} bodies, {} moons",
            scene.bodies.len(),
            scene.bodies.iter().map(|b| b.moons.len()).sum::<usize>()
        );
        scene
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn display_frame(&self) -> DisplayFrame {
        self.frame
    }

    pub fn bodies(&self) -> &[BodyNode] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&BodyNode> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// One frame: advance spins, then place every node at the clock's instant.
    pub fn update(&mut self, clock: &SimulationClock) {
        for body in &mut self.bodies {
            match body.class {
                BodyClass::Star => {}
                BodyClass::Planet => {
                    if let Some(elements) = &body.elements {
                        body.rotation.y += PLANET_SPIN / elements.orbital_period;
                    }
                }
                BodyClass::Comet => {
                    body.rotation.x += COMET_TUMBLE.0;
                    body.rotation.y += COMET_TUMBLE.1;
                }
            }
            for moon in &mut body.moons {
                moon.spin += MOON_SPIN;
            }
        }
        self.place(clock.days_since_j2000());
    }

    /// Re-sample planet orbit lines from `start`. Comet and moon lines do not
    /// depend on the date and are rebuilt too so every line matches the
    /// current settings.
    pub fn rebuild_orbit_lines(&mut self, start: OffsetDateTime) {
        let frame = self.frame;
        let settings = self.settings;
        for body in &mut self.bodies {
            body.orbit_line = match (body.class, &body.elements) {
                (BodyClass::Planet, Some(elements)) => {
                    sample_orbit(elements, start, settings.orbit_steps)
                        .into_iter()
                        .map(|p| frame.to_display(p))
                        .collect()
                }
                (BodyClass::Comet, Some(elements)) => {
                    sample_ellipse(elements, settings.comet_orbit_steps)
                        .into_iter()
                        .map(|p| frame.to_display(p))
                        .collect()
                }
                _ => Vec::new(),
            };
            for moon in &mut body.moons {
                moon.guide = sample_circle(moon.orbit_radius, settings.moon_orbit_segments);
            }
        }
    }

    /// `days` since J2000. Moon phases count from the Unix epoch instead.
    fn place(&mut self, days: f64) {
        let frame = self.frame;
        let moon_days = days + J2000_UNIX_DAYS;
        for body in &mut self.bodies {
            if let Some(elements) = &body.elements {
                body.ecliptic_position = evaluate_days(elements, days);
                body.system = DAffine3::from_translation(frame.to_display(body.ecliptic_position));
            }
            for moon in &mut body.moons {
                let offset = moon_offset(moon_angle(moon_days, moon.period), moon.orbit_radius);
                moon.local = DAffine3::from_translation(offset) * DAffine3::from_rotation_y(moon.spin);
                moon.world = body.system * moon.local;
            }
        }
    }

    /// Resolve a body or moon name.
    pub fn find(&self, name: &str) -> Option<Selection> {
        for (index, body) in self.bodies.iter().enumerate() {
            if body.name == name {
                return Some(Selection::Body(index));
            }
        }
        self.bodies.iter().enumerate().find_map(|(body, node)| {
            node.moons
                .iter()
                .position(|m| m.name == name)
                .map(|moon| Selection::Moon { body, moon })
        })
    }

    /// Display-space world position of a selection.
    pub fn world_position(&self, selection: Selection) -> Option<DVec3> {
        match selection {
            Selection::Body(index) => self.bodies.get(index).map(BodyNode::world_position),
            Selection::Moon { body, moon } => self
                .bodies
                .get(body)
                .and_then(|b| b.moons.get(moon))
                .map(MoonNode::world_position),
        }
    }

    pub fn rendered_radius(&self, selection: Selection) -> Option<f64> {
        match selection {
            Selection::Body(index) => self.bodies.get(index).map(|b| b.radius),
            Selection::Moon { body, moon } => self
                .bodies
                .get(body)
                .and_then(|b| b.moons.get(moon))
                .map(|m| m.radius),
        }
    }

    pub fn labels_visible(&self) -> bool {
        self.show_labels
    }

    pub fn toggle_labels(&mut self) -> bool {
        self.show_labels = !self.show_labels;
        self.show_labels
    }
}

fn build_node(record: &BodyRecord, settings: &SceneSettings) -> BodyNode {
    let size = record.display.size.unwrap_or(1.0);
    let radius = match record.class {
        BodyClass::Star => settings.sun_size,
        BodyClass::Planet => (size * SIZE_TO_RADIUS * settings.planet_scale).max(PLANET_MIN_RADIUS),
        BodyClass::Comet => COMET_RADIUS,
    };

    let band = VisualBand::from_distances(&record.moon_distances());
    let moons = record
        .moons
        .iter()
        .map(|moon| {
            let orbit_radius = band
                .map(|band| band.radius_for(radius, moon.distance))
                .unwrap_or(radius);
            MoonNode {
                name: moon.name.clone(),
                radius: (moon.size * SIZE_TO_RADIUS * settings.planet_scale).max(MOON_MIN_RADIUS),
                orbit_radius,
                period: moon.period,
                spin: 0.0,
                local: DAffine3::IDENTITY,
                world: DAffine3::IDENTITY,
                guide: Vec::new(),
            }
        })
        .collect();

    BodyNode {
        name: record.name.clone(),
        class: record.class,
        elements: record.elements,
        radius,
        ecliptic_position: DVec3::ZERO,
        system: DAffine3::IDENTITY,
        rotation: DVec3::ZERO,
        orbit_line: Vec::new(),
        moons,
    }
}

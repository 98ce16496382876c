//! Plain-text output of the orrery binary.

use orrery_catalog::BodyClass;
use orrery_sim::{BodyDetails, BodyNode, CameraPose, Scene, SimulationClock};

pub fn header(clock: &SimulationClock) -> Result<String, time::error::Format> {
    Ok(format!(
        "{} {}  (scale {} d/s{})",
        clock.date_label()?,
        clock.time_label()?,
        clock.time_scale(),
        if clock.is_paused() { ", paused" } else { "" }
    ))
}

/// One line per body: ecliptic AU, heliocentric distance, display position.
pub fn body_line(body: &BodyNode) -> String {
    let class = match body.class {
        BodyClass::Star => "star",
        BodyClass::Planet => "planet",
        BodyClass::Comet => "comet",
    };
    let p = body.ecliptic_position;
    let d = body.world_position();
    format!(
        "{:<20} {:<6} ecl=({:>9.5}, {:>9.5}, {:>9.5}) AU  r={:>8.5} AU  display=({:>9.3}, {:>9.3}, {:>9.3})",
        body.name,
        class,
        p.x,
        p.y,
        p.z,
        p.length(),
        d.x,
        d.y,
        d.z
    )
}

pub fn scene_lines(scene: &Scene) -> Vec<String> {
    scene.bodies().iter().map(body_line).collect()
}

pub fn details_lines(details: &BodyDetails, pose: &CameraPose) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", details.title, details.subtitle),
        format!("  {}", details.description),
        format!("  distance: {}", details.distance),
        format!("  radius:   {}", details.radius),
        format!("  image:    {}", details.image),
    ];
    if !details.satellites.is_empty() {
        lines.push(format!("  moons:    {}", details.satellites.join(", ")));
    }
    let (p, t) = (pose.position, pose.target);
    lines.push(format!(
        "  camera:   ({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})",
        p.x, p.y, p.z, t.x, t.y, t.z
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_catalog::Catalog;
    use orrery_orbit::J2000;
    use orrery_sim::SceneSettings;

    fn scene() -> Scene {
        Scene::new(Catalog::builtin(), SceneSettings::default(), J2000)
    }

    #[test]
    fn test_header() {
        let mut clock = SimulationClock::new(J2000);
        assert_eq!(header(&clock).unwrap(), "2000-01-01 12:00:00 UTC  (scale 1 d/s)");
        clock.pause();
        assert!(header(&clock).unwrap().ends_with(", paused)"));
    }

    #[test]
    fn test_one_line_per_body() {
        let scene = scene();
        let lines = scene_lines(&scene);
        assert_eq!(lines.len(), scene.bodies().len());
        assert!(lines[0].starts_with("Sun"));
        let earth = lines.iter().find(|l| l.starts_with("Earth")).unwrap();
        assert!(earth.contains("planet"));
        assert!(earth.contains("-0.19524"));
    }

    #[test]
    fn test_details_lines() {
        let scene = scene();
        let selection = scene.find("Saturn").unwrap();
        let details = scene.details(selection).unwrap();
        let pose = scene.focus(selection).unwrap();
        let lines = details_lines(&details, &pose);
        assert_eq!(lines[0], "Saturn (Celestial Body)");
        assert!(lines.iter().any(|l| l == "  moons:    Titan"));
        assert!(lines.last().unwrap().starts_with("  camera:"));
    }
}

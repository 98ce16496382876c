//! The built-in Solar System table: the Sun, eight planets, four comets.
//!
//! Planet elements are J2000 mean elements rounded for display. Comet
//! elements are simplified; NEOWISE in particular is not a real fit.

use orrery_orbit::OrbitalElements;

use crate::body::{BodyClass, BodyRecord, DisplayMetadata, MoonRecord};

fn elements(a: f64, e: f64, i: f64, o: f64, w: f64, m: f64, period: f64) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis: a,
        eccentricity: e,
        inclination: i,
        longitude_ascending: o,
        argument_periapsis: w,
        mean_anomaly_epoch: m,
        orbital_period: period,
    }
}

fn moon(name: &str, size: f64, distance: f64, period: f64, color: u32, texture: &str) -> MoonRecord {
    MoonRecord {
        name: name.to_string(),
        size,
        distance,
        period,
        color,
        texture: Some(texture.to_string()),
    }
}

fn planet(
    name: &str,
    orbit: OrbitalElements,
    size: f64,
    color: u32,
    texture: &str,
    description: &str,
) -> BodyRecord {
    BodyRecord {
        name: name.to_string(),
        class: BodyClass::Planet,
        elements: Some(orbit),
        display: DisplayMetadata {
            size: Some(size),
            color,
            texture: Some(texture.to_string()),
            description: Some(description.to_string()),
            ..DisplayMetadata::default()
        },
        moons: Vec::new(),
    }
}

fn comet(
    name: &str,
    kind: &str,
    orbit: OrbitalElements,
    size: f64,
    color: u32,
    texture: &str,
    description: &str,
) -> BodyRecord {
    BodyRecord {
        name: name.to_string(),
        class: BodyClass::Comet,
        elements: Some(orbit),
        display: DisplayMetadata {
            size: Some(size),
            color,
            texture: Some(texture.to_string()),
            kind: Some(kind.to_string()),
            description: Some(description.to_string()),
            ..DisplayMetadata::default()
        },
        moons: Vec::new(),
    }
}

fn sun() -> BodyRecord {
    BodyRecord {
        name: "Sun".to_string(),
        class: BodyClass::Star,
        elements: None,
        display: DisplayMetadata {
            size: None,
            color: 0xFFDD44,
            texture: Some("sun.jpg".to_string()),
            kind: Some("Star".to_string()),
            description: Some("The Sun.".to_string()),
            distance_label: Some("0 AU".to_string()),
            has_rings: false,
        },
        moons: Vec::new(),
    }
}

/// Planets in order of distance from the Sun.
pub fn planets() -> Vec<BodyRecord> {
    let mercury = planet(
        "Mercury",
        elements(0.387, 0.2056, 7.00, 48.33, 29.12, 174.79, 0.2408),
        0.38,
        0xA5A5A5,
        "mercury.jpg",
        "The smallest planet in the Solar System and the closest to the Sun.",
    );

    let venus = planet(
        "Venus",
        elements(0.723, 0.0067, 3.39, 76.68, 54.88, 50.11, 0.6152),
        0.95,
        0xE3BB76,
        "venus.jpg",
        "Second planet from the Sun. It has the hottest surface of any planet.",
    );

    let mut earth = planet(
        "Earth",
        elements(1.000, 0.0167, 0.00, 0.00, 102.9, 358.6, 1.0000),
        1.0,
        0x2233FF,
        "earth.jpg",
        "Our home planet. The only known planet to support life.",
    );
    earth.moons = vec![moon(
        "Moon",
        0.27,
        0.00257,
        0.0748,
        0x888888,
        "moon_texture_1765206281385.png",
    )];

    let mut mars = planet(
        "Mars",
        elements(1.524, 0.0934, 1.85, 49.57, 286.5, 19.41, 1.8808),
        0.53,
        0xDD4422,
        "mars.jpg",
        "The Red Planet. Dusty, cold, desert world with a very thin atmosphere.",
    );
    mars.moons = vec![
        moon("Phobos", 0.1, 0.001, 0.0009, 0x555555, "phobos_texture_1765206085464.png"),
        moon("Deimos", 0.08, 0.002, 0.0035, 0x666666, "phobos_texture_1765206085464.png"),
    ];

    let mut jupiter = planet(
        "Jupiter",
        elements(5.204, 0.0489, 1.30, 100.5, 273.8, 20.02, 11.862),
        11.2,
        0xD9A066,
        "jupiter.jpg",
        "The largest planet in the Solar System. A gas giant with a Great Red Spot.",
    );
    jupiter.moons = vec![
        moon("Io", 0.28, 0.015, 0.0048, 0xFFFF00, "io_texture_1765205220240.png"),
        moon("Europa", 0.24, 0.025, 0.0097, 0xCCCCCC, "europa_texture_1765205373511.png"),
        moon("Ganymede", 0.41, 0.04, 0.019, 0xDDDDDD, "ganymede_texture_1765205506743.png"),
        moon("Callisto", 0.37, 0.07, 0.045, 0x444444, "callisto_texture_1765205664044.png"),
    ];

    let mut saturn = planet(
        "Saturn",
        elements(9.582, 0.0565, 2.48, 113.7, 339.3, 317.0, 29.457),
        9.45,
        0xFCDD8D,
        "saturn.jpg",
        "Adorned with a dazzling, complex system of icy rings.",
    );
    saturn.display.has_rings = true;
    saturn.moons = vec![moon(
        "Titan",
        0.4,
        0.05,
        0.043,
        0xDDAA00,
        "titan_texture_1765205768477.png",
    )];

    let uranus = planet(
        "Uranus",
        elements(19.20, 0.0463, 0.77, 74.00, 96.99, 142.5, 84.011),
        4.0,
        0x4FD0E7,
        "uranus.jpg",
        "An ice giant. It rotates at a nearly 90-degree angle from the plane of its orbit.",
    );

    let mut neptune = planet(
        "Neptune",
        elements(30.05, 0.0094, 1.76, 131.7, 273.1, 256.2, 164.79),
        3.88,
        0x3344FF,
        "neptune.jpg",
        "The eighth and most distant major planet orbiting our Sun. Dark, cold, and windy.",
    );
    neptune.moons = vec![moon(
        "Triton",
        0.21,
        0.02,
        0.016,
        0xFFAAAA,
        "triton_texture_1765205960291.png",
    )];

    vec![mercury, venus, earth, mars, jupiter, saturn, uranus, neptune]
}

/// Comets in navigation order.
pub fn comets() -> Vec<BodyRecord> {
    vec![
        comet(
            "1P/Halley",
            "Periodic Comet",
            elements(17.834, 0.967, 162.26, 58.42, 111.33, 38.38, 75.32),
            0.5,
            0xADD8E6,
            "comet_halley.png",
            "Halley's Comet orbits the Sun every 75-76 years. It is the only known \
             short-period comet that is regularly visible to the naked eye from Earth.",
        ),
        comet(
            "67P/C-Gerasimenko",
            "Jupiter-family Comet",
            elements(3.46, 0.641, 7.04, 50.14, 12.78, 20.0, 6.44),
            0.4,
            0xAAAAAA,
            "comet_67p.png",
            "Visited by the Rosetta spacecraft in 2014, this comet has a distinct \
             bi-lobed 'rubber duck' shape.",
        ),
        comet(
            "C/2020 F3 (NEOWISE)",
            "Long-period Comet",
            elements(50.0, 0.95, 128.9, 61.0, 37.2, 0.1, 350.0),
            0.6,
            0xFFD700,
            "comet_neowise.png",
            "A bright comet discovered in 2020. Parameters simplified for visualization.",
        ),
        comet(
            "2P/Encke",
            "Periodic Comet",
            elements(2.21, 0.848, 11.78, 334.56, 186.5, 0.0, 3.30),
            0.3,
            0x88FF88,
            "comet_encke_texture_1765207559923.png",
            "Has the shortest period of any known comet, taking just 3.3 years to orbit the Sun.",
        ),
    ]
}

/// The whole built-in table: Sun, planets, comets.
pub fn all_bodies() -> Vec<BodyRecord> {
    let mut bodies = vec![sun()];
    bodies.extend(planets());
    bodies.extend(comets());
    bodies
}

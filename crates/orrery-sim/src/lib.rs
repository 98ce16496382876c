//! Render driver for the orrery.
//!
//! Owns everything that changes over time: the [`SimulationClock`], the
//! fixed-timestep [`GameLoop`], and the [`Scene`] of body transforms. The
//! orbit solver stays stateless; the scene asks it for positions at whatever
//! instant the clock holds.
//!
//! ```
//! use orrery_catalog::Catalog;
//! use orrery_orbit::J2000;
//! use orrery_sim::{GameLoop, Scene, SceneSettings, SimulationClock};
//!
//! let mut clock = SimulationClock::new(J2000);
//! let mut scene = Scene::new(Catalog::builtin(), SceneSettings::default(), clock.now());
//! let mut game_loop = GameLoop::new();
//! game_loop.run_steps(60, |dt, _| {
//!     clock.advance(dt);
//!     scene.update(&clock);
//! }, |_| {});
//! assert!((clock.days_since_j2000() - 1.0).abs() < 1e-9);
//! ```

pub mod clock;
pub mod game_loop;
pub mod inspect;
pub mod scene;

pub use clock::{SLIDER_UNITY, SimulationClock};
pub use game_loop::{FIXED_DT, GameLoop, MAX_FRAME_TIME};
pub use inspect::{
    BodyDetails, CameraPose, PickHit, comparison_diameter_px, focus_pose, ray_sphere_intersect,
};
pub use scene::{BodyNode, COMET_RADIUS, MoonNode, Scene, SceneSettings, Selection};

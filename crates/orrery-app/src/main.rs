//! Headless orrery runner.
//!
//! Loads the config and body catalog, builds the scene at the start date,
//! runs a number of fixed 60 Hz steps and prints where everything is.
//!
//! Run with: `cargo run -p orrery-app -- --date 1986-02-09T00:00:00Z --inspect 1P/Halley`

mod platform;
mod report;

use std::process::ExitCode;

use clap::Parser;
use orrery_catalog::{Catalog, CatalogError};
use orrery_config::{CliArgs, Config, ConfigError};
use orrery_sim::{GameLoop, Scene, SceneSettings, SimulationClock};
use time::OffsetDateTime;
use tracing::{error, info};

use crate::platform::{PlatformDirs, PlatformError};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to format date: {0}")]
    Format(#[from] time::error::Format),
    #[error("no body or moon named `{0}`")]
    UnknownBody(String),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("orrery: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = PlatformDirs::resolve_and_create(args.config.as_deref())?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!("Orrery starting, config in {}", dirs.config_dir.display());

    let catalog = match &config.catalog.path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    info!("Catalog: {} bodies", catalog.len());

    let mut clock = SimulationClock::from_config(&config.sim, OffsetDateTime::now_utc())?;
    if args.live {
        clock.go_live_now();
    }
    let mut scene = Scene::new(catalog, SceneSettings::from(&config.sim), clock.now());

    let mut game_loop = GameLoop::new();
    game_loop.run_steps(
        args.frames,
        |dt, _| {
            clock.advance(dt);
            scene.update(&clock);
        },
        |_| {},
    );
    info!(
        "Ran {} updates, clock at {:.3} days past J2000",
        game_loop.update_count(),
        clock.days_since_j2000()
    );

    println!("{}", report::header(&clock)?);
    for line in report::scene_lines(&scene) {
        println!("{line}");
    }

    if let Some(name) = &args.inspect {
        let selection = scene
            .find(name)
            .ok_or_else(|| AppError::UnknownBody(name.clone()))?;
        if let (Some(details), Some(pose)) = (scene.details(selection), scene.focus(selection)) {
            println!();
            for line in report::details_lines(&details, &pose) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

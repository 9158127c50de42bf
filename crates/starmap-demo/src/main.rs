//! Headless starmap session.
//!
//! Loads the config, lays out a sample star system, and drives a `MapView`
//! through a scripted sequence of pointer input and selections, logging what
//! the camera does each step. Re-selecting the focused planet drills down into
//! its sector map, the same way the game UI does.

mod sample;

use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;
use starmap_camera::{AnimationPhase, MapView, SelectionOutcome};
use starmap_config::{CliArgs, Config, LayoutConfig, default_config_dir};
use starmap_input::{PointerEvent, ScrollDelta};
use starmap_orbit::{OrbitBody, SystemLayout};

const FRAME_DT: f32 = 1.0 / 60.0;

/// One scripted input, applied at the start of a frame.
#[derive(Debug, Clone, Copy)]
enum Step {
    Select(&'static str),
    Pointer(PointerEvent),
    Wheel(ScrollDelta),
}

/// Frame-indexed input script for the system map.
const SCRIPT: &[(u32, Step)] = &[
    (45, Step::Select("Jupiter")),
    (80, Step::Pointer(PointerEvent::Down(Vec2::new(800.0, 450.0)))),
    (82, Step::Pointer(PointerEvent::Move(Vec2::new(760.0, 430.0)))),
    (84, Step::Pointer(PointerEvent::Move(Vec2::new(640.0, 400.0)))),
    (86, Step::Pointer(PointerEvent::Up)),
    (95, Step::Wheel(ScrollDelta::Lines(2.0))),
    (96, Step::Wheel(ScrollDelta::Pixels(-40.0))),
    // The drag deselected Jupiter: the first select refocuses, the second
    // drills down.
    (130, Step::Select("Jupiter")),
    (165, Step::Select("Jupiter")),
];

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config from {}: {e}", config_dir.display());
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    starmap_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    tracing::info!(
        "Starmap session: viewport {}x{}, {} frames, phase seed {:?}",
        args.viewport_width,
        args.viewport_height,
        args.frames,
        config.layout.phase_seed
    );

    match run_session(&config, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Session failed: {e}");
            eprintln!("starmap: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_session(config: &Config, args: &CliArgs) -> Result<(), ron::error::SpannedError> {
    let viewport = Vec2::new(args.viewport_width, args.viewport_height);

    let mut system = sample::system_bodies()?;
    let layout = build_layout(&mut system, &config.layout, "system");

    let mut view = MapView::new(&config.camera, viewport);
    view.set_layout(layout.markers());

    let mut last_phase = view.phase();
    let mut drilled_into: Option<String> = None;

    for frame in 0..args.frames {
        for (_, step) in SCRIPT.iter().filter(|(at, _)| *at == frame) {
            match *step {
                Step::Select(name) if drilled_into.is_none() => {
                    match view.select(name) {
                        SelectionOutcome::Activated => {
                            tracing::info!("Frame {frame}: '{name}' activated, opening sector map");
                            let mut sector = sample::sector_bodies()?;
                            let sector_layout = build_layout(&mut sector, &config.layout, "sector");
                            view = MapView::new(&config.camera, viewport);
                            view.set_layout(sector_layout.markers());
                            drilled_into = Some(name.to_string());
                        }
                        outcome => tracing::info!("Frame {frame}: select '{name}' -> {outcome:?}"),
                    }
                }
                Step::Select(_) => {}
                Step::Pointer(event) => view.push_pointer(event),
                Step::Wheel(delta) => view.pointer_mut().on_scroll(delta),
            }
        }

        view.update(FRAME_DT);

        let phase = view.phase();
        if phase != last_phase {
            let cam = view.camera();
            tracing::debug!(
                "Frame {frame}: {last_phase:?} -> {phase:?} (pan {:?}, zoom {:.2}, tilt {:.3})",
                cam.pan_offset(),
                cam.zoom(),
                cam.tilt()
            );
            last_phase = phase;
        }
    }

    let cam = view.camera();
    tracing::info!(
        "Final camera: pan {:?}, zoom {:.2}, tilt {:.3}, phase {:?}, map {}",
        cam.pan_offset(),
        cam.zoom(),
        cam.tilt(),
        view.phase(),
        drilled_into.as_deref().unwrap_or("system")
    );
    if view.phase() != AnimationPhase::Idle {
        tracing::warn!("Session ended mid-animation; increase --frames to let it settle");
    }
    Ok(())
}

fn build_layout(bodies: &mut [OrbitBody], config: &LayoutConfig, map: &str) -> SystemLayout {
    let layout = SystemLayout::build(bodies, config);
    tracing::info!(
        "Built {map} layout: {} bodies, {:.3e} km/px",
        layout.bodies().len(),
        layout.km_per_px()
    );
    for placed in layout.bodies() {
        tracing::debug!(
            "  {:<10} center ({:>8.1}, {:>8.1}) size {:>5.1}px",
            placed.name,
            placed.center.x,
            placed.center.y,
            placed.size_px
        );
    }
    layout
}

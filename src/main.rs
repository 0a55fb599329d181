use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use clap::Parser;

use orrery::cli::{Args, DEFAULT_HEADLESS_STEPS, load_and_apply_config};
use orrery::resources::{Bodies, ElapsedTime};
use orrery::{SimulationConfig, SimulationPlugin};

fn main() -> AppExit {
    let args = Args::parse();

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return AppExit::error();
        }
    };

    let simulation = match SimulationPlugin::new(config.clone()) {
        Ok(simulation) => simulation.paused(args.paused),
        Err(err) => {
            eprintln!("Cannot start simulation: {err}");
            return AppExit::error();
        }
    };

    let log_plugin = LogPlugin {
        level: if args.verbose { Level::DEBUG } else { Level::INFO },
        ..default()
    };

    if args.headless {
        run_headless(
            simulation,
            log_plugin,
            args.steps.unwrap_or(DEFAULT_HEADLESS_STEPS),
        )
    } else {
        run_windowed(simulation, log_plugin, &config)
    }
}

/// Steps the simulation `steps` times without a window, then prints every body
fn run_headless(simulation: SimulationPlugin, log_plugin: LogPlugin, steps: usize) -> AppExit {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, log_plugin, StatesPlugin, simulation));
    app.finish();
    app.cleanup();

    for _ in 0..steps {
        app.update();
        if let Some(exit) = app.should_exit() {
            return exit;
        }
    }

    let elapsed = **app.world().resource::<ElapsedTime>();
    info!("Ran {steps} frames covering {elapsed:.4} s of elapsed time");

    println!("index,x,y,z,vx,vy,vz,mass");
    for (index, body) in app.world().resource::<Bodies>().iter().enumerate() {
        let (p, v) = (body.position, body.velocity);
        println!(
            "{index},{},{},{},{},{},{},{}",
            p.x,
            p.y,
            p.z,
            v.x,
            v.y,
            v.z,
            body.mass()
        );
    }

    AppExit::Success
}

#[cfg(feature = "graphics")]
fn run_windowed(
    simulation: SimulationPlugin,
    log_plugin: LogPlugin,
    config: &SimulationConfig,
) -> AppExit {
    use bevy::window::PresentMode;
    use orrery::plugins::controls::ControlsPlugin;
    use orrery::plugins::hud::HudPlugin;
    use orrery::plugins::pacing::FramePacingPlugin;
    use orrery::plugins::visualization::VisualizationPlugin;

    let mut app = App::new();

    app.add_plugins((
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: config.window.title.clone(),
                    resolution: (config.window.width, config.window.height).into(),
                    resizable: false,
                    present_mode: PresentMode::AutoNoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(log_plugin),
        simulation,
        ControlsPlugin,
        VisualizationPlugin,
        HudPlugin,
        FramePacingPlugin,
    ));

    #[cfg(feature = "trails")]
    {
        if config.trails.enabled {
            app.add_plugins(orrery::plugins::trails::TrailsPlugin);
        }
    }

    app.run()
}

#[cfg(not(feature = "graphics"))]
fn run_windowed(
    _simulation: SimulationPlugin,
    _log_plugin: LogPlugin,
    _config: &SimulationConfig,
) -> AppExit {
    eprintln!("Built without the `graphics` feature; run with --headless");
    AppExit::error()
}

//! Simulation plugin
//!
//! Owns the body store and the physics engine, steps the engine once per
//! frame while running, and reacts to [`SimulationCommand`]s. It has no
//! rendering dependencies, so it runs the same under `MinimalPlugins`.

use crate::prelude::*;

use crate::error::SimulationError;
use crate::physics::{BodyStore, PhysicsEngine, circular_layout};
use crate::resources::{Bodies, ElapsedTime, Engine, InitialBodies, RenderingRng};
use crate::utils::color::random_body_color;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Commands,
    Physics,
    Presentation,
}

pub struct SimulationPlugin {
    config: SimulationConfig,
    initial_bodies: BodyStore,
    start_paused: bool,
}

impl SimulationPlugin {
    /// Validates `config` and lays out the bodies for the run.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let mut rendering_rng = RenderingRng::from_optional_seed(config.rendering.color_seed);
        let initial_bodies = circular_layout(
            config.physics.body_count,
            config.window.center(),
            config.physics.body_mass,
            || random_body_color(&mut rendering_rng),
        )?;

        Ok(Self {
            config,
            initial_bodies,
            start_paused: false,
        })
    }

    pub fn paused(mut self, start_paused: bool) -> Self {
        self.start_paused = start_paused;
        self
    }

    pub fn initial_bodies(&self) -> &BodyStore {
        &self.initial_bodies
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        info!(
            "Simulating {} bodies (mass {}, boost factor {})",
            config.physics.body_count, config.physics.body_mass, config.physics.boost_factor
        );

        match PhysicsEngine::from_config(&config.physics) {
            Ok(engine) => {
                app.insert_resource(Engine(engine));
            }
            Err(err) => {
                error!("Cannot build physics engine: {err}");
                app.world_mut().send_event(AppExit::error());
                return;
            }
        }

        app.insert_resource(Bodies(self.initial_bodies.clone()));
        app.insert_resource(InitialBodies(self.initial_bodies.clone()));
        app.insert_resource(config);
        app.init_resource::<ElapsedTime>();

        if self.start_paused {
            app.insert_state(AppState::Paused);
        } else {
            app.init_state::<AppState>();
        }

        app.add_event::<SimulationCommand>();

        app.configure_sets(
            Update,
            (
                SimulationSet::Input,
                SimulationSet::Commands,
                SimulationSet::Physics,
                SimulationSet::Presentation,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                handle_simulation_commands.in_set(SimulationSet::Commands),
                advance_bodies
                    .in_set(SimulationSet::Physics)
                    .run_if(in_state(AppState::Running)),
            ),
        );
    }
}

/// Elapsed time for this frame: the configured fixed step, or the frame delta
pub fn frame_dt(config: &SimulationConfig, time: &Time) -> Scalar {
    config
        .physics
        .fixed_time_step
        .unwrap_or_else(|| time.delta_secs_f64())
}

pub fn advance_bodies(
    time: Res<Time>,
    config: Res<SimulationConfig>,
    mut engine: ResMut<Engine>,
    mut bodies: ResMut<Bodies>,
    mut elapsed: ResMut<ElapsedTime>,
    mut exit: EventWriter<AppExit>,
) {
    let dt = frame_dt(&config, &time);

    match engine.step(&mut bodies.0, dt) {
        Ok(()) => **elapsed += dt,
        Err(err) => {
            error!("Simulation step failed: {err}");
            exit.write(AppExit::error());
        }
    }
}

pub fn handle_simulation_commands(
    mut simulation_commands: EventReader<SimulationCommand>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    initial_bodies: Res<InitialBodies>,
    mut bodies: ResMut<Bodies>,
    mut elapsed: ResMut<ElapsedTime>,
    mut exit: EventWriter<AppExit>,
) {
    for command in simulation_commands.read() {
        match command {
            SimulationCommand::Restart => {
                info!("Restarting simulation");
                bodies.0 = initial_bodies.0.clone();
                **elapsed = 0.0;
            }
            SimulationCommand::TogglePause => {
                let toggled = state.get().toggled();
                debug!("Simulation state -> {toggled:?}");
                next_state.set(toggled);
            }
            SimulationCommand::Quit => {
                exit.write(AppExit::Success);
            }
        }
    }
}

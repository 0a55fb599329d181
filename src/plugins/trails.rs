use crate::components::Trails;
use crate::plugins::simulation::SimulationSet;
use crate::plugins::visualization::screen_to_world;
use crate::prelude::*;
use crate::resources::Bodies;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrailSet {
    Record,
    Render,
}

pub struct TrailsPlugin;

impl Plugin for TrailsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Trails>();

        app.configure_sets(
            Update,
            (
                TrailSet::Record.after(SimulationSet::Physics),
                TrailSet::Render.in_set(SimulationSet::Presentation),
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                clear_trails_on_restart.in_set(SimulationSet::Commands),
                record_trails
                    .in_set(TrailSet::Record)
                    .run_if(in_state(AppState::Running)),
                draw_trails.in_set(TrailSet::Render),
            ),
        );
    }
}

pub fn record_trails(
    mut trails: ResMut<Trails>,
    bodies: Res<Bodies>,
    time: Res<Time>,
    config: Res<SimulationConfig>,
) {
    if trails.len() != bodies.len() {
        *trails = Trails::for_body_count(bodies.len());
    }

    let current_time = time.elapsed_secs();

    for (trail, body) in trails.iter_mut().zip(bodies.iter()) {
        if trail.should_update(current_time, config.trails.update_interval_seconds) {
            trail.add_point(body.position, current_time);
            trail.enforce_limit(config.trails.max_points_per_trail);
        }
    }
}

pub fn clear_trails_on_restart(
    mut simulation_commands: EventReader<SimulationCommand>,
    mut trails: ResMut<Trails>,
) {
    if simulation_commands
        .read()
        .any(|command| *command == SimulationCommand::Restart)
    {
        trails.clear();
    }
}

pub fn draw_trails(
    mut gizmos: Gizmos,
    trails: Res<Trails>,
    bodies: Res<Bodies>,
    config: Res<SimulationConfig>,
) {
    for (trail, body) in trails.iter().zip(bodies.iter()) {
        if trail.points.len() < 2 {
            continue;
        }

        gizmos.linestrip_gradient_2d(trail.points.iter().map(|point| {
            (
                screen_to_world(*point, &config.window),
                body.color.at_depth(point.z, &config.rendering),
            )
        }));
    }
}

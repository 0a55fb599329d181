use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use crate::resources::ElapsedTime;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct ElapsedHudValue;

#[derive(Component, Copy, Clone, Default, PartialEq, Debug)]
struct AccuracyHudValue;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.add_systems(Startup, spawn_hud);
        app.add_systems(
            Update,
            (refresh_elapsed_hud_value, refresh_accuracy_hud_value)
                .in_set(SimulationSet::Presentation),
        );
    }
}

/// How closely the measured frame rate tracks the target, as a whole
/// percentage capped at 100
pub fn relative_accuracy(fps: f64, target_frame_rate: f64) -> i64 {
    let accuracy = 100.0 - (fps - target_frame_rate).abs() / target_frame_rate * 100.0;
    (accuracy as i64).min(100)
}

fn spawn_hud(mut commands: Commands, config: Res<SimulationConfig>) {
    let text_color = config.rendering.text_color.to_color();

    commands.spawn((
        Name::new("Elapsed HUD"),
        ElapsedHudValue,
        Text::new("t: 0"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(text_color),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            bottom: Val::Px(5.0),
            ..default()
        },
    ));

    commands.spawn((
        Name::new("Accuracy HUD"),
        AccuracyHudValue,
        Text::new("Relative accuracy: -"),
        TextFont {
            font_size: 15.0,
            ..default()
        },
        TextColor(text_color),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(5.0),
            right: Val::Px(10.0),
            ..default()
        },
    ));
}

fn refresh_elapsed_hud_value(
    elapsed: Res<ElapsedTime>,
    mut elapsed_hud_value: Single<&mut Text, With<ElapsedHudValue>>,
) {
    ***elapsed_hud_value = format!("t: {:.2}", **elapsed);
}

fn refresh_accuracy_hud_value(
    diagnostics: Res<DiagnosticsStore>,
    config: Res<SimulationConfig>,
    mut accuracy_hud_value: Single<&mut Text, With<AccuracyHudValue>>,
) {
    if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
        if let Some(fps) = fps.smoothed() {
            let accuracy = relative_accuracy(fps, config.window.target_frame_rate);
            ***accuracy_hud_value = format!("Relative accuracy: {accuracy}%");
        }
    }
}

//! Drawing of bodies and the axis glyph
//!
//! Physics works in screen space (origin top-left, y down). Bevy's 2D camera
//! is centred with y up, so every position goes through [`screen_to_world`].

use crate::config::WindowConfig;
use crate::plugins::simulation::SimulationSet;
use crate::prelude::*;
use crate::resources::Bodies;
use crate::utils::color::depth_radius;

/// Depth range mapped onto the 2D draw order
const DRAW_ORDER_LIMIT: f32 = 500.0;

/// Circle drawn for the body at `index` in the store
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySprite {
    pub index: usize,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLabel;

pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_camera, spawn_body_sprites, spawn_axis_labels));
        app.add_systems(
            Update,
            (sync_body_sprites, draw_axes).in_set(SimulationSet::Presentation),
        );
    }
}

pub fn screen_to_world(position: Vector, window: &WindowConfig) -> Vec2 {
    Vec2::new(
        position.x as f32 - window.width / 2.0,
        window.height / 2.0 - position.y as f32,
    )
}

/// Screen-space corner points of the axis glyph: origin, x, y and z tips
pub fn axis_points(window: &WindowConfig) -> [Vector; 4] {
    let (width, height) = (window.width as Scalar, window.height as Scalar);
    [
        Vector::new(width - 100.0, height - 100.0, 0.0),
        Vector::new(width - 250.0, height - 100.0, 0.0),
        Vector::new(width - 100.0, height - 250.0, 0.0),
        Vector::new(width - 20.0, height - 20.0, 0.0),
    ]
}

fn spawn_camera(mut commands: Commands, config: Res<SimulationConfig>) {
    commands.insert_resource(ClearColor(config.rendering.background_color.to_color()));
    commands.spawn((Name::new("Main Camera"), Camera2d));
}

fn spawn_body_sprites(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    bodies: Res<Bodies>,
) {
    let circle = meshes.add(Circle::new(1.0));

    for (index, body) in bodies.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Body {index}")),
            BodySprite { index },
            Mesh2d(circle.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(body.color.to_color()))),
            Transform::default(),
        ));
    }
}

fn spawn_axis_labels(mut commands: Commands, config: Res<SimulationConfig>) {
    let (width, height) = (config.window.width, config.window.height);
    let text_color = config.rendering.text_color.to_color();
    let labels = [
        ("y", width - 115.0, height - 265.0),
        ("z", width - 15.0, height - 15.0),
        ("-x", width - 265.0, height - 115.0),
    ];

    for (label, left, top) in labels {
        commands.spawn((
            AxisLabel,
            Text::new(label),
            TextFont {
                font_size: 15.0,
                ..default()
            },
            TextColor(text_color),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(left),
                top: Val::Px(top),
                ..default()
            },
        ));
    }
}

pub fn sync_body_sprites(
    mut sprites: Query<(&BodySprite, &mut Transform)>,
    bodies: Res<Bodies>,
    config: Res<SimulationConfig>,
) {
    for (sprite, mut transform) in sprites.iter_mut() {
        let Some(body) = bodies.get(sprite.index) else {
            continue;
        };

        let depth = (body.position.z as f32).clamp(-DRAW_ORDER_LIMIT, DRAW_ORDER_LIMIT);
        transform.translation = screen_to_world(body.position, &config.window).extend(depth);
        transform.scale = Vec3::splat(depth_radius(body.position.z, &config.rendering) as f32);
    }
}

fn draw_axes(mut gizmos: Gizmos, config: Res<SimulationConfig>) {
    let color = config.rendering.axis_color.to_color();
    let [origin, x_tip, y_tip, z_tip] =
        axis_points(&config.window).map(|point| screen_to_world(point, &config.window));

    gizmos.line_2d(z_tip, origin, color);
    gizmos.line_2d(origin, y_tip, color);
    gizmos.line_2d(origin, x_tip, color);
}

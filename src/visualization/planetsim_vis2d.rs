use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::integrator::euler_step;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Planet};

/// Stable planet id carried by each spawned circle entity; survives
/// mid-simulation evictions, unlike an index into the planet vector.
#[derive(Component)]
struct PlanetId(pub u32);

const SCALE: f32 = 0.5;

// Reference palette: dark canvas, green-to-red planet ramp over radius,
// faint-to-bright trail ramp.
const BACKGROUND: Color = Color::rgb(0.243, 0.243, 0.243); // #3E3E3E
const PLANET_COLOR_MIN: [f32; 4] = [184.0 / 255.0, 233.0 / 255.0, 134.0 / 255.0, 0.8];
const PLANET_COLOR_MAX: [f32; 4] = [242.0 / 255.0, 100.0 / 255.0, 83.0 / 255.0, 0.8];
const PLANET_RADIUS_COLOR_RANGE: (f32, f32) = (10.0, 100.0);
const TRAIL_COLOR_OLD: [f32; 4] = [1.0, 1.0, 1.0, 0.05];
const TRAIL_COLOR_NEW: [f32; 4] = [230.0 / 255.0, 1.0, 230.0 / 255.0, 0.9];
const OVERLOAD_RING: Color = Color::rgb(1.0, 0.0, 0.0);

pub fn run_2d(scenario: Scenario) {
    println!(
        "run_2d: starting Bevy 2D viewer with {} planets",
        scenario.system.planets.len()
    );

    // One physics step per fixed tick of h0 seconds; rendering systems run
    // in Update and only ever see a fully-integrated state.
    let step = scenario.parameters.h0;

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(BACKGROUND))
        .insert_resource(Time::<Fixed>::from_seconds(step))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_planets_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(
            Update,
            (sync_planets_system, draw_trails_system, draw_overload_system),
        )
        .run();
}

fn setup_planets_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // Unit circle per planet; radius lives in the transform scale so merge
    // growth is a scale update, not a mesh rebuild.
    for planet in scenario.system.planets.iter() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(1.0))),
                material: materials.add(ColorMaterial::from(planet_color(planet))),
                transform: planet_transform(planet),
                ..Default::default()
            },
            PlanetId(planet.id),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    let Scenario { system, parameters } = &mut *scenario;

    euler_step(system, parameters);
}

/// Push simulation state into the spawned entities: position, radius scale
/// and radius-ramp color. Entities whose planet has been absorbed are
/// despawned.
fn sync_planets_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut query: Query<(Entity, &PlanetId, &mut Transform, &Handle<ColorMaterial>)>,
) {
    for (entity, PlanetId(id), mut transform, material) in &mut query {
        match scenario.system.planets.iter().find(|p| p.id == *id) {
            Some(planet) => {
                *transform = planet_transform(planet);
                if let Some(mat) = materials.get_mut(material) {
                    mat.color = planet_color(planet);
                }
            }
            None => commands.entity(entity).despawn(),
        }
    }
}

/// Trail polylines, faint at the oldest sample and bright at the newest.
fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let ramp = scenario.parameters.trail_length.max(1) as f32;

    for planet in scenario.system.planets.iter() {
        let len = planet.trail.len();
        if len < 2 {
            continue;
        }

        for i in 1..len {
            let a = &planet.trail[i - 1];
            let b = &planet.trail[i];
            let color = lerp_color(TRAIL_COLOR_OLD, TRAIL_COLOR_NEW, i as f32 / ramp);
            gizmos.line_2d(to_screen(a.position), to_screen(b.position), color);
        }
    }
}

/// Red ring around any planet whose acceleration was clamped this tick.
fn draw_overload_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for planet in scenario.system.planets.iter() {
        if planet.exceeded_max_acceleration {
            gizmos.circle_2d(
                to_screen(planet.position),
                planet.radius as f32 * SCALE,
                OVERLOAD_RING,
            );
        }
    }
}

fn to_screen(p: NVec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32) * SCALE
}

fn planet_transform(planet: &Planet) -> Transform {
    let pos = to_screen(planet.position);
    Transform::from_xyz(pos.x, pos.y, 0.0)
        .with_scale(Vec3::splat((planet.radius as f32).max(0.02) * SCALE))
}

/// Radius-keyed color ramp: small planets green, large planets red.
fn planet_color(planet: &Planet) -> Color {
    let (lo, hi) = PLANET_RADIUS_COLOR_RANGE;
    let t = ((planet.radius as f32 - lo) / (hi - lo)).clamp(0.0, 1.0);
    lerp_color(PLANET_COLOR_MIN, PLANET_COLOR_MAX, t)
}

fn lerp_color(s: [f32; 4], e: [f32; 4], t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let ti = 1.0 - t;
    Color::rgba(
        s[0] * ti + e[0] * t,
        s[1] * ti + e[1] * t,
        s[2] * ti + e[2] * t,
        s[3] * ti + e[3] * t,
    )
}

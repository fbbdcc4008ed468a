use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use plasma_tube_core::{SimConfig, Simulation, Vec3 as SimVec3};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Plasma Tube - Bevy Demo".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<SimulationState>()
        .add_systems(Startup, setup)
        .add_systems(Update, (ui_system, step_simulation, sync_particles).chain())
        .run();
}

#[derive(Resource)]
struct SimulationState {
    simulation: Simulation,
    paused: bool,

    // UI controls
    frame_cycles: u32,
}

impl Default for SimulationState {
    fn default() -> Self {
        let config = SimConfig::default();
        Self {
            frame_cycles: config.frame_cycles,
            simulation: Simulation::new(config),
            paused: false,
        }
    }
}

// Marks the sphere following the spawner's center particle
#[derive(Component)]
struct CenterSphere;

// Marks the sphere following the spawning particle
#[derive(Component)]
struct SpawnSphere;

fn to_bevy(v: &SimVec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    state: Res<SimulationState>,
) {
    let sim = &state.simulation;

    // Camera on the +Z axis, X up
    commands.spawn(Camera3dBundle {
        transform: Transform::from_translation(to_bevy(sim.camera_position()))
            .looking_at(Vec3::ZERO, Vec3::X),
        ..default()
    });

    // Three white point lights far out along the axes
    let scale = sim.config().max_screen();
    for position in [
        Vec3::new(10.0 * scale, 0.0, 0.0),
        Vec3::new(0.0, 10.0 * scale, 0.0),
        Vec3::new(0.0, 0.0, 10.0 * scale),
    ] {
        commands.spawn(PointLightBundle {
            point_light: PointLight {
                color: Color::WHITE,
                intensity: 3e7,
                range: 20.0 * scale,
                ..default()
            },
            transform: Transform::from_translation(position),
            ..default()
        });
    }

    let sphere = meshes.add(Mesh::from(shape::UVSphere {
        radius: 1.0,
        sectors: 32,
        stacks: 16,
    }));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        ..default()
    });

    let size = sim.spawner().size();
    commands.spawn((
        PbrBundle {
            mesh: sphere.clone(),
            material: material.clone(),
            transform: Transform::from_translation(to_bevy(&sim.spawner().center().pose.position))
                .with_scale(Vec3::splat(size)),
            ..default()
        },
        CenterSphere,
    ));
    commands.spawn((
        PbrBundle {
            mesh: sphere.clone(),
            material: material.clone(),
            transform: Transform::from_translation(to_bevy(
                &sim.spawner().spawning().pose.position,
            ))
            .with_scale(Vec3::splat(size)),
            ..default()
        },
        SpawnSphere,
    ));

    // Background field only draws when activated in the config
    for particle in sim.background().particles() {
        if particle.active {
            commands.spawn(PbrBundle {
                mesh: sphere.clone(),
                material: material.clone(),
                transform: Transform::from_translation(to_bevy(&particle.pose.position))
                    .with_scale(Vec3::splat(particle.size())),
                ..default()
            });
        }
    }
}

fn ui_system(mut contexts: EguiContexts, mut state: ResMut<SimulationState>) {
    egui::Window::new("Controls").show(contexts.ctx_mut(), |ui| {
        ui.checkbox(&mut state.paused, "Paused");
        ui.add(egui::Slider::new(&mut state.frame_cycles, 30..=1440).text("Frame cycles"));
        if ui.button("Reset").clicked() {
            let config = SimConfig {
                frame_cycles: state.frame_cycles,
                ..SimConfig::default()
            };
            state.simulation = Simulation::new(config);
        }
        ui.separator();
        ui.label(format!("Frame: {}", state.simulation.frame_count()));
        ui.label(format!(
            "Angle: {:.4}",
            state.simulation.spawner().phase_angle()
        ));
        let position = state.simulation.spawner().spawn_position();
        ui.label(format!(
            "Spawn: ({:.1}, {:.1}, {:.1})",
            position.x, position.y, position.z
        ));
    });
}

fn step_simulation(mut state: ResMut<SimulationState>) {
    if !state.paused {
        state.simulation.update();
    }
}

fn sync_particles(
    state: Res<SimulationState>,
    mut center: Query<&mut Transform, (With<CenterSphere>, Without<SpawnSphere>)>,
    mut spawning: Query<&mut Transform, (With<SpawnSphere>, Without<CenterSphere>)>,
) {
    for mut transform in &mut center {
        transform.translation = to_bevy(&state.simulation.spawner().center().pose.position);
    }
    for mut transform in &mut spawning {
        transform.translation = to_bevy(&state.simulation.spawner().spawning().pose.position);
    }
}

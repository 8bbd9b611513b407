//! Static carriage interior: shell, floor, doorway, rails, storage, panels,
//! lights, windows, luggage and the four seat rows.
//!
//! Everything here is a [`PartNode`] descriptor, spawned once at startup under
//! the carriage root. Passengers are parented under the same root, so the
//! carriage sway carries them along.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use passengers::parts::{mat, spawn_part, PartMaterial, PartNode, Shape};
use passengers::{EnvironmentAnchor, JointPose, RestPose};

/// Ceiling light stations along the aisle.
pub const CEILING_LIGHT_Z: [f32; 5] = [-1.5, -3.8, -6.1, -8.4, -10.7];
/// Window stations, repeated on both walls.
pub const WINDOW_Z: [f32; 7] = [-1.2, -2.8, -4.4, -6.0, -7.6, -9.2, -10.8];
/// Stanchions and the grab loops hanging above them.
pub const STANCHION_Z: [f32; 4] = [-3.0, -5.5, -8.0, -10.5];
/// Aisle marker stations, one per seat row.
pub const MARKER_Z: [f32; 4] = [-2.0, -4.5, -7.0, -9.5];
pub const INFO_PANEL_Z: [f32; 2] = [-5.8, -8.8];

const CEILING_LIGHT_Y: f32 = 2.48;
/// Warm fill light under each ceiling panel.
pub const CEILING_LIGHT_COLOR: u32 = 0xfff6d5;
pub const CEILING_LIGHT_RANGE: f32 = 3.4;
pub const CEILING_LIGHT_INTENSITY: f32 = 0.55;

/// A row of two facing seats and the console between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatRow {
    pub z: f32,
    pub cushion: u32,
    pub accent: u32,
}

pub const SEAT_ROWS: [SeatRow; 4] = [
    SeatRow {
        z: -2.0,
        cushion: 0x2a69c7,
        accent: 0x163c82,
    },
    SeatRow {
        z: -4.5,
        cushion: 0x1f9d8f,
        accent: 0x126a5e,
    },
    SeatRow {
        z: -7.0,
        cushion: 0xb553c2,
        accent: 0x6e2d7a,
    },
    SeatRow {
        z: -9.5,
        cushion: 0xf27f3d,
        accent: 0xa54614,
    },
];

/// Root of the carriage: holds the interior and, once composed, the
/// passengers.
#[derive(Component, Default)]
pub struct Carriage;

/// Point light hanging under a ceiling panel.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CeilingLight {
    pub station: usize,
}

fn block(x: f32, y: f32, z: f32, material: PartMaterial) -> PartNode {
    PartNode::mesh(Shape::cuboid(x, y, z), material)
}

fn rod(radius: f32, height: f32, material: PartMaterial) -> PartNode {
    PartNode::mesh(Shape::cylinder(radius, height), material)
}

fn plane(width: f32, height: f32, material: PartMaterial) -> PartNode {
    PartNode::mesh(
        Shape::Plane {
            size: Vec2::new(width, height),
        },
        material,
    )
}

/// Mirror a builder across the aisle, returning left then right.
fn both_sides(build: impl Fn(f32) -> PartNode) -> [PartNode; 2] {
    [build(-1.0), build(1.0)]
}

// ---------------------------------------------------------------------------
// Shell and floor
// ---------------------------------------------------------------------------

pub fn shell() -> PartNode {
    let end_wall = || block(4.2, 2.4, 0.3, mat(0xd9e0ec).rough(0.75));
    PartNode::group().children([
        block(4.6, 2.7, 16.6, mat(0x1b2432).metal(0.65).rough(0.35)).at(0.0, 1.35, -4.0),
        block(4.25, 2.5, 16.2, mat(0xf2f5fa).rough(0.9).inside()).at(0.0, 1.3, -4.0),
        // Curved ceiling: a unit dome squashed along the carriage.
        PartNode::mesh(
            Shape::cap(1.0, FRAC_PI_2),
            mat(0xd8e1ef).rough(0.55).metal(0.2).inside(),
        )
        .at(0.0, 2.28, -4.0)
        .scaled(2.05, 0.62, 7.7),
        end_wall().at(0.0, 1.1, -12.0),
        end_wall().at(0.0, 1.1, 3.8),
        rod(0.05, 12.5, mat(0xc8d2e1).metal(0.6).rough(0.4))
            .at(0.0, 2.5, -4.0)
            .rotated(FRAC_PI_2, 0.0, 0.0),
    ])
}

pub fn floor() -> PartNode {
    let carpet =
        |side: f32| block(1.25, 0.02, 16.1, mat(0x28303f).rough(0.7)).at(side * 1.45, 0.008, -4.0);
    let marker = |side: f32| {
        block(0.14, 0.008, 0.5, mat(0xfacc15).glow(0xfacc15, 0.5).rough(0.2))
            .at(side * 0.62, 0.0, 0.0)
    };

    PartNode::group()
        .children([
            block(4.2, 0.05, 16.3, mat(0x1d2532).metal(0.45).rough(0.45)).at(0.0, -0.025, -4.0),
            block(0.96, 0.015, 16.1, mat(0x3c475a).rough(0.55).metal(0.2)).at(0.0, 0.0, -4.0),
        ])
        .children(both_sides(carpet))
        .children(
            MARKER_Z
                .iter()
                .map(|&z| PartNode::group().at(0.0, 0.01, z).children(both_sides(marker))),
        )
        .child(block(4.2, 0.04, 0.9, mat(0x1b212c).metal(0.5).rough(0.3)).at(0.0, -0.05, 3.4))
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn doorway() -> PartNode {
    PartNode::group().at(0.0, 1.15, 3.62).children([
        block(1.25, 2.1, 0.12, mat(0x5f6c7d).metal(0.55).rough(0.45)),
        plane(1.05, 1.82, mat(0x111827).metal(0.5).rough(0.35)).at(0.0, 0.0, 0.07),
        plane(0.9, 1.1, mat(0x9cc2d5).translucent(0.35).metal(0.9).rough(0.08)).at(0.0, 0.0, 0.08),
        rod(0.05, 0.16, mat(0xeab308).metal(0.85).rough(0.25)).at(0.48, -0.12, 0.12),
        block(1.2, 0.18, 0.04, mat(0x1e293b).metal(0.55).rough(0.4)).at(0.0, 1.25, 0.13),
    ])
}

pub fn handrails() -> PartNode {
    let chrome = mat(0xd1d9e9).metal(0.75).rough(0.35);
    let stanchion = |side: f32| rod(0.035, 2.6, chrome).at(side * 0.46, 1.38, 0.0).shadowed();

    PartNode::group()
        .children(
            STANCHION_Z
                .iter()
                .map(|&z| PartNode::group().at(0.0, 0.0, z).children(both_sides(stanchion))),
        )
        .child(
            rod(0.03, 12.8, chrome)
                .at(0.0, 2.15, -4.0)
                .rotated(FRAC_PI_2, 0.0, 0.0),
        )
        .children(STANCHION_Z.iter().map(|&z| {
            PartNode::mesh(Shape::ring(0.14, 0.015), mat(0xf1f5f9).metal(0.2).rough(0.3))
                .at(0.0, 2.02, z)
        }))
}

pub fn overhead_storage() -> PartNode {
    let rack = |side: f32| {
        PartNode::group().at(side * 1.6, 2.15, -4.0).children([
            block(0.92, 0.36, 14.0, mat(0xcdd6e6).metal(0.35).rough(0.4)),
            block(0.94, 0.02, 14.0, mat(0xf1f5f9).rough(0.5)).at(0.0, -0.18, 0.0),
            block(0.94, 0.02, 14.0, mat(0xdbe3f2).rough(0.5)).at(0.0, 0.18, 0.0),
        ])
    };
    PartNode::group().children(both_sides(rack))
}

pub fn info_panels() -> PartNode {
    PartNode::group().children(INFO_PANEL_Z.iter().map(|&z| {
        PartNode::group().at(0.0, 2.05, z).children([
            block(1.5, 0.55, 0.07, mat(0x0f172a).metal(0.6).rough(0.35)),
            plane(1.4, 0.46, mat(0x1e293b).glow(0x38bdf8, 0.4).rough(0.2)).at(0.0, 0.0, 0.04),
        ])
    }))
}

/// Glowing ceiling panels. The matching point lights are spawned separately
/// by [`spawn_carriage`].
pub fn light_panels() -> PartNode {
    PartNode::group().children(CEILING_LIGHT_Z.iter().map(|&z| {
        block(1.25, 0.08, 0.85, mat(0xf8fafc).glow(0xfffbd6, 0.7).rough(0.2))
            .at(0.0, CEILING_LIGHT_Y, z)
    }))
}

pub fn windows() -> PartNode {
    let window = |side: f32, z: f32| {
        PartNode::group().children([
            block(0.06, 1.45, 1.4, mat(0x1d2738).metal(0.5).rough(0.4))
                .at(side * 2.04, 1.55, z)
                .shadowed(),
            block(0.01, 1.22, 1.16, mat(0x9ac7dd).translucent(0.4).metal(0.85).rough(0.08))
                .at(side * 2.01, 1.55, z),
            block(0.05, 0.32, 1.16, mat(0xcbd5e1)).at(side * 1.98, 1.0, z),
            block(0.01, 0.1, 1.16, mat(0xf1f5f9)).at(side * 2.01, 2.18, z),
        ])
    };
    PartNode::group().children(
        [-1.0, 1.0]
            .into_iter()
            .flat_map(|side| WINDOW_Z.iter().map(move |&z| window(side, z))),
    )
}

pub fn luggage() -> PartNode {
    PartNode::group().children([
        PartNode::group().at(-1.55, 2.3, -3.2).children([
            block(0.52, 0.32, 0.72, mat(0x6b4f1d).rough(0.45)),
            block(0.16, 0.06, 0.3, mat(0x3f2c10).rough(0.4)).at(0.0, 0.22, 0.26),
            rod(0.06, 0.08, mat(0xd1aa42).metal(0.6).rough(0.35)).at(0.0, 0.32, -0.2),
        ]),
        PartNode::group().at(1.55, 2.35, -7.8).children([
            block(0.44, 0.28, 0.58, mat(0x2c5282).rough(0.5)),
            block(0.1, 0.04, 0.26, mat(0x1a365d).rough(0.35)).at(0.0, 0.18, 0.2),
            PartNode::mesh(Shape::ring(0.12, 0.015), mat(0x9ca3af).metal(0.7).rough(0.4))
                .at(0.0, 0.34, -0.1),
        ]),
        PartNode::group().at(0.9, 0.7, -9.5).children([
            block(0.32, 0.5, 0.16, mat(0x1f2937).rough(0.45)),
            block(0.28, 0.18, 0.02, mat(0xd97706).metal(0.2).rough(0.5)).at(0.0, 0.28, 0.1),
        ]),
    ])
}

// ---------------------------------------------------------------------------
// Seating
// ---------------------------------------------------------------------------

/// One seat, facing +Z in its own frame.
pub fn premium_seat(cushion: u32, accent: u32) -> PartNode {
    let armrest = |side: f32| {
        block(0.08, 0.32, 0.65, mat(0x313a4c).metal(0.45).rough(0.5))
            .at(side * 0.3, 0.44, 0.0)
            .shadowed()
    };
    let leg = |x: f32, z: f32| rod(0.04, 0.32, mat(0x8895aa).metal(0.75).rough(0.35)).at(x, 0.0, z);

    PartNode::group()
        .children([
            block(0.58, 0.16, 0.66, mat(0x1a202c).metal(0.6).rough(0.35))
                .at(0.0, 0.1, 0.18)
                .shadowed(),
            block(0.54, 0.24, 0.7, mat(cushion).rough(0.85).metal(0.06))
                .at(0.0, 0.34, 0.0)
                .shadowed(),
            block(0.54, 0.52, 0.24, mat(cushion).rough(0.75).metal(0.05))
                .at(0.0, 0.69, -0.3)
                .shadowed(),
            block(0.54, 0.18, 0.06, mat(accent).metal(0.2).rough(0.4))
                .at(0.0, 0.95, -0.33)
                .shadowed(),
        ])
        .children(both_sides(armrest))
        .children([
            plane(0.5, 0.02, mat(0xffffff).rough(0.3))
                .at(0.0, 0.54, -0.07)
                .rotated(-FRAC_PI_2, 0.0, 0.0),
            plane(0.5, 0.015, mat(accent).rough(0.2))
                .at(0.0, 0.77, -0.2)
                .rotated(-FRAC_PI_2, 0.0, 0.0),
            block(0.58, 0.05, 0.08, mat(0x11161f).metal(0.6).rough(0.3)).at(0.0, 0.15, -0.02),
            leg(0.24, 0.2),
            leg(-0.24, 0.2),
            leg(0.24, -0.18),
            leg(-0.24, -0.18),
            block(0.2, 0.05, 0.02, mat(0x1f2937).metal(0.2).rough(0.4)).at(0.0, 0.9, -0.32),
        ])
}

/// Console between two facing seats, carrying the table top.
pub fn seat_console(table: u32) -> PartNode {
    let cup = |side: f32| {
        rod(0.028, 0.08, mat(0x9ca3af).metal(0.65).rough(0.35)).at(side * 0.1, 0.19, 0.24)
    };

    PartNode::group()
        .at(0.0, 0.56, -0.08)
        .children([
            block(0.26, 0.42, 0.62, mat(0x1f2533).metal(0.55).rough(0.35)),
            block(0.3, 0.08, 0.48, mat(table).rough(0.6).metal(0.22))
                .at(0.0, 0.2, 0.04)
                .shadowed(),
            block(0.22, 0.02, 0.22, mat(0xe5e7eb).rough(0.3))
                .at(0.0, 0.26, 0.16)
                .shadowed(),
            block(0.24, 0.12, 0.14, mat(0x2f3a4e).metal(0.3).rough(0.35)).at(0.0, 0.05, -0.24),
        ])
        .children(both_sides(cup))
}

/// Two seats turned to face the aisle plus their console. Table tops
/// alternate between two greys row by row.
pub fn seat_block(row: &SeatRow, index: usize) -> PartNode {
    let table = if index % 2 == 0 { 0xdfe6f3 } else { 0xcfd7e5 };
    PartNode::group().at(0.0, 0.0, row.z).children([
        premium_seat(row.cushion, row.accent)
            .at(-1.35, 0.36, 0.0)
            .rotated(0.0, FRAC_PI_2, 0.0),
        premium_seat(row.cushion, row.accent)
            .at(1.35, 0.36, 0.0)
            .rotated(0.0, -FRAC_PI_2, 0.0),
        seat_console(table),
    ])
}

pub fn seating() -> PartNode {
    PartNode::group().children(SEAT_ROWS.iter().enumerate().map(|(i, row)| seat_block(row, i)))
}

/// Every interior section, named, in spawn order.
pub fn interior_sections() -> Vec<(&'static str, PartNode)> {
    vec![
        ("Shell", shell()),
        ("Floor", floor()),
        ("Doorway", doorway()),
        ("Handrails", handrails()),
        ("Overhead storage", overhead_storage()),
        ("Info panels", info_panels()),
        ("Ceiling lights", light_panels()),
        ("Windows", windows()),
        ("Luggage", luggage()),
        ("Seating", seating()),
    ]
}

// ---------------------------------------------------------------------------
// Spawning
// ---------------------------------------------------------------------------

/// Spawn the carriage root, its interior and ceiling lights. Returns the
/// root, which is tagged as the passengers' [`EnvironmentAnchor`].
pub fn spawn_interior(commands: &mut Commands, light_intensity: f32) -> Entity {
    let root = commands
        .spawn((
            Carriage,
            EnvironmentAnchor,
            Transform::default(),
            Visibility::default(),
            RestPose(JointPose::IDENTITY),
            Name::new("Carriage"),
        ))
        .id();

    // Interior nodes are never animated, so no accessory roots come back.
    let mut untagged = Vec::new();
    for (name, section) in interior_sections() {
        debug!("Carriage section {name}: {} nodes", section.node_count());
        let id = spawn_part(commands, &section, Some(root), &mut untagged);
        commands.entity(id).insert(Name::new(name));
    }

    for (station, &z) in CEILING_LIGHT_Z.iter().enumerate() {
        let light = commands
            .spawn((
                CeilingLight { station },
                PointLight {
                    color: passengers::palette::hex(CEILING_LIGHT_COLOR),
                    intensity: CEILING_LIGHT_INTENSITY * light_intensity,
                    range: CEILING_LIGHT_RANGE,
                    ..default()
                },
                Transform::from_xyz(0.0, CEILING_LIGHT_Y - 0.05, z),
            ))
            .id();
        commands.entity(root).add_child(light);
    }
    root
}

/// Startup system: build the carriage before passengers are composed.
pub fn spawn_carriage(mut commands: Commands) {
    spawn_interior(&mut commands, crate::lighting::POINT_LIGHT_LUMENS);
    info!(
        "Spawned carriage: {} seat rows, {} windows, {} ceiling lights",
        SEAT_ROWS.len(),
        WINDOW_Z.len() * 2,
        CEILING_LIGHT_Z.len()
    );
}

#[cfg(test)]
mod tests {
    use bevy::ecs::world::CommandQueue;
    use passengers::parts::PartGeometry;

    use super::*;

    fn world_with_carriage() -> (World, Entity) {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        let root = spawn_interior(&mut commands, 1000.0);
        queue.apply(&mut world);
        (world, root)
    }

    #[test]
    fn test_seat_rows_face_the_aisle() {
        let seating = seating();
        assert_eq!(seating.children.len(), SEAT_ROWS.len());
        for (row, block) in SEAT_ROWS.iter().zip(&seating.children) {
            assert_eq!(block.pose.translation.z, row.z);
            let [left, right, _console] = &block.children[..] else {
                panic!("seat block should hold two seats and a console");
            };
            assert_eq!(left.pose.translation.x, -1.35);
            assert_eq!(left.pose.rotation.y, FRAC_PI_2);
            assert_eq!(right.pose.translation.x, 1.35);
            assert_eq!(right.pose.rotation.y, -FRAC_PI_2);
        }
    }

    #[test]
    fn test_table_tops_alternate() {
        let table_color = |index: usize| {
            let block = seat_block(&SEAT_ROWS[index], index);
            block.children[2].children[1].mesh.map(|m| m.material.base_color)
        };
        assert_eq!(table_color(0), table_color(2));
        assert_eq!(table_color(1), table_color(3));
        assert_ne!(table_color(0), table_color(1));
    }

    #[test]
    fn test_windows_line_both_walls() {
        let windows = windows();
        assert_eq!(windows.children.len(), WINDOW_Z.len() * 2);
        let left = windows
            .children
            .iter()
            .filter(|w| w.children[0].pose.translation.x < 0.0)
            .count();
        assert_eq!(left, WINDOW_Z.len());
        // Frame, glass, sill, top strip.
        assert_eq!(windows.mesh_count(), WINDOW_Z.len() * 2 * 4);
    }

    #[test]
    fn test_shell_is_seen_from_inside() {
        let shell = shell();
        let inner = shell.children[1].mesh.map(|m| m.material.double_sided);
        let dome = shell.children[2].mesh.map(|m| m.material.double_sided);
        assert_eq!(inner, Some(true));
        assert_eq!(dome, Some(true));
        assert!(shell.children.iter().all(|c| c.mesh.is_some_and(|m| !m.cast_shadow)));
    }

    #[test]
    fn test_glass_is_translucent() {
        let glass = &windows().children[0].children[1];
        assert_eq!(glass.mesh.and_then(|m| m.material.opacity), Some(0.4));
        let door_glass = &doorway().children[2];
        assert_eq!(door_glass.mesh.and_then(|m| m.material.opacity), Some(0.35));
    }

    #[test]
    fn test_spawn_builds_anchor_with_sections_and_lights() {
        let (mut world, root) = world_with_carriage();
        assert!(world.get::<EnvironmentAnchor>(root).is_some());
        assert!(world.get::<Carriage>(root).is_some());
        assert_eq!(world.get::<RestPose>(root).map(|r| r.0), Some(JointPose::IDENTITY));

        let children = world.get::<Children>(root).map(|c| c.len());
        assert_eq!(children, Some(interior_sections().len() + CEILING_LIGHT_Z.len()));

        let lights: Vec<(CeilingLight, Transform)> = world
            .query::<(&CeilingLight, &Transform)>()
            .iter(&world)
            .map(|(l, t)| (*l, *t))
            .collect();
        assert_eq!(lights.len(), CEILING_LIGHT_Z.len());
        for (light, transform) in lights {
            assert_eq!(transform.translation.z, CEILING_LIGHT_Z[light.station]);
        }

        let expected: usize = interior_sections().iter().map(|(_, s)| s.mesh_count()).sum();
        let meshes = world.query::<&PartGeometry>().iter(&world).count();
        assert_eq!(meshes, expected);

        // Root, every section node and the ceiling lights.
        let nodes: usize = interior_sections().iter().map(|(_, s)| s.node_count()).sum();
        let entities = world.query::<&Transform>().iter(&world).count();
        assert_eq!(entities, 1 + nodes + CEILING_LIGHT_Z.len());
    }

    #[test]
    fn test_luggage_sits_on_racks_and_floor() {
        let luggage = luggage();
        let heights: Vec<f32> = luggage.children.iter().map(|l| l.pose.translation.y).collect();
        assert_eq!(heights, vec![2.3, 2.35, 0.7]);
        assert_eq!(luggage.children[2].pose.rotation, Vec3::ZERO);
    }
}

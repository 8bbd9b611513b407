use bevy::math::Vec3;

use crate::archetype::ArchetypeKind;

// ---------------------------------------------------------------------------
// Idle motion shared by every seated passenger
// ---------------------------------------------------------------------------

/// Peak vertical travel of a seated passenger's root, in scene units.
pub const BOB_AMPLITUDE: f32 = 0.015;
/// Angular frequency of the root bob (radians per second).
pub const BOB_FREQUENCY: f32 = 1.2;

pub const HEAD_YAW_AMPLITUDE: f32 = 0.08;
pub const HEAD_YAW_FREQUENCY: f32 = 0.7;
pub const HEAD_PITCH_AMPLITUDE: f32 = 0.04;
pub const HEAD_PITCH_FREQUENCY: f32 = 0.55;

// ---------------------------------------------------------------------------
// Default joint configuration (applied per arm before overrides)
// ---------------------------------------------------------------------------

pub const DEFAULT_UPPER_ROTATION: Vec3 = Vec3::new(-0.32, 0.0, 0.0);
pub const DEFAULT_FOREARM_ROTATION: Vec3 = Vec3::new(-1.05, 0.0, 0.0);
pub const DEFAULT_WRIST_OFFSET: Vec3 = Vec3::new(0.0, -0.22, 0.12);
pub const DEFAULT_HAND_ROTATION: Vec3 = Vec3::ZERO;

/// Belt color used when a palette does not name one.
pub const DEFAULT_BELT: u32 = 0x1f2937;

// ---------------------------------------------------------------------------
// Rig proportions (local offsets inside the torso joint)
// ---------------------------------------------------------------------------

pub const HEAD_OFFSET: Vec3 = Vec3::new(0.0, 0.94, -0.02);
pub const SHOULDER_OFFSET: Vec3 = Vec3::new(0.28, 0.62, -0.02);
/// Inward twist of each shoulder around Y (mirrored per side).
pub const SHOULDER_TWIST: f32 = 0.08;
/// Elbow joint offset from the shoulder, along the upper arm.
pub const ELBOW_OFFSET: Vec3 = Vec3::new(0.0, -0.34, 0.0);
pub const HIP_OFFSET: Vec3 = Vec3::new(0.12, 0.24, 0.06);

// ---------------------------------------------------------------------------
// Seat grid
// ---------------------------------------------------------------------------

/// Lateral distance of a window seat from the aisle centre line.
pub const SEAT_X: f32 = 1.35;
/// Height of a seated passenger's root above the floor.
pub const SEAT_Y: f32 = 0.9;
/// Seat rows along the carriage, front to back.
pub const ROW_Z: [f32; 4] = [-2.0, -4.5, -7.0, -9.5];

/// Default placement table: who sits where.
pub const DEFAULT_LAYOUT: [(ArchetypeKind, [f32; 3]); 9] = [
    (ArchetypeKind::BusinessTraveler, [-SEAT_X, SEAT_Y, ROW_Z[0]]),
    (ArchetypeKind::Student, [SEAT_X, SEAT_Y, ROW_Z[0]]),
    (ArchetypeKind::Elder, [-SEAT_X, SEAT_Y, ROW_Z[1]]),
    (ArchetypeKind::ParentWithInfant, [SEAT_X, SEAT_Y, ROW_Z[1]]),
    // Stands on the floor beside the parent's seat.
    (ArchetypeKind::Child, [1.6, 0.55, -4.2]),
    (ArchetypeKind::Laborer, [-SEAT_X, SEAT_Y, ROW_Z[2]]),
    (ArchetypeKind::Tourist, [SEAT_X, SEAT_Y, ROW_Z[2]]),
    (ArchetypeKind::Clinician, [-SEAT_X, SEAT_Y, ROW_Z[3]]),
    (ArchetypeKind::Artist, [SEAT_X, SEAT_Y, ROW_Z[3]]),
];

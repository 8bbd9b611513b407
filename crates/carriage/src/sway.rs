use bevy::prelude::*;
use passengers::RestPose;

use crate::interior::Carriage;

const HEAVE_AMPLITUDE: f32 = 0.02;
const HEAVE_FREQUENCY: f32 = 0.5;
const ROLL_AMPLITUDE: f32 = 0.005;
const ROLL_FREQUENCY: f32 = 0.3;

/// Vertical heave and roll (about Z) of the whole carriage at time `t`.
pub fn carriage_sway(t: f32) -> (f32, f32) {
    (
        HEAVE_AMPLITUDE * (HEAVE_FREQUENCY * t).sin(),
        ROLL_AMPLITUDE * (ROLL_FREQUENCY * t).sin(),
    )
}

/// Rock the carriage root from its rest pose. Passengers ride along as
/// children.
pub fn sway_carriage(
    time: Res<Time>,
    mut query: Query<(&RestPose, &mut Transform), With<Carriage>>,
) {
    let (heave, roll) = carriage_sway(time.elapsed_secs());
    for (rest, mut transform) in &mut query {
        let mut pose = rest.0;
        pose.translation.y += heave;
        pose.rotation.z = roll;
        *transform = pose.to_transform();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use passengers::JointPose;

    use super::*;

    fn run_at(world: &mut World, t: f32) {
        let mut time = Time::<()>::default();
        time.advance_to(Duration::from_secs_f32(t));
        world.insert_resource(time);
        let mut schedule = Schedule::default();
        schedule.add_systems(sway_carriage);
        schedule.run(world);
    }

    #[test]
    fn test_sway_is_bounded_and_starts_level() {
        assert_eq!(carriage_sway(0.0), (0.0, 0.0));
        for step in 0..200 {
            let (heave, roll) = carriage_sway(step as f32 * 0.37);
            assert!(heave.abs() <= 0.02 + 1e-6);
            assert!(roll.abs() <= 0.005 + 1e-6);
        }
    }

    #[test]
    fn test_only_the_carriage_moves() {
        let mut world = World::new();
        let rest = JointPose::from_xyz(0.0, 0.5, 0.0);
        let carriage = world
            .spawn((Carriage, RestPose(rest), rest.to_transform()))
            .id();
        let other = world.spawn((RestPose(rest), rest.to_transform())).id();

        run_at(&mut world, 2.0);
        let (heave, roll) = carriage_sway(2.0);
        let Some(moved) = world.get::<Transform>(carriage).copied() else {
            panic!("carriage lost its transform");
        };
        assert!((moved.translation.y - (0.5 + heave)).abs() < 1e-6);
        let (_, _, z) = moved.rotation.to_euler(EulerRot::XYZ);
        assert!((z - roll).abs() < 1e-6);
        assert_eq!(world.get::<Transform>(other).copied(), Some(rest.to_transform()));

        // Recomputed from rest each frame.
        run_at(&mut world, 2.0);
        assert_eq!(world.get::<Transform>(carriage).copied(), Some(moved));
    }
}

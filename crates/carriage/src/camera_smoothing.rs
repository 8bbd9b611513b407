//! Camera damping via exponential interpolation.
//!
//! Input systems write to [`CameraTarget`] (the desired orbit). Each frame,
//! [`smooth_camera_to_target`] moves [`OrbitCamera`] toward it:
//!
//!   `value += (target - value) * (1 - exp(-speed * dt))`
//!
//! so the camera keeps gliding briefly after the mouse stops, independent of
//! frame rate.

use bevy::prelude::*;

use crate::camera::OrbitCamera;

#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraSmoothingConfig {
    /// Smoothing speed for the focus point (higher = snappier).
    pub position_speed: f32,
    pub zoom_speed: f32,
    /// Smoothing speed for yaw/pitch.
    pub rotation_speed: f32,
    /// Snap to the target once closer than this.
    pub epsilon: f32,
}

impl Default for CameraSmoothingConfig {
    /// About 5% of the remaining gap per frame at 60 fps.
    fn default() -> Self {
        Self {
            position_speed: 3.0,
            zoom_speed: 3.0,
            rotation_speed: 3.0,
            epsilon: 0.001,
        }
    }
}

/// Where input has asked the camera to be.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraTarget(pub OrbitCamera);

/// Exponential interpolation factor for a given speed and delta time, in
/// `[0, 1]`.
#[inline]
fn exp_lerp_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

fn approach(value: &mut f32, target: f32, factor: f32, eps: f32) {
    let delta = target - *value;
    if delta.abs() > eps {
        *value += delta * factor;
    } else if delta != 0.0 {
        *value = target;
    }
}

/// One smoothing step of `orbit` toward `target` over `dt` seconds.
pub fn smooth_step(
    orbit: &mut OrbitCamera,
    target: &OrbitCamera,
    config: &CameraSmoothingConfig,
    dt: f32,
) {
    let eps = config.epsilon;

    let focus_delta = target.focus - orbit.focus;
    if focus_delta.length_squared() > eps * eps {
        orbit.focus += focus_delta * exp_lerp_factor(config.position_speed, dt);
    } else if focus_delta.length_squared() > 0.0 {
        orbit.focus = target.focus;
    }

    approach(
        &mut orbit.distance,
        target.distance,
        exp_lerp_factor(config.zoom_speed, dt),
        eps,
    );
    let rot_factor = exp_lerp_factor(config.rotation_speed, dt);
    approach(&mut orbit.yaw, target.yaw, rot_factor, eps);
    approach(&mut orbit.pitch, target.pitch, rot_factor, eps);
}

/// System: lerp `OrbitCamera` toward `CameraTarget` each frame. Leaves the
/// camera untouched once it has arrived so change detection stays quiet.
pub fn smooth_camera_to_target(
    target: Res<CameraTarget>,
    config: Res<CameraSmoothingConfig>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 || *orbit == target.0 {
        return;
    }
    smooth_step(&mut orbit, &target.0, &config, dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_bounds() {
        assert_eq!(exp_lerp_factor(3.0, 0.0), 0.0);
        let f = exp_lerp_factor(3.0, 1.0 / 60.0);
        assert!((f - 0.0488).abs() < 1e-3);
        assert!(exp_lerp_factor(3.0, 100.0) <= 1.0);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let config = CameraSmoothingConfig::default();
        let mut orbit = OrbitCamera::default();
        let mut target = orbit;
        target.yaw = 1.0;
        target.distance = 4.0;
        target.focus.x = 0.5;

        let mut last_gap = f32::MAX;
        for _ in 0..600 {
            smooth_step(&mut orbit, &target, &config, 1.0 / 60.0);
            let gap = (target.yaw - orbit.yaw).abs();
            assert!(gap <= last_gap);
            assert!(orbit.yaw <= target.yaw);
            last_gap = gap;
        }
        assert_eq!(orbit, target);
    }

    #[test]
    fn test_system_waits_for_time_to_pass() {
        let mut world = World::new();
        world.init_resource::<CameraSmoothingConfig>();
        world.init_resource::<OrbitCamera>();
        let mut target = OrbitCamera::default();
        target.pitch = 0.3;
        world.insert_resource(CameraTarget(target));
        world.insert_resource(Time::<()>::default());

        let mut schedule = Schedule::default();
        schedule.add_systems(smooth_camera_to_target);
        schedule.run(&mut world);
        assert_eq!(*world.resource::<OrbitCamera>(), OrbitCamera::default());

        world
            .resource_mut::<Time>()
            .advance_by(std::time::Duration::from_millis(16));
        schedule.run(&mut world);
        let pitch = world.resource::<OrbitCamera>().pitch;
        assert!(pitch > OrbitCamera::default().pitch && pitch < 0.3);
    }
}

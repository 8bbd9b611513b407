use std::f32::consts::{FRAC_PI_2, PI};

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::camera_smoothing::CameraTarget;
use crate::egui_input_guard::egui_wants_pointer;
use crate::lighting::sky_fog;

/// Point the camera orbits: mid-carriage, at seated head height.
pub const FOCUS: Vec3 = Vec3::new(0.0, 1.2, -4.0);
/// Where the camera starts, behind the doorway end.
pub const START_EYE: Vec3 = Vec3::new(0.0, 1.6, 5.0);
pub const FOV_DEGREES: f32 = 60.0;

pub const MIN_DISTANCE: f32 = 3.0;
pub const MAX_DISTANCE: f32 = 15.0;
/// Largest angle between the view ray and straight up; just past horizontal.
pub const MAX_POLAR: f32 = PI / 1.8;
const MIN_PITCH: f32 = FRAC_PI_2 - MAX_POLAR;
const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

const ORBIT_SENSITIVITY: f32 = 0.005;
/// Pan distance per pixel, per unit of orbit distance.
const PAN_SENSITIVITY: f32 = 0.0015;
const ZOOM_SPEED: f32 = 0.1;

/// Orbital camera model: camera orbits around a focus point.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub focus: Vec3,
    /// Horizontal rotation in radians; 0 looks down -Z.
    pub yaw: f32,
    /// Elevation above the focus in radians.
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(START_EYE, FOCUS)
    }
}

impl OrbitCamera {
    /// The orbit that places the camera at `eye`, looking at `focus`.
    pub fn looking_from(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length();
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
        }
        .clamped()
    }

    pub fn clamped(mut self) -> Self {
        self.pitch = self.pitch.clamp(MIN_PITCH, MAX_PITCH);
        self.distance = self.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        self
    }

    /// Angle between the view ray and straight up.
    pub fn polar(&self) -> f32 {
        FRAC_PI_2 - self.pitch
    }

    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.focus + Vec3::new(x, y, z)
    }

    pub fn to_transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }

    /// Dragging right swings the camera left around the focus; dragging down
    /// raises it.
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Slide the focus in the view plane so the scene follows the cursor.
    pub fn pan(&mut self, delta: Vec2) {
        let scale = self.distance * PAN_SENSITIVITY;
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let right = Vec3::new(cos_yaw, 0.0, -sin_yaw);
        let up = Vec3::new(-sin_pitch * sin_yaw, cos_pitch, -sin_pitch * cos_yaw);
        self.focus += (up * delta.y - right * delta.x) * scale;
    }

    /// Positive `steps` (scroll up) moves closer.
    pub fn zoom(&mut self, steps: f32) {
        let factor = 1.0 - steps * ZOOM_SPEED;
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

#[derive(Resource, Default)]
pub struct CameraPanDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            ..default()
        }),
        orbit.to_transform(),
        sky_fog(),
        Name::new("Camera"),
    ));
}

pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = orbit.to_transform();
}

/// Shared drag bookkeeping: returns the cursor movement since last frame
/// while `button` is held.
fn drag_delta(
    button: MouseButton,
    buttons: &ButtonInput<MouseButton>,
    window: &Window,
    dragging: &mut bool,
    last_pos: &mut Vec2,
) -> Option<Vec2> {
    if buttons.just_pressed(button) {
        if let Some(pos) = window.cursor_position() {
            *dragging = true;
            *last_pos = pos;
        }
    }
    // Releases can be missed while the pointer is over the overlay.
    if !buttons.pressed(button) {
        *dragging = false;
    }
    if !*dragging {
        return None;
    }
    let pos = window.cursor_position()?;
    let delta = pos - *last_pos;
    *last_pos = pos;
    Some(delta)
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<CameraOrbitDrag>,
    mut target: ResMut<CameraTarget>,
    mut contexts: EguiContexts,
) {
    if egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let drag = &mut *drag;
    if let Some(delta) = drag_delta(
        MouseButton::Left,
        &buttons,
        window,
        &mut drag.dragging,
        &mut drag.last_pos,
    ) {
        if delta != Vec2::ZERO {
            target.0.orbit(delta);
        }
    }
}

/// Right-mouse drag: pan focus.
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<CameraPanDrag>,
    mut target: ResMut<CameraTarget>,
    mut contexts: EguiContexts,
) {
    if egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let drag = &mut *drag;
    if let Some(delta) = drag_delta(
        MouseButton::Right,
        &buttons,
        window,
        &mut drag.dragging,
        &mut drag.last_pos,
    ) {
        if delta != Vec2::ZERO {
            target.0.pan(delta);
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut target: ResMut<CameraTarget>,
    mut contexts: EguiContexts,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        target.0.zoom(dy);
    }
}

#[cfg(test)]
mod tests {
    use bevy_egui::EguiUserTextures;

    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_default_orbit_starts_at_the_doorway() {
        let orbit = OrbitCamera::default();
        assert!(close(orbit.eye(), START_EYE), "eye was {}", orbit.eye());
        assert_eq!(orbit.focus, FOCUS);
        assert!(orbit.yaw.abs() < 1e-6);
        assert!((MIN_DISTANCE..=MAX_DISTANCE).contains(&orbit.distance));

        let transform = orbit.to_transform();
        let toward_focus = (FOCUS - START_EYE).normalize();
        assert!(transform.forward().dot(toward_focus) > 0.9999);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera::default();
        for _ in 0..100 {
            orbit.zoom(1.0);
        }
        assert_eq!(orbit.distance, MIN_DISTANCE);
        for _ in 0..100 {
            orbit.zoom(-1.0);
        }
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_orbit_never_passes_the_polar_limit() {
        let mut orbit = OrbitCamera::default();
        orbit.orbit(Vec2::new(0.0, -10_000.0));
        assert!(orbit.polar() <= MAX_POLAR + 1e-6);
        assert!((orbit.polar() - MAX_POLAR).abs() < 1e-6);
        orbit.orbit(Vec2::new(0.0, 10_000.0));
        assert!(orbit.pitch < FRAC_PI_2);

        let before = orbit.yaw;
        orbit.orbit(Vec2::new(100.0, 0.0));
        assert!((orbit.yaw - (before - 0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_pan_moves_focus_in_view_plane() {
        let mut orbit = OrbitCamera::default();
        let forward = (orbit.focus - orbit.eye()).normalize();
        orbit.pan(Vec2::new(120.0, -40.0));
        let moved = orbit.focus - FOCUS;
        assert!(moved.length() > 0.0);
        assert!(moved.dot(forward).abs() < 1e-4);
        // Dragging right slides the focus toward -X when looking down -Z.
        assert!(moved.x < 0.0);
    }

    #[test]
    fn test_out_of_range_start_is_clamped() {
        let far = OrbitCamera::looking_from(Vec3::new(0.0, 1.2, 40.0), FOCUS);
        assert_eq!(far.distance, MAX_DISTANCE);
        let below = OrbitCamera::looking_from(Vec3::new(0.0, -5.0, -3.0), FOCUS);
        assert!((below.polar() - MAX_POLAR).abs() < 1e-6);
    }

    #[test]
    fn test_scroll_events_zoom_the_target() {
        let mut world = World::new();
        world.init_resource::<Events<MouseWheel>>();
        world.init_resource::<CameraTarget>();
        world.init_resource::<EguiUserTextures>();
        world.send_event(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: 2.0,
            window: Entity::PLACEHOLDER,
        });

        let mut schedule = Schedule::default();
        schedule.add_systems(camera_zoom);
        schedule.run(&mut world);

        let expected = OrbitCamera::default().distance * 0.8;
        assert!((world.resource::<CameraTarget>().0.distance - expected).abs() < 1e-5);
    }

    #[test]
    fn test_input_chain_runs_headless() {
        let mut world = World::new();
        world.init_resource::<Events<MouseWheel>>();
        world.init_resource::<ButtonInput<MouseButton>>();
        world.init_resource::<CameraOrbitDrag>();
        world.init_resource::<CameraPanDrag>();
        world.init_resource::<CameraTarget>();
        world.init_resource::<EguiUserTextures>();
        world.send_event(MouseWheel {
            unit: MouseScrollUnit::Pixel,
            x: 0.0,
            y: -100.0,
            window: Entity::PLACEHOLDER,
        });

        let mut schedule = Schedule::default();
        schedule.add_systems((camera_orbit_drag, camera_pan_drag, camera_zoom).chain());
        schedule.run(&mut world);

        // No window: drags are ignored, the scroll still zooms out.
        let target = world.resource::<CameraTarget>().0;
        let start = OrbitCamera::default();
        assert_eq!(target.focus, start.focus);
        assert_eq!(target.yaw, start.yaw);
        assert!((target.distance - start.distance * 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_apply_writes_camera_transform() {
        let mut world = World::new();
        let mut orbit = OrbitCamera::default();
        orbit.yaw = 0.7;
        world.insert_resource(orbit);
        let camera = world.spawn((Camera3d::default(), Transform::default())).id();

        let mut schedule = Schedule::default();
        schedule.add_systems(apply_orbit_camera);
        schedule.run(&mut world);

        let eye = world.get::<Transform>(camera).map(|t| t.translation);
        assert!(eye.is_some_and(|e| close(e, orbit.eye())));
    }
}

//! The train carriage the passengers ride in: interior geometry, lighting,
//! gentle sway and an orbit camera.
//!
//! The carriage root is spawned in [`ComposeSet::Environment`] and tagged as
//! the [`passengers::EnvironmentAnchor`], so passengers composed afterwards
//! become its children and sway with it.

use bevy::prelude::*;
use passengers::ComposeSet;

pub mod camera;
pub mod camera_smoothing;
pub mod egui_input_guard;
pub mod interior;
pub mod lighting;
pub mod sway;

use camera::{CameraOrbitDrag, CameraPanDrag, OrbitCamera};
use camera_smoothing::{CameraSmoothingConfig, CameraTarget};

pub use interior::{spawn_carriage, Carriage};
pub use sway::carriage_sway;

pub struct CarriagePlugin;

impl Plugin for CarriagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitCamera>()
            .init_resource::<CameraTarget>()
            .init_resource::<CameraSmoothingConfig>()
            .init_resource::<CameraOrbitDrag>()
            .init_resource::<CameraPanDrag>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    lighting::setup_lighting,
                    spawn_carriage.in_set(ComposeSet::Environment),
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit_drag,
                    camera::camera_pan_drag,
                    camera::camera_zoom,
                    camera_smoothing::smooth_camera_to_target,
                    camera::apply_orbit_camera,
                )
                    .chain(),
            )
            .add_systems(Update, sway::sway_carriage);
    }
}

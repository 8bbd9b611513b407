//! Procedurally assembled, continuously animated train passengers.
//!
//! [`PassengersPlugin`] spawns the passengers named by [`PassengerLayout`]
//! at startup, parents them under the entity tagged [`EnvironmentAnchor`]
//! (if any), and animates them every frame from elapsed time alone.

use bevy::prelude::*;

pub mod animation;
pub mod archetype;
pub mod composer;
pub mod config;
pub mod error;
pub mod palette;
pub mod parts;
pub mod pose;
pub mod rig;

pub use animation::{animate_passengers, frame_poses, HookBinding, HookTarget, Passenger};
pub use archetype::{spawn_archetype, ArchetypeBlueprint, ArchetypeKind};
pub use composer::{
    spawn_passengers, ComposeSet, EnvironmentAnchor, PassengerLayout, PassengerScene,
    SeatPlacement,
};
pub use error::UnknownVariant;
pub use pose::{JointPose, PoseHook, RestPose};
pub use rig::{assemble, AttachmentPoint, JointConfig, JointOverrides, RigConfig, RigJoints, Side};

pub struct PassengersPlugin;

impl Plugin for PassengersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PassengerLayout>()
            .init_resource::<parts::PartMeshCache>()
            .configure_sets(
                Startup,
                (ComposeSet::Environment, ComposeSet::Passengers).chain(),
            )
            .add_systems(
                Startup,
                composer::compose_passengers.in_set(ComposeSet::Passengers),
            )
            .add_systems(
                Update,
                (animate_passengers, parts::materialize_part_meshes),
            );
    }
}

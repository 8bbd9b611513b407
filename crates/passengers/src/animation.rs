//! Per-frame kinematic animation.
//!
//! Every touched node is recomputed from its [`RestPose`] each frame, so a
//! frame depends only on elapsed time and the passenger's own configuration.
//! Hooks address nodes through [`HookTarget`]s that are resolved to entities
//! on the passenger itself; a passenger never reaches into another's rig.

use bevy::prelude::*;

use crate::archetype::ArchetypeKind;
use crate::config::{
    BOB_AMPLITUDE, BOB_FREQUENCY, HEAD_PITCH_AMPLITUDE, HEAD_PITCH_FREQUENCY, HEAD_YAW_AMPLITUDE,
    HEAD_YAW_FREQUENCY,
};
use crate::parts::AccessoryKind;
use crate::pose::{JointPose, PoseHook, RestPose};
use crate::rig::{AttachmentPoint, RigJoints};

// ---------------------------------------------------------------------------
// Hook bindings
// ---------------------------------------------------------------------------

/// What a hook drives: a rig joint or an accessory root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookTarget {
    Joint(AttachmentPoint),
    Accessory(AccessoryKind),
}

#[derive(Clone, Copy, Debug)]
pub struct HookBinding {
    pub target: HookTarget,
    pub hook: PoseHook,
}

impl HookBinding {
    pub fn joint(point: AttachmentPoint, hook: fn(f32, &mut JointPose)) -> Self {
        Self {
            target: HookTarget::Joint(point),
            hook: PoseHook(hook),
        }
    }

    pub fn accessory(kind: AccessoryKind, hook: fn(f32, &mut JointPose)) -> Self {
        Self {
            target: HookTarget::Accessory(kind),
            hook: PoseHook(hook),
        }
    }
}

// ---------------------------------------------------------------------------
// Passenger component
// ---------------------------------------------------------------------------

/// Idle motion applied before hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseMotion {
    /// Root bob and head sway.
    Seated,
    /// Hooks only.
    Free,
}

/// The joints a passenger exposes to the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RigHandles {
    Seated(RigJoints),
    /// Standalone figure with a single animated root.
    Free { root: Entity },
}

/// Marker and animation state on a passenger's root entity.
#[derive(Component, Clone, Debug)]
pub struct Passenger {
    pub kind: ArchetypeKind,
    pub rig: RigHandles,
    /// Accessory roots spawned for this passenger, in spawn order.
    pub accessories: Vec<(AccessoryKind, Entity)>,
    pub hooks: Vec<HookBinding>,
}

impl Passenger {
    pub fn root(&self) -> Entity {
        match self.rig {
            RigHandles::Seated(joints) => joints.root,
            RigHandles::Free { root } => root,
        }
    }

    pub fn base_motion(&self) -> BaseMotion {
        match self.rig {
            RigHandles::Seated(_) => BaseMotion::Seated,
            RigHandles::Free { .. } => BaseMotion::Free,
        }
    }

    /// Entity behind a hook target, if this passenger has one.
    pub fn resolve(&self, target: HookTarget) -> Option<Entity> {
        match (target, self.rig) {
            (HookTarget::Joint(point), RigHandles::Seated(joints)) => Some(joints.get(point)),
            (HookTarget::Joint(AttachmentPoint::Root), RigHandles::Free { root }) => Some(root),
            (HookTarget::Joint(_), RigHandles::Free { .. }) => None,
            (HookTarget::Accessory(kind), _) => self
                .accessories
                .iter()
                .find(|(k, _)| *k == kind)
                .map(|(_, entity)| *entity),
        }
    }
}

// ---------------------------------------------------------------------------
// Pure motion
// ---------------------------------------------------------------------------

/// Vertical offset of a seated root from its rest height.
pub fn root_bob(t: f32) -> f32 {
    BOB_AMPLITUDE * (BOB_FREQUENCY * t).sin()
}

/// Head `(yaw, pitch)` in radians.
pub fn head_sway(t: f32) -> (f32, f32) {
    (
        HEAD_YAW_AMPLITUDE * (HEAD_YAW_FREQUENCY * t).sin(),
        HEAD_PITCH_AMPLITUDE * (HEAD_PITCH_FREQUENCY * t).sin(),
    )
}

fn touch<'a>(
    frame: &'a mut Vec<(Entity, JointPose)>,
    entity: Entity,
    rest: &impl Fn(Entity) -> Option<JointPose>,
) -> Option<&'a mut JointPose> {
    let index = match frame.iter().position(|(e, _)| *e == entity) {
        Some(index) => index,
        None => {
            frame.push((entity, rest(entity)?));
            frame.len() - 1
        }
    };
    frame.get_mut(index).map(|(_, pose)| pose)
}

/// The poses of every node this passenger animates at time `t`, in the
/// order bob, sway, hooks. `rest` supplies each node's rest pose; nodes it
/// does not know are skipped.
pub fn frame_poses(
    t: f32,
    passenger: &Passenger,
    rest: impl Fn(Entity) -> Option<JointPose>,
) -> Vec<(Entity, JointPose)> {
    let mut frame = Vec::with_capacity(2 + passenger.hooks.len());

    if let RigHandles::Seated(joints) = passenger.rig {
        if let Some(pose) = touch(&mut frame, joints.root, &rest) {
            pose.translation.y += root_bob(t);
        }
        if let Some(pose) = touch(&mut frame, joints.head, &rest) {
            let (yaw, pitch) = head_sway(t);
            pose.rotation.y = yaw;
            pose.rotation.x = pitch;
        }
    }

    for binding in &passenger.hooks {
        let Some(entity) = passenger.resolve(binding.target) else {
            continue;
        };
        if let Some(pose) = touch(&mut frame, entity, &rest) {
            binding.hook.apply(t, pose);
        }
    }

    frame
}

/// Write one passenger's frame poses into its transforms.
pub fn drive_passenger(
    t: f32,
    passenger: &Passenger,
    nodes: &mut Query<(&RestPose, &mut Transform)>,
) {
    let frame = frame_poses(t, passenger, |entity| {
        nodes.get(entity).ok().map(|(rest, _)| rest.0)
    });
    for (entity, pose) in frame {
        let Ok((_, mut transform)) = nodes.get_mut(entity) else {
            continue;
        };
        *transform = pose.to_transform();
    }
}

pub fn animate_passengers(
    time: Res<Time>,
    passengers: Query<&Passenger>,
    mut nodes: Query<(&RestPose, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    for passenger in &passengers {
        drive_passenger(t, passenger, &mut nodes);
    }
}

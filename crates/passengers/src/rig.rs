//! Seated rig assembly.
//!
//! A rig is a fixed joint hierarchy:
//!
//! ```text
//! root (placement, orientation yaw, scale)
//! └── torso (lean)
//!     ├── leg L / leg R
//!     ├── head
//!     └── shoulder L / R
//!         └── elbow (forearm)
//!             └── wrist (held accessory)
//! ```
//!
//! Every joint carries a [`Joint`] tag and a [`RestPose`]; the
//! [`RigJoints`] returned by [`assemble`] are the stable IDs that accessories
//! and animation hooks bind to.

use std::f32::consts::FRAC_PI_2;
use std::str::FromStr;

use bevy::prelude::*;

use crate::config::{
    DEFAULT_BELT, DEFAULT_FOREARM_ROTATION, DEFAULT_HAND_ROTATION, DEFAULT_UPPER_ROTATION,
    DEFAULT_WRIST_OFFSET, ELBOW_OFFSET, HEAD_OFFSET, HIP_OFFSET, SHOULDER_OFFSET, SHOULDER_TWIST,
};
use crate::error::UnknownVariant;
use crate::palette::{hex, HairColor, SkinTone};
use crate::parts::{self, spawn_part, AccessoryKind, Expression, HairStyle, Part, PartNode};
use crate::pose::{JointPose, PoseHook, RestPose};

// ---------------------------------------------------------------------------
// Sides and orientation
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// -1 for left, +1 for right: mirrors X offsets.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Which way a seated passenger faces, as a yaw of the whole rig.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Left,
    Right,
    Center,
}

impl Orientation {
    pub fn yaw(self) -> f32 {
        match self {
            Orientation::Left => FRAC_PI_2,
            Orientation::Right => -FRAC_PI_2,
            Orientation::Center => 0.0,
        }
    }

    /// Parse an orientation name, falling back to [`Orientation::Center`].
    pub fn from_name_or_fallback(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: UnknownVariant| {
            warn!("{err}; facing forward");
            Orientation::Center
        })
    }
}

impl FromStr for Orientation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Orientation::Left),
            "right" => Ok(Orientation::Right),
            "center" => Ok(Orientation::Center),
            other => Err(UnknownVariant::Orientation(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-arm configuration
// ---------------------------------------------------------------------------

/// Fully specified configuration of one arm.
#[derive(Clone, Debug)]
pub struct JointConfig {
    /// Euler rotation of the upper-arm segment about the shoulder.
    pub upper_rotation: Vec3,
    /// Euler rotation of the elbow joint, which carries the forearm.
    pub forearm_rotation: Vec3,
    /// Wrist position in elbow space.
    pub wrist_offset: Vec3,
    pub hand_rotation: Vec3,
    /// Held accessory, spawned under the wrist.
    pub accessory: Option<PartNode>,
    /// Per-frame hook bound to the elbow (forearm) joint.
    pub animation: Option<PoseHook>,
}

impl Default for JointConfig {
    fn default() -> Self {
        Self {
            upper_rotation: DEFAULT_UPPER_ROTATION,
            forearm_rotation: DEFAULT_FOREARM_ROTATION,
            wrist_offset: DEFAULT_WRIST_OFFSET,
            hand_rotation: DEFAULT_HAND_ROTATION,
            accessory: None,
            animation: None,
        }
    }
}

/// Caller overrides for an arm. Every field left `None` keeps its default.
#[derive(Clone, Debug, Default)]
pub struct JointOverrides {
    pub upper_rotation: Option<Vec3>,
    pub forearm_rotation: Option<Vec3>,
    pub wrist_offset: Option<Vec3>,
    pub hand_rotation: Option<Vec3>,
    pub accessory: Option<PartNode>,
    pub animation: Option<PoseHook>,
}

impl JointOverrides {
    pub fn upper(mut self, x: f32, y: f32, z: f32) -> Self {
        self.upper_rotation = Some(Vec3::new(x, y, z));
        self
    }

    pub fn forearm(mut self, x: f32, y: f32, z: f32) -> Self {
        self.forearm_rotation = Some(Vec3::new(x, y, z));
        self
    }

    pub fn wrist(mut self, x: f32, y: f32, z: f32) -> Self {
        self.wrist_offset = Some(Vec3::new(x, y, z));
        self
    }

    pub fn hand(mut self, x: f32, y: f32, z: f32) -> Self {
        self.hand_rotation = Some(Vec3::new(x, y, z));
        self
    }

    pub fn holding(mut self, accessory: PartNode) -> Self {
        self.accessory = Some(accessory);
        self
    }

    pub fn animated(mut self, hook: fn(f32, &mut JointPose)) -> Self {
        self.animation = Some(PoseHook(hook));
        self
    }

    /// Apply these overrides to the default arm configuration. Each field is
    /// taken independently.
    pub fn merge(self) -> JointConfig {
        let defaults = JointConfig::default();
        JointConfig {
            upper_rotation: self.upper_rotation.unwrap_or(defaults.upper_rotation),
            forearm_rotation: self.forearm_rotation.unwrap_or(defaults.forearm_rotation),
            wrist_offset: self.wrist_offset.unwrap_or(defaults.wrist_offset),
            hand_rotation: self.hand_rotation.unwrap_or(defaults.hand_rotation),
            accessory: self.accessory.or(defaults.accessory),
            animation: self.animation.or(defaults.animation),
        }
    }
}

impl From<JointOverrides> for JointConfig {
    fn from(overrides: JointOverrides) -> Self {
        overrides.merge()
    }
}

// ---------------------------------------------------------------------------
// Rig configuration
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigPalette {
    /// Shirt and sleeves.
    pub torso: Color,
    pub accent: Option<Color>,
    pub belt: Option<Color>,
    pub trouser: Color,
    pub shoe: Color,
    pub skin: SkinTone,
    pub hair: HairColor,
}

impl RigPalette {
    /// Palette from packed `0xRRGGBB` colors; the belt keeps its default.
    pub fn new(torso: u32, accent: u32, trouser: u32, shoe: u32) -> Self {
        Self {
            torso: hex(torso),
            accent: Some(hex(accent)),
            trouser: hex(trouser),
            shoe: hex(shoe),
            ..default()
        }
    }

    pub fn belt(mut self, rgb: u32) -> Self {
        self.belt = Some(hex(rgb));
        self
    }

    pub fn skin(mut self, skin: SkinTone) -> Self {
        self.skin = skin;
        self
    }

    pub fn hair(mut self, hair: HairColor) -> Self {
        self.hair = hair;
        self
    }
}

impl Default for RigPalette {
    fn default() -> Self {
        Self {
            torso: hex(0x64748b),
            accent: None,
            belt: Some(hex(DEFAULT_BELT)),
            trouser: hex(0x1f2937),
            shoe: hex(0x111827),
            skin: SkinTone::default(),
            hair: HairColor::default(),
        }
    }
}

/// Everything needed to assemble one seated rig. Constructed complete:
/// there is no partially specified state.
#[derive(Clone, Debug)]
pub struct RigConfig {
    pub placement: Vec3,
    pub orientation: Orientation,
    pub palette: RigPalette,
    pub hair_style: HairStyle,
    pub expression: Expression,
    pub head_accessory: Option<PartNode>,
    pub left_arm: JointConfig,
    pub right_arm: JointConfig,
    /// Forward lean of the torso joint, in radians about X.
    pub lean: f32,
    pub scale: f32,
}

impl RigConfig {
    pub fn new(placement: Vec3) -> Self {
        Self {
            placement,
            orientation: Orientation::default(),
            palette: RigPalette::default(),
            hair_style: HairStyle::default(),
            expression: Expression::default(),
            head_accessory: None,
            left_arm: JointConfig::default(),
            right_arm: JointConfig::default(),
            lean: 0.0,
            scale: 1.0,
        }
    }

    pub fn facing(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn palette(mut self, palette: RigPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn hair(mut self, style: HairStyle) -> Self {
        self.hair_style = style;
        self
    }

    pub fn expression(mut self, expression: Expression) -> Self {
        self.expression = expression;
        self
    }

    pub fn head_accessory(mut self, accessory: PartNode) -> Self {
        self.head_accessory = Some(accessory);
        self
    }

    pub fn arm(mut self, side: Side, overrides: JointOverrides) -> Self {
        *self.arm_mut(side) = overrides.merge();
        self
    }

    pub fn lean(mut self, lean: f32) -> Self {
        self.lean = lean;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn arm_config(&self, side: Side) -> &JointConfig {
        match side {
            Side::Left => &self.left_arm,
            Side::Right => &self.right_arm,
        }
    }

    fn arm_mut(&mut self, side: Side) -> &mut JointConfig {
        match side {
            Side::Left => &mut self.left_arm,
            Side::Right => &mut self.right_arm,
        }
    }

    /// Arm hooks with the elbow joint each one drives.
    pub fn arm_hooks(&self) -> impl Iterator<Item = (AttachmentPoint, PoseHook)> + '_ {
        Side::BOTH.into_iter().filter_map(|side| {
            self.arm_config(side)
                .animation
                .map(|hook| (AttachmentPoint::Elbow(side), hook))
        })
    }

    pub fn root_pose(&self) -> JointPose {
        JointPose::from_translation(self.placement)
            .with_rotation(Vec3::new(0.0, self.orientation.yaw(), 0.0))
            .with_scale(Vec3::splat(self.scale))
    }
}

// ---------------------------------------------------------------------------
// Joints
// ---------------------------------------------------------------------------

/// Named attachment point on a rig.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttachmentPoint {
    Root,
    Torso,
    Head,
    Shoulder(Side),
    Elbow(Side),
    Wrist(Side),
    Leg(Side),
}

/// A rig joint and the passenger root that owns it.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Joint {
    pub owner: Entity,
    pub point: AttachmentPoint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmJoints {
    pub shoulder: Entity,
    pub elbow: Entity,
    pub wrist: Entity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RigJoints {
    pub root: Entity,
    pub torso: Entity,
    pub head: Entity,
    pub left: ArmJoints,
    pub right: ArmJoints,
    pub left_leg: Entity,
    pub right_leg: Entity,
}

impl RigJoints {
    pub const JOINT_COUNT: usize = 13;

    pub fn get(&self, point: AttachmentPoint) -> Entity {
        match point {
            AttachmentPoint::Root => self.root,
            AttachmentPoint::Torso => self.torso,
            AttachmentPoint::Head => self.head,
            AttachmentPoint::Shoulder(side) => self.arm(side).shoulder,
            AttachmentPoint::Elbow(side) => self.arm(side).elbow,
            AttachmentPoint::Wrist(side) => self.arm(side).wrist,
            AttachmentPoint::Leg(Side::Left) => self.left_leg,
            AttachmentPoint::Leg(Side::Right) => self.right_leg,
        }
    }

    pub fn arm(&self, side: Side) -> &ArmJoints {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn all(&self) -> [(AttachmentPoint, Entity); Self::JOINT_COUNT] {
        let mut points = [AttachmentPoint::Root; Self::JOINT_COUNT];
        points[1] = AttachmentPoint::Torso;
        points[2] = AttachmentPoint::Head;
        for (i, side) in Side::BOTH.into_iter().enumerate() {
            points[3 + i * 4] = AttachmentPoint::Shoulder(side);
            points[4 + i * 4] = AttachmentPoint::Elbow(side);
            points[5 + i * 4] = AttachmentPoint::Wrist(side);
            points[6 + i * 4] = AttachmentPoint::Leg(side);
        }
        points.map(|point| (point, self.get(point)))
    }
}

/// Result of [`assemble`]: joint IDs plus every accessory spawned on the rig.
#[derive(Clone, Debug)]
pub struct AssembledRig {
    pub joints: RigJoints,
    pub accessories: Vec<(AccessoryKind, Entity)>,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

fn spawn_joint(
    commands: &mut Commands,
    owner: Entity,
    parent: Entity,
    point: AttachmentPoint,
    pose: JointPose,
) -> Entity {
    let joint = commands
        .spawn((
            pose.to_transform(),
            Visibility::default(),
            RestPose(pose),
            Joint { owner, point },
            Name::new(format!("{point:?}")),
        ))
        .id();
    commands.entity(parent).add_child(joint);
    joint
}

fn attach(
    commands: &mut Commands,
    part: Part,
    parent: Entity,
    accessories: &mut Vec<(AccessoryKind, Entity)>,
) {
    if let Some(node) = parts::build(&part) {
        spawn_part(commands, &node, Some(parent), accessories);
    }
}

/// Spawn the joint hierarchy for `config` and return its attachment points.
/// Never fails: every input has already been resolved to a concrete value.
pub fn assemble(commands: &mut Commands, config: &RigConfig) -> AssembledRig {
    let palette = &config.palette;
    let skin = palette.skin.color();
    let mut accessories = Vec::new();

    let root_pose = config.root_pose();
    let root = commands
        .spawn((root_pose.to_transform(), Visibility::default(), RestPose(root_pose)))
        .id();
    commands.entity(root).insert(Joint {
        owner: root,
        point: AttachmentPoint::Root,
    });

    let torso = spawn_joint(
        commands,
        root,
        root,
        AttachmentPoint::Torso,
        JointPose::IDENTITY.with_rotation(Vec3::new(config.lean, 0.0, 0.0)),
    );

    let mut legs = [Entity::PLACEHOLDER; 2];
    for (i, side) in Side::BOTH.into_iter().enumerate() {
        let hip = HIP_OFFSET * Vec3::new(side.sign(), 1.0, 1.0);
        legs[i] = spawn_joint(
            commands,
            root,
            torso,
            AttachmentPoint::Leg(side),
            JointPose::from_translation(hip),
        );
        attach(
            commands,
            Part::Leg {
                trouser: palette.trouser,
                shoe: palette.shoe,
            },
            legs[i],
            &mut accessories,
        );
    }

    attach(
        commands,
        Part::Torso {
            torso: palette.torso,
            accent: palette.accent,
            belt: palette.belt,
        },
        torso,
        &mut accessories,
    );

    let mut arms = [ArmJoints {
        shoulder: Entity::PLACEHOLDER,
        elbow: Entity::PLACEHOLDER,
        wrist: Entity::PLACEHOLDER,
    }; 2];
    for (i, side) in Side::BOTH.into_iter().enumerate() {
        arms[i] = assemble_arm(commands, config, root, torso, side, &mut accessories);
    }

    let head = spawn_joint(
        commands,
        root,
        torso,
        AttachmentPoint::Head,
        JointPose::from_translation(HEAD_OFFSET),
    );
    for part in [
        Part::Head { skin },
        Part::Mouth {
            expression: config.expression,
        },
        Part::Ears { skin },
        Part::Hair {
            style: config.hair_style,
            color: palette.hair.color(),
        },
    ] {
        attach(commands, part, head, &mut accessories);
    }
    if let Some(accessory) = &config.head_accessory {
        spawn_part(commands, accessory, Some(head), &mut accessories);
    }

    let [left, right] = arms;
    let [left_leg, right_leg] = legs;
    AssembledRig {
        joints: RigJoints {
            root,
            torso,
            head,
            left,
            right,
            left_leg,
            right_leg,
        },
        accessories,
    }
}

fn assemble_arm(
    commands: &mut Commands,
    config: &RigConfig,
    owner: Entity,
    torso: Entity,
    side: Side,
    accessories: &mut Vec<(AccessoryKind, Entity)>,
) -> ArmJoints {
    let arm = config.arm_config(side);
    let sleeve = config.palette.torso;
    let skin = config.palette.skin.color();

    let shoulder = spawn_joint(
        commands,
        owner,
        torso,
        AttachmentPoint::Shoulder(side),
        JointPose::from_translation(SHOULDER_OFFSET * Vec3::new(side.sign(), 1.0, 1.0))
            .with_rotation(Vec3::new(0.0, -side.sign() * SHOULDER_TWIST, 0.0)),
    );
    attach(
        commands,
        Part::UpperArm {
            sleeve,
            rotation: arm.upper_rotation,
        },
        shoulder,
        accessories,
    );

    let elbow = spawn_joint(
        commands,
        owner,
        shoulder,
        AttachmentPoint::Elbow(side),
        JointPose::from_translation(ELBOW_OFFSET).with_rotation(arm.forearm_rotation),
    );
    attach(commands, Part::Forearm { sleeve }, elbow, accessories);
    attach(commands, Part::Hand { skin }, elbow, accessories);

    let wrist = spawn_joint(
        commands,
        owner,
        elbow,
        AttachmentPoint::Wrist(side),
        JointPose::from_translation(arm.wrist_offset).with_rotation(arm.hand_rotation),
    );
    if let Some(accessory) = &arm.accessory {
        spawn_part(commands, accessory, Some(wrist), accessories);
    }

    attach(commands, Part::Elbow { skin }, shoulder, accessories);

    ArmJoints {
        shoulder,
        elbow,
        wrist,
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::world::CommandQueue;

    use super::*;

    fn noop(_t: f32, _pose: &mut JointPose) {}

    fn assembled(config: &RigConfig) -> (World, AssembledRig) {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        let rig = assemble(&mut commands, config);
        queue.apply(&mut world);
        (world, rig)
    }

    fn assert_default_except(config: &JointConfig, overridden: &str) {
        let d = JointConfig::default();
        if overridden != "upper" {
            assert_eq!(config.upper_rotation, d.upper_rotation);
        }
        if overridden != "forearm" {
            assert_eq!(config.forearm_rotation, d.forearm_rotation);
        }
        if overridden != "wrist" {
            assert_eq!(config.wrist_offset, d.wrist_offset);
        }
        if overridden != "hand" {
            assert_eq!(config.hand_rotation, d.hand_rotation);
        }
        if overridden != "accessory" {
            assert!(config.accessory.is_none());
        }
        if overridden != "animation" {
            assert!(config.animation.is_none());
        }
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let d = JointConfig::default();
        assert_eq!(d.upper_rotation, Vec3::new(-0.32, 0.0, 0.0));
        assert_eq!(d.forearm_rotation, Vec3::new(-1.05, 0.0, 0.0));
        assert_eq!(d.wrist_offset, Vec3::new(0.0, -0.22, 0.12));
        assert_eq!(d.hand_rotation, Vec3::ZERO);
        assert!(d.accessory.is_none());
        assert!(d.animation.is_none());
    }

    #[test]
    fn test_merge_is_field_independent() {
        let upper = JointOverrides::default().upper(0.1, 0.2, 0.3).merge();
        assert_eq!(upper.upper_rotation, Vec3::new(0.1, 0.2, 0.3));
        assert_default_except(&upper, "upper");

        let forearm = JointOverrides::default().forearm(-1.4, -0.2, -0.12).merge();
        assert_eq!(forearm.forearm_rotation, Vec3::new(-1.4, -0.2, -0.12));
        assert_default_except(&forearm, "forearm");

        let wrist = JointOverrides::default().wrist(0.0, -0.2, 0.12).merge();
        assert_eq!(wrist.wrist_offset, Vec3::new(0.0, -0.2, 0.12));
        assert_default_except(&wrist, "wrist");

        let hand = JointOverrides::default().hand(0.5, 0.0, 0.0).merge();
        assert_eq!(hand.hand_rotation, Vec3::new(0.5, 0.0, 0.0));
        assert_default_except(&hand, "hand");

        let cane = AccessoryKind::Cane.prototype();
        let accessory = JointOverrides::default().holding(cane.clone()).merge();
        assert_eq!(accessory.accessory, Some(cane));
        assert_default_except(&accessory, "accessory");

        let animation = JointOverrides::default().animated(noop).merge();
        assert!(animation.animation.is_some());
        assert_default_except(&animation, "animation");
    }

    #[test]
    fn test_empty_overrides_merge_to_defaults() {
        assert_default_except(&JointOverrides::default().merge(), "");
    }

    #[test]
    fn test_orientation_yaw_and_fallback() {
        assert_eq!(Orientation::Left.yaw(), FRAC_PI_2);
        assert_eq!(Orientation::Right.yaw(), -FRAC_PI_2);
        assert_eq!(Orientation::Center.yaw(), 0.0);
        assert_eq!(
            "upside-down".parse::<Orientation>(),
            Err(UnknownVariant::Orientation("upside-down".to_string()))
        );
        assert_eq!(
            Orientation::from_name_or_fallback("upside-down"),
            Orientation::Center
        );
    }

    #[test]
    fn test_assembled_joints_are_tagged_with_owner() {
        let (world, rig) = assembled(&RigConfig::new(Vec3::new(-1.35, 0.9, -7.0)));
        let joints = rig.joints.all();
        assert_eq!(joints.len(), RigJoints::JOINT_COUNT);
        for (point, entity) in joints {
            assert_eq!(
                world.get::<Joint>(entity),
                Some(&Joint {
                    owner: rig.joints.root,
                    point
                })
            );
            assert!(world.get::<RestPose>(entity).is_some());
        }
    }

    #[test]
    fn test_hierarchy_chain_is_fixed() {
        let (world, rig) = assembled(&RigConfig::new(Vec3::ZERO));
        let parent = |e: Entity| world.get::<Parent>(e).map(Parent::get);
        let j = rig.joints;
        assert_eq!(parent(j.root), None);
        assert_eq!(parent(j.torso), Some(j.root));
        assert_eq!(parent(j.head), Some(j.torso));
        assert_eq!(parent(j.left_leg), Some(j.torso));
        for side in Side::BOTH {
            let arm = j.arm(side);
            assert_eq!(parent(arm.shoulder), Some(j.torso));
            assert_eq!(parent(arm.elbow), Some(arm.shoulder));
            assert_eq!(parent(arm.wrist), Some(arm.elbow));
        }
    }

    #[test]
    fn test_root_pose_carries_orientation_and_scale() {
        let config = RigConfig::new(Vec3::new(1.0, 0.9, -2.0))
            .facing(Orientation::Right)
            .scale(0.8);
        let (world, rig) = assembled(&config);
        let Some(rest) = world.get::<RestPose>(rig.joints.root) else {
            panic!("root has no rest pose");
        };
        assert_eq!(rest.0.translation, Vec3::new(1.0, 0.9, -2.0));
        assert_eq!(rest.0.rotation, Vec3::new(0.0, -FRAC_PI_2, 0.0));
        assert_eq!(rest.0.scale, Vec3::splat(0.8));
    }

    #[test]
    fn test_shoulders_mirror_across_the_torso() {
        let (world, rig) = assembled(&RigConfig::new(Vec3::ZERO));
        let rest = |e: Entity| world.get::<RestPose>(e).map(|r| r.0);
        let left = rest(rig.joints.left.shoulder).unwrap_or_default();
        let right = rest(rig.joints.right.shoulder).unwrap_or_default();
        assert_eq!(left.translation, Vec3::new(-0.28, 0.62, -0.02));
        assert_eq!(right.translation, Vec3::new(0.28, 0.62, -0.02));
        assert_eq!(left.rotation.y, 0.08);
        assert_eq!(right.rotation.y, -0.08);
    }

    #[test]
    fn test_held_accessory_hangs_from_wrist() {
        let config = RigConfig::new(Vec3::ZERO).arm(
            Side::Right,
            JointOverrides::default().holding(AccessoryKind::Tool.prototype()),
        );
        let (world, rig) = assembled(&config);
        assert_eq!(rig.accessories.len(), 1);
        let (kind, tool) = rig.accessories[0];
        assert_eq!(kind, AccessoryKind::Tool);
        assert_eq!(
            world.get::<Parent>(tool).map(Parent::get),
            Some(rig.joints.right.wrist)
        );
    }

    #[test]
    fn test_bald_rig_still_assembles() {
        let config = RigConfig::new(Vec3::ZERO).hair(HairStyle::from_name_or_fallback("mohawk"));
        let (world, rig) = assembled(&config);
        let head_children = world.get::<Children>(rig.joints.head).map(|c| c.len());
        // Skull group, mouth, ears; no hair.
        assert_eq!(head_children, Some(3));
    }

    #[test]
    fn test_arm_hooks_bind_to_elbows() {
        let config = RigConfig::new(Vec3::ZERO)
            .arm(Side::Right, JointOverrides::default().animated(noop));
        let hooks: Vec<_> = config.arm_hooks().map(|(point, _)| point).collect();
        assert_eq!(hooks, vec![AttachmentPoint::Elbow(Side::Right)]);
    }
}

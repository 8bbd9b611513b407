//! The nine passenger archetypes.
//!
//! Each builder is a pure function of placement returning an
//! [`ArchetypeBlueprint`]; [`spawn_archetype`] turns a blueprint into
//! entities. Accessories are built fresh per blueprint from their
//! prototypes, so spawning the same archetype twice never shares a node.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

use crate::animation::{HookBinding, HookTarget, Passenger, RigHandles};
use crate::error::UnknownVariant;
use crate::palette::{hex, HairColor, SkinTone};
use crate::parts::{
    headband, mat, scarf, spawn_part, AccessoryKind, Expression, HairStyle, PartMaterial,
    PartNode, Shape,
};
use crate::pose::{JointPose, RestPose};
use crate::rig::{
    assemble, AttachmentPoint, Joint, JointOverrides, Orientation, RigConfig, RigPalette, Side,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArchetypeKind {
    BusinessTraveler,
    Student,
    Elder,
    ParentWithInfant,
    Child,
    Laborer,
    Tourist,
    Clinician,
    Artist,
}

impl ArchetypeKind {
    pub const ALL: [ArchetypeKind; 9] = [
        ArchetypeKind::BusinessTraveler,
        ArchetypeKind::Student,
        ArchetypeKind::Elder,
        ArchetypeKind::ParentWithInfant,
        ArchetypeKind::Child,
        ArchetypeKind::Laborer,
        ArchetypeKind::Tourist,
        ArchetypeKind::Clinician,
        ArchetypeKind::Artist,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ArchetypeKind::BusinessTraveler => "business_traveler",
            ArchetypeKind::Student => "student",
            ArchetypeKind::Elder => "elder",
            ArchetypeKind::ParentWithInfant => "parent_with_infant",
            ArchetypeKind::Child => "child",
            ArchetypeKind::Laborer => "laborer",
            ArchetypeKind::Tourist => "tourist",
            ArchetypeKind::Clinician => "clinician",
            ArchetypeKind::Artist => "artist",
        }
    }

    pub fn blueprint(self, placement: Vec3) -> ArchetypeBlueprint {
        match self {
            ArchetypeKind::BusinessTraveler => business_traveler(placement),
            ArchetypeKind::Student => student(placement),
            ArchetypeKind::Elder => elder(placement),
            ArchetypeKind::ParentWithInfant => parent_with_infant(placement),
            ArchetypeKind::Child => child(placement),
            ArchetypeKind::Laborer => laborer(placement),
            ArchetypeKind::Tourist => tourist(placement),
            ArchetypeKind::Clinician => clinician(placement),
            ArchetypeKind::Artist => artist(placement),
        }
    }
}

impl fmt::Display for ArchetypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArchetypeKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArchetypeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownVariant::Archetype(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Blueprints
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub enum Body {
    /// Full seated rig.
    Seated(RigConfig),
    /// Standalone figure: one animated root holding a fixed subtree.
    Free { placement: Vec3, figure: PartNode },
}

/// Everything needed to spawn one passenger.
#[derive(Clone, Debug)]
pub struct ArchetypeBlueprint {
    pub kind: ArchetypeKind,
    pub body: Body,
    /// Accessories worn on the torso (or on the root of a free figure).
    pub worn: Vec<PartNode>,
    /// Hooks beyond the per-arm ones carried by the rig config.
    pub hooks: Vec<HookBinding>,
}

impl ArchetypeBlueprint {
    fn seated(kind: ArchetypeKind, config: RigConfig) -> Self {
        Self {
            kind,
            body: Body::Seated(config),
            worn: Vec::new(),
            hooks: Vec::new(),
        }
    }

    fn wearing(mut self, accessory: PartNode) -> Self {
        self.worn.push(accessory);
        self
    }

    fn hook(mut self, binding: HookBinding) -> Self {
        self.hooks.push(binding);
        self
    }
}

// ---------------------------------------------------------------------------
// Hooks
// ---------------------------------------------------------------------------

fn laptop_tilt(t: f32, pose: &mut JointPose) {
    pose.rotation.x = -0.95 + (t * 0.8).sin() * 0.05;
}

fn book_flutter(t: f32, pose: &mut JointPose) {
    pose.rotation.x = -0.4 + (t * 1.5).sin() * 0.05;
}

fn baby_rock(t: f32, pose: &mut JointPose) {
    pose.translation.y = (t * 1.4).sin() * 0.02;
}

/// Swings the laborer's right forearm, and the tool with it.
pub fn tool_swing(t: f32, pose: &mut JointPose) {
    pose.rotation.z = (t * 2.1).sin() * 0.3 - 0.2;
}

fn camera_pan(t: f32, pose: &mut JointPose) {
    pose.rotation.y = (t * 1.8).sin() * 0.4;
    pose.rotation.x = -0.3 + (t * 1.2).sin() * 0.2;
}

fn head_tilt(t: f32, pose: &mut JointPose) {
    pose.rotation.z = (t * 0.6).sin() * 0.08;
}

fn brush_stroke(t: f32, pose: &mut JointPose) {
    pose.rotation.z = (t * 2.2).sin() * 0.4 + 0.3;
    pose.translation.x = (t * 2.2).sin() * 0.05;
}

/// Rest height plus a hop, with a side-to-side wiggle.
fn child_wiggle(t: f32, pose: &mut JointPose) {
    pose.translation.y += (t * 1.8).sin() * 0.06;
    pose.rotation.y = (t * 1.4).sin() * 0.25;
}

fn toy_spin(t: f32, pose: &mut JointPose) {
    pose.rotation.x = (t * 2.0).sin() * 0.6;
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn business_traveler(placement: Vec3) -> ArchetypeBlueprint {
    let config = RigConfig::new(placement)
        .facing(Orientation::Left)
        .palette(
            RigPalette::new(0x1f2937, 0x213859, 0x4a5568, 0x111827)
                .belt(0x0f172a)
                .skin(SkinTone::Tan)
                .hair(HairColor::Black),
        )
        .hair(HairStyle::Short)
        .arm(
            Side::Left,
            JointOverrides::default()
                .upper(-0.4, 0.18, 0.25)
                .forearm(-1.25, 0.38, 0.2)
                .wrist(0.0, -0.22, 0.09),
        )
        .arm(
            Side::Right,
            JointOverrides::default()
                .upper(-0.38, -0.18, -0.2)
                .forearm(-1.28, -0.35, -0.18)
                .wrist(0.0, -0.22, 0.09),
        );
    ArchetypeBlueprint::seated(ArchetypeKind::BusinessTraveler, config)
        .wearing(AccessoryKind::Tie.prototype())
        .wearing(AccessoryKind::Laptop.prototype())
        .wearing(AccessoryKind::Phone.prototype())
        .hook(HookBinding::accessory(AccessoryKind::Laptop, laptop_tilt))
}

pub fn student(placement: Vec3) -> ArchetypeBlueprint {
    let config = RigConfig::new(placement)
        .facing(Orientation::Right)
        .palette(
            RigPalette::new(0x2563eb, 0x3b82f6, 0x1f2937, 0x0f172a)
                .belt(0x1e293b)
                .skin(SkinTone::Fair)
                .hair(HairColor::Brown),
        )
        .hair(HairStyle::Ponytail)
        .expression(Expression::Smile)
        .arm(
            Side::Left,
            JointOverrides::default()
                .upper(-0.25, -0.28, -0.25)
                .forearm(-1.1, -0.3, -0.12)
                .wrist(0.0, -0.26, 0.06)
                .hand(-0.4, 0.0, 0.0)
                .holding(AccessoryKind::Book.prototype()),
        )
        .arm(
            Side::Right,
            JointOverrides::default()
                .upper(-0.48, 0.28, 0.22)
                .forearm(-0.9, 0.2, 0.1)
                .wrist(0.0, -0.2, 0.04)
                .hand(0.5, 0.0, 0.0),
        );
    ArchetypeBlueprint::seated(ArchetypeKind::Student, config)
        .wearing(AccessoryKind::BackpackStrap.prototype())
        .wearing(AccessoryKind::Notebook.prototype())
        .hook(HookBinding::accessory(AccessoryKind::Book, book_flutter))
}

pub fn elder(placement: Vec3) -> ArchetypeBlueprint {
    let config = RigConfig::new(placement)
        .facing(Orientation::Left)
        .palette(
            RigPalette::new(0x9c6644, 0xc79563, 0x4b5563, 0x2f2f2f)
                .belt(0x6b4423)
                .skin(SkinTone::Warm)
                .hair(HairColor::Grey),
        )
        .hair(HairStyle::Bob)
        .expression(Expression::Smile)
        .head_accessory(AccessoryKind::Glasses.prototype())
        .arm(
            Side::Left,
            JointOverrides::default()
                .upper(-0.2, 0.12, 0.2)
                .forearm(-0.9, 0.2, 0.15)
                .wrist(0.0, -0.24, 0.1),
        )
        .arm(
            Side::Right,
            JointOverrides::default()
                .upper(-0.05, -0.32, -0.18)
                .forearm(-1.25, -0.2, -0.05)
                .wrist(0.0, -0.22, 0.1)
                .hand(0.0, 0.0, 0.0)
                .holding(AccessoryKind::Cane.prototype()),
        );
    ArchetypeBlueprint::seated(ArchetypeKind::Elder, config).wearing(scarf(hex(0xd1d5db)))
}

pub fn parent_with_infant(placement: Vec3) -> ArchetypeBlueprint {
    let config = RigConfig::new(placement)
        .facing(Orientation::Right)
        .palette(
            RigPalette::new(0xec4899, 0xf472b6, 0x4c1d95, 0x1f2937)
                .belt(0x7f1d1d)
                .skin(SkinTone::Warm)
                .hair(HairColor::Black),
        )
        .hair(HairStyle::Bun)
        .expression(Expression::Smile)
        .arm(
            Side::Left,
            JointOverrides::default()
                .upper(-0.12, -0.45, -0.25)
                .forearm(-1.35, -0.3, -0.15)
                .wrist(0.0, -0.18, 0.12)
                .hand(0.3, 0.0, 0.0)
                .holding(AccessoryKind::Baby.prototype()),
        )
        .arm(
            Side::Right,
            JointOverrides::default()
                .upper(-0.35, 0.28, 0.18)
                .forearm(-0.9, 0.22, 0.1)
                .wrist(0.0, -0.22, 0.08),
        );
    ArchetypeBlueprint::seated(ArchetypeKind::ParentWithInfant, config)
        .wearing(AccessoryKind::ParentBag.prototype())
        .hook(HookBinding::accessory(AccessoryKind::Baby, baby_rock))
}

pub fn laborer(placement: Vec3) -> ArchetypeBlueprint {
    let config = RigConfig::new(placement)
        .facing(Orientation::Left)
        .palette(
            RigPalette::new(0xf97316, 0xfde047, 0x1f2937, 0x111827)
                .belt(0x0f172a)
                .skin(SkinTone::Deep)
                .hair(HairColor::Black),
        )
        .hair(HairStyle::Undercut)
        .expression(Expression::Neutral)
        .head_accessory(AccessoryKind::Helmet.prototype())
        .arm(
            Side::Left,
            JointOverrides::default()
                .upper(-0.4, 0.18, 0.25)
                .forearm(-1.15, 0.3, 0.18)
                .wrist(0.0, -0.22, 0.08),
        )
        .arm(
            Side::Right,
            JointOverrides::default()
                .upper(-0.2, -0.38, -0.2)
                .forearm(-1.4, -0.2, -0.12)
                .wrist(0.0, -0.2, 0.12)
                .hand(0.0, 0.0, 0.0)
                .holding(AccessoryKind::Tool.prototype())
                .animated(tool_swing),
        );
    ArchetypeBlueprint::seated(ArchetypeKind::Laborer, config)
        .wearing(AccessoryKind::Toolbox.prototype())
}

pub fn tourist(placement: Vec3) -> ArchetypeBlueprint {
    let config = RigConfig::new(placement)
        .facing(Orientation::Right)
        .palette(
            RigPalette::new(0x14b8a6, 0x22d3ee, 0x1f2937, 0x111827)
                .belt(0x0f172a)
                .skin(SkinTone::Fair)
                .hair(HairColor::Blonde),
        )
        .hair(HairStyle::Curly)
        .expression(Expression::Smile)
        .head_accessory(AccessoryKind::Sunglasses.prototype())
        .arm(
            Side::Left,
            JointOverrides::default()
                .upper(-0.48, -0.2, -0.28)
                .forearm(-1.3, -0.24, -0.16)
                .wrist(0.0, -0.18, 0.16)
                .hand(0.4, 0.0, 0.0),
        )
        .arm(
            Side::Right,
            JointOverrides::default()
                .upper(-0.32, 0.28, 0.2)
                .forearm(-1.05, 0.22, 0.14)
                .wrist(0.0, -0.24, 0.08)
                .holding(AccessoryKind::Camera.prototype()),
        );
    ArchetypeBlueprint::seated(ArchetypeKind::Tourist, config)
        .wearing(AccessoryKind::MapPouch.prototype())
        .hook(HookBinding::accessory(AccessoryKind::Camera, camera_pan))
}

pub fn clinician(placement: Vec3) -> ArchetypeBlueprint {
    let config = RigConfig::new(placement)
        .facing(Orientation::Left)
        .palette(
            RigPalette::new(0xe2e8f0, 0xcbd5f5, 0x1f2937, 0x0f172a)
                .belt(0x1f2937)
                .skin(SkinTone::Fair)
                .hair(HairColor::Grey),
        )
        .hair(HairStyle::Pixie)
        .expression(Expression::Thinking)
        .head_accessory(headband(hex(0x38bdf8)))
        .arm(
            Side::Left,
            JointOverrides::default()
                .upper(-0.22, 0.24, 0.18)
                .forearm(-1.18, 0.16, 0.1)
                .wrist(0.0, -0.18, 0.06)
                .hand(0.3, 0.0, 0.0)
                .holding(AccessoryKind::Clipboard.prototype()),
        )
        .arm(
            Side::Right,
            JointOverrides::default()
                .upper(-0.15, -0.3, -0.12)
                .forearm(-1.05, -0.24, -0.06)
                .wrist(0.0, -0.22, 0.1),
        );
    ArchetypeBlueprint::seated(ArchetypeKind::Clinician, config)
        .wearing(AccessoryKind::Stethoscope.prototype())
        .hook(HookBinding::joint(AttachmentPoint::Head, head_tilt))
}

pub fn artist(placement: Vec3) -> ArchetypeBlueprint {
    let config = RigConfig::new(placement)
        .facing(Orientation::Right)
        .palette(
            RigPalette::new(0x8b5cf6, 0xfacc15, 0x312e81, 0x111827)
                .belt(0x1f2937)
                .skin(SkinTone::Tan)
                .hair(HairColor::Auburn),
        )
        .hair(HairStyle::Curly)
        .expression(Expression::Smile)
        .arm(
            Side::Left,
            JointOverrides::default()
                .upper(-0.28, -0.36, -0.24)
                .forearm(-1.1, -0.3, -0.2)
                .wrist(0.0, -0.18, 0.18)
                .holding(AccessoryKind::Palette.prototype()),
        )
        .arm(
            Side::Right,
            JointOverrides::default()
                .upper(-0.2, 0.4, 0.22)
                .forearm(-1.35, 0.32, 0.18)
                .wrist(0.0, -0.18, 0.14)
                .holding(AccessoryKind::Brush.prototype()),
        );
    ArchetypeBlueprint::seated(ArchetypeKind::Artist, config)
        .wearing(scarf(hex(0xfb7185)))
        .hook(HookBinding::accessory(AccessoryKind::Brush, brush_stroke))
}

/// A small standing child: its own flat figure rather than a seated rig.
pub fn child(placement: Vec3) -> ArchetypeBlueprint {
    ArchetypeBlueprint {
        kind: ArchetypeKind::Child,
        body: Body::Free {
            placement,
            figure: child_figure(),
        },
        worn: vec![AccessoryKind::ToyBlock.prototype()],
        hooks: vec![
            HookBinding::joint(AttachmentPoint::Root, child_wiggle),
            HookBinding::accessory(AccessoryKind::ToyBlock, toy_spin),
        ],
    }
}

fn child_figure() -> PartNode {
    let skin = PartMaterial::new(SkinTone::Fair.color());
    let eye = mat(0x111827).rough(0.2);
    let sleeve = mat(0xfbbf24).rough(0.6);
    let trouser = mat(0x1f2937).rough(0.5);
    let limb = Shape::capsule(0.03, 0.18);

    let mut figure = PartNode::group()
        .child(
            PartNode::mesh(Shape::capsule(0.09, 0.22), mat(0xf87171).rough(0.6))
                .at(0.0, 0.22, 0.0)
                .shadowed(),
        )
        .child(
            PartNode::mesh(Shape::sphere(0.11), skin.rough(0.55))
                .at(0.0, 0.46, 0.0)
                .shadowed(),
        )
        .child(
            PartNode::mesh(
                Shape::cap(0.12, PI / 1.8),
                PartMaterial::new(HairColor::Red.color()).rough(0.6),
            )
            .at(0.0, 0.54, -0.02),
        )
        .child(
            PartNode::mesh(Shape::cuboid(0.05, 0.01, 0.01), mat(0xcbd5f5).rough(0.4))
                .at(0.0, 0.42, 0.1),
        );
    for x in [-1.0, 1.0] {
        figure = figure
            .child(PartNode::mesh(Shape::sphere(0.015), eye).at(0.05 * x, 0.48, 0.09))
            .child(
                PartNode::mesh(limb, sleeve)
                    .at(0.11 * x, 0.27, 0.0)
                    .rotated(PI / 2.2, 0.0, 0.0)
                    .shadowed(),
            )
            .child(
                PartNode::mesh(limb, trouser)
                    .at(0.06 * x, 0.05, 0.05)
                    .rotated(PI / 9.0, 0.0, 0.0)
                    .shadowed(),
            );
    }
    figure
}

// ---------------------------------------------------------------------------
// Spawning
// ---------------------------------------------------------------------------

/// Spawn a blueprint and return the passenger's root entity.
pub fn spawn_archetype(commands: &mut Commands, blueprint: &ArchetypeBlueprint) -> Entity {
    let (rig, accessories, mut hooks) = match &blueprint.body {
        Body::Seated(config) => {
            let mut assembled = assemble(commands, config);
            for worn in &blueprint.worn {
                spawn_part(
                    commands,
                    worn,
                    Some(assembled.joints.torso),
                    &mut assembled.accessories,
                );
            }
            let hooks: Vec<HookBinding> = config
                .arm_hooks()
                .map(|(point, hook)| HookBinding {
                    target: HookTarget::Joint(point),
                    hook,
                })
                .collect();
            (
                RigHandles::Seated(assembled.joints),
                assembled.accessories,
                hooks,
            )
        }
        Body::Free { placement, figure } => {
            let pose = JointPose::from_translation(*placement);
            let root = commands
                .spawn((pose.to_transform(), Visibility::default(), RestPose(pose)))
                .id();
            commands.entity(root).insert(Joint {
                owner: root,
                point: AttachmentPoint::Root,
            });
            let mut accessories = Vec::new();
            spawn_part(commands, figure, Some(root), &mut accessories);
            for worn in &blueprint.worn {
                spawn_part(commands, worn, Some(root), &mut accessories);
            }
            (RigHandles::Free { root }, accessories, Vec::new())
        }
    };
    hooks.extend(blueprint.hooks.iter().copied());

    let passenger = Passenger {
        kind: blueprint.kind,
        rig,
        accessories,
        hooks,
    };
    let root = passenger.root();
    debug!(
        "Spawned {} with {} accessories and {} hooks",
        blueprint.kind,
        passenger.accessories.len(),
        passenger.hooks.len()
    );
    commands
        .entity(root)
        .insert((Name::new(blueprint.kind.name()), passenger));
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in ArchetypeKind::ALL {
            assert_eq!(kind.name().parse::<ArchetypeKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(
            "conductor".parse::<ArchetypeKind>(),
            Err(UnknownVariant::Archetype("conductor".to_string()))
        );
    }

    #[test]
    fn test_only_the_child_is_free() {
        for kind in ArchetypeKind::ALL {
            let blueprint = kind.blueprint(Vec3::new(1.35, 0.9, -2.0));
            assert_eq!(blueprint.kind, kind);
            let free = matches!(blueprint.body, Body::Free { .. });
            assert_eq!(free, kind == ArchetypeKind::Child, "{kind}");
        }
    }

    #[test]
    fn test_placement_flows_into_the_rig() {
        let at = Vec3::new(-1.35, 0.9, -7.0);
        let Body::Seated(config) = laborer(at).body else {
            panic!("laborer should be seated");
        };
        assert_eq!(config.placement, at);
        assert_eq!(config.orientation, Orientation::Left);
        assert_eq!(config.expression, Expression::Neutral);
    }

    #[test]
    fn test_laborer_swings_right_forearm() {
        let Body::Seated(config) = laborer(Vec3::ZERO).body else {
            panic!("laborer should be seated");
        };
        let hooks: Vec<_> = config.arm_hooks().collect();
        assert_eq!(hooks.len(), 1);
        let (point, hook) = hooks[0];
        assert_eq!(point, AttachmentPoint::Elbow(Side::Right));

        let mut pose = JointPose::IDENTITY;
        hook.apply(0.0, &mut pose);
        assert_eq!(pose.rotation.z, -0.2);
        hook.apply(PI / 4.2, &mut pose);
        assert!((pose.rotation.z - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_hooked_accessories_are_present() {
        for kind in ArchetypeKind::ALL {
            let blueprint = kind.blueprint(Vec3::ZERO);
            let mut carried: Vec<PartNode> = blueprint.worn.clone();
            match &blueprint.body {
                Body::Seated(config) => {
                    carried.extend(config.head_accessory.clone());
                    for side in Side::BOTH {
                        carried.extend(config.arm_config(side).accessory.clone());
                    }
                }
                Body::Free { figure, .. } => carried.push(figure.clone()),
            }
            for binding in &blueprint.hooks {
                if let HookTarget::Accessory(target) = binding.target {
                    assert!(
                        carried.iter().any(|n| n.find_accessory(target).is_some()),
                        "{kind} hooks a missing {target:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_seated_rig_has_both_arms_defaulted_or_posed() {
        for kind in ArchetypeKind::ALL {
            if let Body::Seated(config) = kind.blueprint(Vec3::ZERO).body {
                assert_eq!(config.scale, 1.0);
                assert_eq!(config.lean, 0.0);
                assert_ne!(config.hair_style, HairStyle::None, "{kind}");
            }
        }
    }
}

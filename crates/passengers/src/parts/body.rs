use std::f32::consts::PI;

use bevy::prelude::*;

use super::shape::{PartMaterial, PartNode, Shape};

/// Thigh, shin and shoe in hip space. Both sides are identical; the rig
/// mirrors the hip joint instead.
pub(crate) fn leg(trouser: Color, shoe: Color) -> PartNode {
    let cloth = PartMaterial::new(trouser).rough(0.6);
    PartNode::group()
        .child(
            PartNode::mesh(Shape::capsule(0.055, 0.26), cloth)
                .rotated(PI / 2.2, 0.0, 0.0)
                .shadowed(),
        )
        .child(
            PartNode::mesh(Shape::capsule(0.048, 0.22), cloth)
                .at(0.0, -0.3, 0.18)
                .rotated(PI / 12.0, 0.0, 0.0)
                .shadowed(),
        )
        .child(
            PartNode::mesh(
                Shape::cuboid(0.14, 0.06, 0.26),
                PartMaterial::new(shoe).metal(0.3).rough(0.45),
            )
            .at(0.0, -0.45, 0.22)
            .shadowed(),
        )
}

pub(crate) fn torso(torso: Color, accent: Option<Color>, belt: Option<Color>) -> PartNode {
    let mut node = PartNode::group().at(0.0, 0.6, -0.04).child(
        PartNode::mesh(Shape::capsule(0.13, 0.36), PartMaterial::new(torso).rough(0.8))
            .shadowed(),
    );
    if let Some(accent) = accent {
        node = node.child(
            PartNode::mesh(
                Shape::cuboid(0.28, 0.18, 0.18),
                PartMaterial::new(accent).rough(0.55).metal(0.15),
            )
            .at(0.0, -0.1, 0.18)
            .shadowed(),
        );
    }
    if let Some(belt) = belt {
        node = node.child(
            PartNode::mesh(
                Shape::cuboid(0.3, 0.06, 0.2),
                PartMaterial::new(belt).rough(0.4).metal(0.2),
            )
            .at(0.0, -0.26, 0.05)
            .shadowed(),
        );
    }
    node
}

pub(crate) fn upper_arm(sleeve: Color, rotation: Vec3) -> PartNode {
    PartNode::mesh(Shape::capsule(0.048, 0.24), PartMaterial::new(sleeve).rough(0.65))
        .rotated(rotation.x, rotation.y, rotation.z)
        .shadowed()
}

/// Ball at the elbow, in shoulder space.
pub(crate) fn elbow(skin: Color) -> PartNode {
    PartNode::mesh(Shape::sphere(0.048), PartMaterial::new(skin).rough(0.5))
        .at(0.0, -0.34, 0.0)
        .shadowed()
}

pub(crate) fn forearm(sleeve: Color) -> PartNode {
    PartNode::mesh(Shape::capsule(0.045, 0.2), PartMaterial::new(sleeve).rough(0.65)).shadowed()
}

pub(crate) fn hand(skin: Color) -> PartNode {
    PartNode::mesh(Shape::sphere(0.05), PartMaterial::new(skin).rough(0.5))
        .at(0.0, -0.2, 0.0)
        .shadowed()
}

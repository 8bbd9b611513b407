//! Held, worn and head accessories.
//!
//! Every accessory is produced fresh by [`AccessoryKind::prototype`], so two
//! passengers holding "the same" cane each get their own subtree.

use std::f32::consts::PI;

use bevy::prelude::*;

use super::shape::{mat, PartMaterial, PartNode, Shape};
use crate::palette::{hex, SkinTone};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessoryKind {
    // Worn on the torso.
    Tie,
    Phone,
    BackpackStrap,
    Notebook,
    Scarf,
    ParentBag,
    Toolbox,
    MapPouch,
    Stethoscope,
    // Held in a hand.
    Laptop,
    Book,
    Cane,
    Baby,
    Tool,
    Camera,
    Clipboard,
    Palette,
    Brush,
    ToyBlock,
    // Worn on the head.
    Glasses,
    Helmet,
    Sunglasses,
    Headband,
}

pub const DEFAULT_SCARF: u32 = 0xd1d5db;
pub const DEFAULT_HEADBAND: u32 = 0x38bdf8;

impl AccessoryKind {
    /// A fresh subtree for this accessory, tagged with its kind at the root.
    /// Colored accessories use their default color; see [`scarf`] and
    /// [`headband`] for other colors.
    pub fn prototype(self) -> PartNode {
        let node = match self {
            AccessoryKind::Tie => tie(),
            AccessoryKind::Phone => chest_box(
                Vec3::new(0.0, 0.65, 0.22),
                Vec3::new(0.22, 0.08, 0.12),
                mat(0x0ea5e9).glow(0x0ea5e9, 0.12).rough(0.4),
            ),
            AccessoryKind::BackpackStrap => PartNode::group().at(0.0, 0.58, -0.04).child(
                PartNode::mesh(
                    Shape::Torus {
                        radius: 0.22,
                        tube: 0.02,
                        arc: PI,
                    },
                    mat(0x1f2937).rough(0.4),
                )
                .rotated(0.0, 0.0, PI / 2.0),
            ),
            AccessoryKind::Notebook => chest_box(
                Vec3::new(0.08, 0.4, 0.28),
                Vec3::new(0.08, 0.16, 0.04),
                mat(0xfacc15).rough(0.35),
            ),
            AccessoryKind::Scarf => return scarf(hex(DEFAULT_SCARF)),
            AccessoryKind::ParentBag => chest_box(
                Vec3::new(0.0, 0.62, 0.24),
                Vec3::new(0.22, 0.08, 0.18),
                mat(0xfbbf24).rough(0.4),
            ),
            AccessoryKind::Toolbox => chest_box(
                Vec3::new(0.0, 0.5, 0.24),
                Vec3::new(0.24, 0.08, 0.16),
                mat(0x1f2937).rough(0.45).metal(0.25),
            ),
            AccessoryKind::MapPouch => chest_box(
                Vec3::new(0.0, 0.48, 0.24),
                Vec3::new(0.24, 0.1, 0.06),
                mat(0xef4444).rough(0.4),
            ),
            AccessoryKind::Stethoscope => stethoscope(),
            AccessoryKind::Laptop => laptop(),
            AccessoryKind::Book => PartNode::group()
                .rotated(-0.4, 0.0, 0.0)
                .child(
                    PartNode::mesh(Shape::cuboid(0.16, 0.02, 0.24), mat(0xf9fafb).rough(0.35))
                        .shadowed(),
                )
                .child(
                    PartNode::mesh(Shape::cuboid(0.16, 0.02, 0.24), mat(0xef4444).rough(0.4))
                        .at(0.0, 0.01, 0.0)
                        .shadowed(),
                ),
            AccessoryKind::Cane => PartNode::group()
                .rotated(-PI / 2.0, 0.0, 0.0)
                .child(PartNode::mesh(
                    Shape::cylinder(0.02, 0.75),
                    mat(0x5b3314).rough(0.5),
                ))
                .child(
                    PartNode::mesh(Shape::ring(0.05, 0.01), mat(0xcbd5f5).metal(0.6).rough(0.3))
                        .at(0.0, 0.34, 0.02),
                ),
            AccessoryKind::Baby => baby(),
            AccessoryKind::Tool => PartNode::group()
                .rotated(PI / 2.0, 0.0, 0.0)
                .child(PartNode::mesh(
                    Shape::cylinder(0.015, 0.32),
                    mat(0xcbd5f5).metal(0.7).rough(0.3),
                ))
                .child(
                    PartNode::mesh(Shape::cuboid(0.1, 0.08, 0.02), mat(0xf59e0b).rough(0.4))
                        .at(0.0, 0.18, 0.0),
                ),
            AccessoryKind::Camera => camera(),
            AccessoryKind::Clipboard => PartNode::group()
                .rotated(-0.9, 0.0, 0.0)
                .child(PartNode::mesh(
                    Shape::cuboid(0.18, 0.24, 0.01),
                    mat(0x1f2937).rough(0.4),
                ))
                .child(
                    PartNode::mesh(Shape::cuboid(0.16, 0.2, 0.004), mat(0xf8fafc).rough(0.2))
                        .at(0.0, 0.0, 0.008),
                ),
            AccessoryKind::Palette => palette(),
            AccessoryKind::Brush => PartNode::group()
                .at(0.0, -0.05, 0.0)
                .rotated(PI / 2.0, 0.0, 0.0)
                .child(PartNode::mesh(
                    Shape::cylinder(0.01, 0.26),
                    mat(0x8b4513).rough(0.5),
                ))
                .child(
                    PartNode::mesh(
                        Shape::Cone {
                            radius: 0.02,
                            height: 0.08,
                        },
                        mat(0xef4444).rough(0.4),
                    )
                    .at(0.0, 0.15, 0.0),
                ),
            AccessoryKind::ToyBlock => PartNode::group()
                .at(0.0, 0.24, 0.16)
                .child(PartNode::mesh(
                    Shape::cuboid(0.12, 0.08, 0.12),
                    mat(0x3b82f6).rough(0.4),
                ))
                .child(
                    PartNode::mesh(Shape::sphere(0.05), mat(0xfacc15).rough(0.4))
                        .at(0.0, 0.06, 0.0),
                ),
            AccessoryKind::Glasses => glasses(),
            AccessoryKind::Helmet => PartNode::group()
                .at(0.0, 0.14, 0.0)
                .child(PartNode::mesh(
                    Shape::cap(0.18, PI / 2.0),
                    mat(0xfde047).rough(0.35).metal(0.2),
                ))
                .child(
                    PartNode::mesh(Shape::cuboid(0.24, 0.04, 0.12), mat(0x1f2937).rough(0.4))
                        .at(0.0, -0.03, 0.12),
                ),
            AccessoryKind::Sunglasses => sunglasses(),
            AccessoryKind::Headband => return headband(hex(DEFAULT_HEADBAND)),
        };
        node.tagged(self)
    }
}

fn chest_box(at: Vec3, size: Vec3, material: PartMaterial) -> PartNode {
    PartNode::mesh(Shape::cuboid(size.x, size.y, size.z), material).at(at.x, at.y, at.z)
}

fn tie() -> PartNode {
    PartNode::group()
        .at(0.0, 0.56, 0.12)
        .child(
            PartNode::mesh(Shape::cuboid(0.06, 0.22, 0.02), mat(0xc026d3).rough(0.45).metal(0.15))
                .shadowed(),
        )
        .child(
            PartNode::mesh(
                Shape::Cone {
                    radius: 0.035,
                    height: 0.12,
                },
                mat(0xa21caf).rough(0.4).metal(0.1),
            )
            .at(0.0, 0.14, 0.0)
            .shadowed(),
        )
}

fn laptop() -> PartNode {
    PartNode::group()
        .at(0.0, 0.32, 0.2)
        .child(
            PartNode::mesh(Shape::cuboid(0.28, 0.02, 0.18), mat(0x374151).metal(0.6).rough(0.35))
                .shadowed(),
        )
        .child(
            PartNode::mesh(
                Shape::cuboid(0.28, 0.18, 0.02),
                mat(0x0f172a).glow(0x2563eb, 0.25).rough(0.2),
            )
            .at(0.0, 0.14, -0.06)
            .shadowed(),
        )
        .child(
            PartNode::mesh(
                Shape::cuboid(0.22, 0.14, 0.002),
                mat(0x2563eb).glow(0x38bdf8, 0.25).rough(0.25),
            )
            .at(0.0, 0.14, -0.055),
        )
}

fn stethoscope() -> PartNode {
    let tube = mat(0x1f2937).rough(0.4);
    PartNode::group()
        .at(0.0, 0.52, 0.16)
        .child(
            PartNode::mesh(Shape::ring(0.16, 0.01), mat(0x1f2937).metal(0.5).rough(0.3))
                .rotated(PI / 2.0, 0.0, 0.0),
        )
        .child(PartNode::mesh(Shape::cylinder(0.01, 0.18), tube).at(0.08, -0.16, 0.0))
        .child(PartNode::mesh(Shape::cylinder(0.01, 0.18), tube).at(-0.08, -0.16, 0.0))
        .child(
            PartNode::mesh(Shape::sphere(0.02), mat(0x38bdf8).glow(0x38bdf8, 0.25))
                .at(0.0, -0.32, 0.0),
        )
}

fn baby() -> PartNode {
    PartNode::group()
        .at(0.0, -0.05, 0.0)
        .child(
            PartNode::mesh(
                Shape::sphere(0.07),
                PartMaterial::new(SkinTone::Fair.color()).rough(0.55),
            )
            .at(0.0, 0.08, 0.0)
            .shadowed(),
        )
        .child(PartNode::mesh(Shape::capsule(0.08, 0.18), mat(0xfef3c7).rough(0.45)).shadowed())
        .child(
            PartNode::mesh(Shape::cuboid(0.12, 0.08, 0.14), mat(0xea580c).rough(0.5))
                .at(0.0, -0.1, 0.05),
        )
}

fn camera() -> PartNode {
    PartNode::group()
        .at(0.0, -0.03, 0.0)
        .child(
            PartNode::mesh(Shape::cuboid(0.16, 0.12, 0.08), mat(0x0f172a).metal(0.6).rough(0.35))
                .shadowed(),
        )
        .child(
            PartNode::mesh(Shape::cylinder(0.045, 0.08), mat(0x1f2937).metal(0.7).rough(0.3))
                .at(0.0, 0.0, 0.06)
                .rotated(PI / 2.0, 0.0, 0.0),
        )
        .child(
            PartNode::mesh(
                Shape::cuboid(0.12, 0.02, 0.02),
                mat(0x38bdf8).glow(0x38bdf8, 0.25).rough(0.2),
            )
            .at(0.0, 0.04, -0.05),
        )
}

fn palette() -> PartNode {
    let dabs = [(0.08, 0.04, 0xef4444), (-0.06, 0.06, 0x3b82f6), (0.02, -0.06, 0x22c55e)];
    PartNode::group()
        .rotated(PI / 2.0, 0.0, 0.0)
        .child(PartNode::mesh(Shape::ring(0.12, 0.04), mat(0xd9d3ce).rough(0.4)))
        .children(dabs.into_iter().map(|(x, y, rgb)| {
            PartNode::mesh(Shape::sphere(0.018), mat(rgb).rough(0.3)).at(x, y, 0.02)
        }))
}

fn glasses() -> PartNode {
    let frame = mat(0xcbd5f5).rough(0.2).metal(0.4);
    PartNode::group()
        .at(0.0, 0.04, 0.14)
        .child(PartNode::mesh(Shape::ring(0.06, 0.008), frame).at(-0.05, 0.0, 0.0))
        .child(PartNode::mesh(Shape::ring(0.06, 0.008), frame).at(0.05, 0.0, 0.0))
        .child(PartNode::mesh(Shape::cuboid(0.12, 0.008, 0.01), frame))
        .child(PartNode::mesh(Shape::cuboid(0.04, 0.008, 0.12), frame).at(-0.12, 0.015, -0.02))
        .child(PartNode::mesh(Shape::cuboid(0.04, 0.008, 0.12), frame).at(0.12, 0.015, -0.02))
}

fn sunglasses() -> PartNode {
    let shade = mat(0x0f172a).rough(0.2).metal(0.6);
    PartNode::group()
        .at(0.0, 0.04, 0.14)
        .child(PartNode::mesh(Shape::cuboid(0.08, 0.04, 0.01), shade).at(-0.05, 0.0, 0.0))
        .child(PartNode::mesh(Shape::cuboid(0.08, 0.04, 0.01), shade).at(0.05, 0.0, 0.0))
        .child(PartNode::mesh(Shape::cuboid(0.12, 0.01, 0.01), shade))
}

/// Scarf wrapped around the neck, with two hanging ends.
pub fn scarf(color: Color) -> PartNode {
    let cloth = PartMaterial::new(color);
    PartNode::group()
        .at(0.0, 0.68, 0.12)
        .child(PartNode::mesh(Shape::ring(0.1, 0.02), cloth.rough(0.4)))
        .child(
            PartNode::mesh(Shape::cuboid(0.04, 0.16, 0.01), cloth.rough(0.45))
                .at(0.04, -0.12, 0.0),
        )
        .child(
            PartNode::mesh(Shape::cuboid(0.036, 0.18, 0.01), cloth.rough(0.45))
                .at(-0.04, -0.14, 0.0),
        )
        .tagged(AccessoryKind::Scarf)
}

pub fn headband(color: Color) -> PartNode {
    PartNode::mesh(
        Shape::Torus {
            radius: 0.16,
            tube: 0.015,
            arc: PI,
        },
        PartMaterial::new(color).rough(0.4),
    )
    .at(0.0, 0.12, -0.02)
    .tagged(AccessoryKind::Headband)
}

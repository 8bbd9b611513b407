use std::f32::consts::PI;
use std::str::FromStr;

use bevy::prelude::*;

use super::shape::{mat, PartMaterial, PartNode, Shape};
use crate::error::UnknownVariant;

// ---------------------------------------------------------------------------
// Hair styles and expressions
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HairStyle {
    Bun,
    Bob,
    Ponytail,
    Curly,
    Pixie,
    #[default]
    Short,
    Undercut,
    /// No hair node at all. Fallback for unrecognized style names.
    None,
}

impl HairStyle {
    pub const ALL: [HairStyle; 8] = [
        HairStyle::Bun,
        HairStyle::Bob,
        HairStyle::Ponytail,
        HairStyle::Curly,
        HairStyle::Pixie,
        HairStyle::Short,
        HairStyle::Undercut,
        HairStyle::None,
    ];

    /// Parse a style name, falling back to [`HairStyle::None`] (no hair).
    pub fn from_name_or_fallback(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: UnknownVariant| {
            warn!("{err}; rendering without hair");
            HairStyle::None
        })
    }
}

impl FromStr for HairStyle {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bun" => Ok(HairStyle::Bun),
            "bob" => Ok(HairStyle::Bob),
            "ponytail" => Ok(HairStyle::Ponytail),
            "curly" => Ok(HairStyle::Curly),
            "pixie" => Ok(HairStyle::Pixie),
            "short" => Ok(HairStyle::Short),
            "undercut" => Ok(HairStyle::Undercut),
            "none" => Ok(HairStyle::None),
            other => Err(UnknownVariant::HairStyle(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Expression {
    #[default]
    Smile,
    Thinking,
    /// Flat mouth. Fallback for unrecognized expression names.
    Neutral,
}

impl Expression {
    pub fn from_name_or_fallback(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: UnknownVariant| {
            warn!("{err}; using a neutral mouth");
            Expression::Neutral
        })
    }
}

impl FromStr for Expression {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smile" => Ok(Expression::Smile),
            "thinking" => Ok(Expression::Thinking),
            "neutral" => Ok(Expression::Neutral),
            other => Err(UnknownVariant::Expression(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Head parts (all in head-joint space)
// ---------------------------------------------------------------------------

const EYE: u32 = 0x111827;
const EYE_HIGHLIGHT: u32 = 0xf9fafb;

/// Skull, eyes with highlights and nose.
pub(crate) fn head(skin: Color) -> PartNode {
    let eye = mat(EYE).rough(0.2);
    let highlight = mat(EYE_HIGHLIGHT).rough(0.2);
    let mut node = PartNode::group().child(
        PartNode::mesh(Shape::sphere(0.15), PartMaterial::new(skin).rough(0.55)).shadowed(),
    );
    for x in [-0.05, 0.05] {
        node = node
            .child(PartNode::mesh(Shape::sphere(0.018), eye).at(x, 0.02, 0.13))
            .child(PartNode::mesh(Shape::sphere(0.005), highlight).at(x, 0.026, 0.145));
    }
    node.child(
        PartNode::mesh(Shape::sphere(0.012), PartMaterial::new(skin).rough(0.5))
            .at(0.0, -0.015, 0.135),
    )
}

pub(crate) fn mouth(expression: Expression) -> PartNode {
    match expression {
        Expression::Smile => PartNode::mesh(
            Shape::Torus {
                radius: 0.036,
                tube: 0.008,
                arc: PI,
            },
            mat(0xd14c50).rough(0.4),
        )
        .at(0.0, -0.07, 0.132)
        .rotated(PI / 2.0, 0.0, 0.0),
        Expression::Thinking => {
            PartNode::mesh(Shape::cuboid(0.05, 0.01, 0.01), mat(0xcbd5f5).rough(0.3))
                .at(0.0, -0.068, 0.131)
        }
        Expression::Neutral => {
            PartNode::mesh(Shape::cuboid(0.045, 0.01, 0.012), mat(0xcbd5f5).rough(0.3))
                .at(0.0, -0.07, 0.132)
        }
    }
}

pub(crate) fn ears(skin: Color) -> PartNode {
    let shape = Shape::SphereSegment {
        radius: 0.035,
        theta_start: PI / 4.0,
        theta_length: PI / 2.0,
    };
    let skin = PartMaterial::new(skin).rough(0.5);
    PartNode::group()
        .child(PartNode::mesh(shape, skin).at(-0.12, 0.0, 0.0))
        .child(PartNode::mesh(shape, skin).at(0.12, 0.0, 0.0))
}

/// Hair for the given style, or `None` for [`HairStyle::None`].
pub(crate) fn hair(style: HairStyle, color: Color) -> Option<PartNode> {
    let hair = PartMaterial::new(color).rough(0.6);
    let node = match style {
        HairStyle::Bun => PartNode::group()
            .child(
                PartNode::mesh(Shape::cap(0.162, PI / 1.35), hair).at(0.0, 0.045, -0.005),
            )
            .child(
                PartNode::mesh(Shape::sphere(0.08), hair.rough(0.55)).at(0.0, 0.19, -0.02),
            ),
        HairStyle::Bob => PartNode::mesh(
            Shape::SphereSegment {
                radius: 0.18,
                theta_start: PI / 5.0,
                theta_length: PI / 1.2,
            },
            hair,
        )
        .at(0.0, -0.02, 0.02)
        .scaled(1.0, 0.92, 1.05),
        HairStyle::Ponytail => PartNode::group()
            .child(PartNode::mesh(Shape::cap(0.16, PI / 1.6), hair).at(0.0, 0.04, 0.0))
            .child(
                PartNode::mesh(Shape::cylinder(0.05, 0.22), hair)
                    .at(0.0, -0.05, -0.18)
                    .rotated(PI / 2.0, 0.0, 0.0),
            ),
        HairStyle::Curly => {
            let curls = [
                [-0.08, 0.06, 0.06],
                [0.08, 0.05, 0.05],
                [0.0, 0.1, -0.02],
                [-0.1, -0.02, -0.04],
                [0.1, -0.02, -0.05],
            ];
            PartNode::group()
                .at(0.0, 0.05, -0.01)
                .children(curls.into_iter().map(|[x, y, z]| {
                    PartNode::mesh(Shape::sphere(0.08), hair.rough(0.55)).at(x, y, z)
                }))
        }
        HairStyle::Pixie => PartNode::mesh(Shape::cap(0.16, PI / 1.4), hair)
            .at(0.0, 0.04, 0.0)
            .scaled(1.0, 0.6, 1.0),
        HairStyle::Short => PartNode::mesh(Shape::cap(0.16, PI / 1.5), hair).at(0.0, 0.04, 0.0),
        HairStyle::Undercut => PartNode::group()
            .child(
                PartNode::mesh(Shape::cap(0.16, PI / 1.7), hair.rough(0.55)).at(0.0, 0.02, 0.0),
            )
            // Shaved sides stay dark regardless of hair color.
            .child(
                PartNode::mesh(Shape::sphere(0.17), mat(0x2f3544).rough(0.5))
                    .at(0.0, -0.04, 0.0)
                    .scaled(1.0, 0.3, 1.0),
            ),
        HairStyle::None => return None,
    };
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_style_round_trips() {
        for name in [
            "bun", "bob", "ponytail", "curly", "pixie", "short", "undercut", "none",
        ] {
            assert!(name.parse::<HairStyle>().is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn test_unknown_style_falls_back_to_no_hair() {
        assert_eq!(
            "mohawk".parse::<HairStyle>(),
            Err(UnknownVariant::HairStyle("mohawk".to_string()))
        );
        let style = HairStyle::from_name_or_fallback("mohawk");
        assert_eq!(style, HairStyle::None);
        assert!(hair(style, Color::BLACK).is_none());
    }

    #[test]
    fn test_unknown_expression_falls_back_to_neutral() {
        assert_eq!(
            Expression::from_name_or_fallback("grimace"),
            Expression::Neutral
        );
        assert_eq!(
            mouth(Expression::Neutral).mesh.map(|m| m.shape),
            Some(Shape::cuboid(0.045, 0.01, 0.012))
        );
    }

    #[test]
    fn test_every_real_style_has_geometry() {
        for style in HairStyle::ALL {
            let node = hair(style, Color::BLACK);
            match style {
                HairStyle::None => assert!(node.is_none()),
                _ => assert!(node.is_some_and(|n| n.mesh_count() > 0), "{style:?}"),
            }
        }
    }

    #[test]
    fn test_curly_hair_has_five_curls() {
        let node = hair(HairStyle::Curly, Color::BLACK).unwrap_or_else(PartNode::group);
        assert_eq!(node.mesh_count(), 5);
    }

    #[test]
    fn test_head_has_skull_eyes_highlights_and_nose() {
        assert_eq!(head(Color::WHITE).mesh_count(), 6);
    }
}

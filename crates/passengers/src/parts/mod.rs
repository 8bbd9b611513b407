//! Reusable body-part and accessory builders.
//!
//! Builders are pure: they return [`PartNode`] descriptor trees and never
//! touch the world. Spawning and materializing happen in [`spawn`] and
//! [`meshes`].

mod accessories;
mod body;
mod head;
pub mod meshes;
mod shape;
pub mod spawn;

use bevy::prelude::*;

pub use accessories::{headband, scarf, AccessoryKind, DEFAULT_HEADBAND, DEFAULT_SCARF};
pub use head::{Expression, HairStyle};
pub use meshes::{materialize_part_meshes, PartMeshCache};
pub use shape::{mat, PartMaterial, PartMesh, PartNode, Shape};
pub use spawn::{spawn_part, Accessory, PartGeometry};

/// A catalog entry and the parameters it is built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Part {
    Leg {
        trouser: Color,
        shoe: Color,
    },
    Torso {
        torso: Color,
        accent: Option<Color>,
        belt: Option<Color>,
    },
    /// Upper arm segment, rotated about the shoulder.
    UpperArm {
        sleeve: Color,
        rotation: Vec3,
    },
    /// Skin-colored ball covering the elbow.
    Elbow {
        skin: Color,
    },
    Forearm {
        sleeve: Color,
    },
    Hand {
        skin: Color,
    },
    Head {
        skin: Color,
    },
    Hair {
        style: HairStyle,
        color: Color,
    },
    Mouth {
        expression: Expression,
    },
    Ears {
        skin: Color,
    },
}

/// Build the descriptor for one part.
///
/// Only [`HairStyle::None`] yields `None`: a bald head has no hair node.
pub fn build(part: &Part) -> Option<PartNode> {
    let node = match *part {
        Part::Leg { trouser, shoe } => body::leg(trouser, shoe),
        Part::Torso {
            torso,
            accent,
            belt,
        } => body::torso(torso, accent, belt),
        Part::UpperArm { sleeve, rotation } => body::upper_arm(sleeve, rotation),
        Part::Elbow { skin } => body::elbow(skin),
        Part::Forearm { sleeve } => body::forearm(sleeve),
        Part::Hand { skin } => body::hand(skin),
        Part::Head { skin } => head::head(skin),
        Part::Hair { style, color } => return head::hair(style, color),
        Part::Mouth { expression } => head::mouth(expression),
        Part::Ears { skin } => head::ears(skin),
    };
    Some(node)
}

use bevy::prelude::*;

use super::AccessoryKind;
use crate::palette::hex;
use crate::pose::JointPose;

// ---------------------------------------------------------------------------
// Geometry + material descriptors
// ---------------------------------------------------------------------------

/// Primitive geometry, described by value. Turned into a `Mesh` only when a
/// node is materialized for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Capsule along +Y; `length` excludes the two hemispherical caps.
    Capsule { radius: f32, length: f32 },
    Sphere { radius: f32 },
    /// Band of a sphere between two polar angles, measured from +Y.
    SphereSegment {
        radius: f32,
        theta_start: f32,
        theta_length: f32,
    },
    Cuboid { size: Vec3 },
    /// Torus lying in the XY plane; `arc` sweeps counter-clockwise from +X.
    Torus { radius: f32, tube: f32, arc: f32 },
    Cylinder { radius: f32, height: f32 },
    /// Cone along +Y with its tip up.
    Cone { radius: f32, height: f32 },
    /// Rectangle facing +Z.
    Plane { size: Vec2 },
}

impl Shape {
    pub fn cuboid(x: f32, y: f32, z: f32) -> Self {
        Shape::Cuboid {
            size: Vec3::new(x, y, z),
        }
    }

    pub fn capsule(radius: f32, length: f32) -> Self {
        Shape::Capsule { radius, length }
    }

    pub fn sphere(radius: f32) -> Self {
        Shape::Sphere { radius }
    }

    pub fn cap(radius: f32, theta_length: f32) -> Self {
        Shape::SphereSegment {
            radius,
            theta_start: 0.0,
            theta_length,
        }
    }

    pub fn ring(radius: f32, tube: f32) -> Self {
        Shape::Torus {
            radius,
            tube,
            arc: std::f32::consts::TAU,
        }
    }

    pub fn cylinder(radius: f32, height: f32) -> Self {
        Shape::Cylinder { radius, height }
    }
}

/// Physically based surface description, defaults matching a plain matte
/// standard material (roughness 1, not metallic).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartMaterial {
    pub base_color: Color,
    pub roughness: f32,
    pub metallic: f32,
    /// Emissive color and intensity multiplier.
    pub emissive: Option<(Color, f32)>,
    /// Alpha-blended opacity; `None` means opaque.
    pub opacity: Option<f32>,
    /// Render back faces too (for shells seen from the inside).
    pub double_sided: bool,
}

impl PartMaterial {
    pub fn new(base_color: Color) -> Self {
        Self {
            base_color,
            roughness: 1.0,
            metallic: 0.0,
            emissive: None,
            opacity: None,
            double_sided: false,
        }
    }

    pub fn rough(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn metal(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    pub fn glow(mut self, rgb: u32, intensity: f32) -> Self {
        self.emissive = Some((hex(rgb), intensity));
        self
    }

    pub fn translucent(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn inside(mut self) -> Self {
        self.double_sided = true;
        self
    }
}

/// Shorthand for a matte material from a packed `0xRRGGBB` color.
pub fn mat(rgb: u32) -> PartMaterial {
    PartMaterial::new(hex(rgb))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartMesh {
    pub shape: Shape,
    pub material: PartMaterial,
    pub cast_shadow: bool,
}

// ---------------------------------------------------------------------------
// PartNode: a prototype subtree
// ---------------------------------------------------------------------------

/// A descriptor subtree: local pose, optional mesh, ordered children.
///
/// A `PartNode` is a plain value. Spawning one always creates fresh
/// entities, so the same prototype can be instantiated under any number of
/// parents without two of them ever sharing a node.
#[derive(Clone, Debug, PartialEq)]
pub struct PartNode {
    pub pose: JointPose,
    pub mesh: Option<PartMesh>,
    /// Set on accessory roots so hooks can find them after spawning.
    pub accessory: Option<AccessoryKind>,
    pub children: Vec<PartNode>,
}

impl PartNode {
    pub fn group() -> Self {
        Self {
            pose: JointPose::IDENTITY,
            mesh: None,
            accessory: None,
            children: Vec::new(),
        }
    }

    pub fn mesh(shape: Shape, material: PartMaterial) -> Self {
        Self {
            mesh: Some(PartMesh {
                shape,
                material,
                cast_shadow: false,
            }),
            ..Self::group()
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.pose.translation = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.pose.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.pose.scale = Vec3::new(x, y, z);
        self
    }

    /// Mark the mesh as a shadow caster.
    pub fn shadowed(mut self) -> Self {
        if let Some(mesh) = self.mesh.as_mut() {
            mesh.cast_shadow = true;
        }
        self
    }

    pub fn tagged(mut self, kind: AccessoryKind) -> Self {
        self.accessory = Some(kind);
        self
    }

    pub fn child(mut self, node: PartNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = PartNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(PartNode::node_count).sum::<usize>()
    }

    /// Number of nodes carrying a mesh.
    pub fn mesh_count(&self) -> usize {
        usize::from(self.mesh.is_some())
            + self.children.iter().map(PartNode::mesh_count).sum::<usize>()
    }

    /// Depth-first search for an accessory root.
    pub fn find_accessory(&self, kind: AccessoryKind) -> Option<&PartNode> {
        if self.accessory == Some(kind) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_accessory(kind))
    }
}

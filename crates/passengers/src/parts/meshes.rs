use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use super::shape::{PartMaterial, Shape};
use super::spawn::PartGeometry;

const SPHERE_SECTORS: u32 = 24;
const SPHERE_STACKS: u32 = 16;
const TORUS_RADIAL: u32 = 12;
const TORUS_TUBULAR: u32 = 24;

// ---------------------------------------------------------------------------
// Mesh builders
// ---------------------------------------------------------------------------

/// Band of a UV sphere between polar angles `theta_start` and
/// `theta_start + theta_length` (measured from +Y), full turn around Y.
/// Triangles collapsing at a pole are skipped.
pub(crate) fn build_sphere_segment(radius: f32, theta_start: f32, theta_length: f32) -> Mesh {
    let theta_end = (theta_start + theta_length).min(PI);
    let columns = SPHERE_SECTORS + 1;

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for iy in 0..=SPHERE_STACKS {
        let v = iy as f32 / SPHERE_STACKS as f32;
        let theta = theta_start + v * theta_length;
        for ix in 0..=SPHERE_SECTORS {
            let u = ix as f32 / SPHERE_SECTORS as f32;
            let phi = u * TAU;
            let dir = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            positions.push((dir * radius).to_array());
            normals.push(dir.normalize_or_zero().to_array());
            uvs.push([u, 1.0 - v]);
        }
    }

    for iy in 0..SPHERE_STACKS {
        for ix in 0..SPHERE_SECTORS {
            let a = iy * columns + ix + 1;
            let b = iy * columns + ix;
            let c = (iy + 1) * columns + ix;
            let d = (iy + 1) * columns + ix + 1;
            if iy != 0 || theta_start > 0.0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != SPHERE_STACKS - 1 || theta_end < PI {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    triangle_mesh(positions, normals, uvs, indices)
}

/// Torus in the XY plane, swept counter-clockwise from +X through `arc`.
pub(crate) fn build_torus_arc(radius: f32, tube: f32, arc: f32) -> Mesh {
    let columns = TORUS_TUBULAR + 1;

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for j in 0..=TORUS_RADIAL {
        let v = j as f32 / TORUS_RADIAL as f32 * TAU;
        for i in 0..=TORUS_TUBULAR {
            let u = i as f32 / TORUS_TUBULAR as f32 * arc;
            let ring = radius + tube * v.cos();
            let vertex = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            positions.push(vertex.to_array());
            normals.push((vertex - center).normalize_or_zero().to_array());
            uvs.push([
                i as f32 / TORUS_TUBULAR as f32,
                j as f32 / TORUS_RADIAL as f32,
            ]);
        }
    }

    for j in 1..=TORUS_RADIAL {
        for i in 1..=TORUS_TUBULAR {
            let a = columns * j + i - 1;
            let b = columns * (j - 1) + i - 1;
            let c = columns * (j - 1) + i;
            let d = columns * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    triangle_mesh(positions, normals, uvs, indices)
}

fn triangle_mesh(
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Render mesh for a shape descriptor.
pub fn shape_mesh(shape: &Shape) -> Mesh {
    match *shape {
        Shape::Capsule { radius, length } => Mesh::from(Capsule3d::new(radius, length)),
        Shape::Sphere { radius } => Sphere::new(radius)
            .mesh()
            .uv(SPHERE_SECTORS, SPHERE_STACKS),
        Shape::SphereSegment {
            radius,
            theta_start,
            theta_length,
        } => build_sphere_segment(radius, theta_start, theta_length),
        Shape::Cuboid { size } => Mesh::from(Cuboid::from_size(size)),
        Shape::Torus { radius, tube, arc } => build_torus_arc(radius, tube, arc),
        Shape::Cylinder { radius, height } => Mesh::from(Cylinder::new(radius, height)),
        Shape::Cone { radius, height } => Mesh::from(Cone { radius, height }),
        Shape::Plane { size } => Mesh::from(Plane3d::new(Vec3::Z, size / 2.0)),
    }
}

pub fn part_material(material: &PartMaterial) -> StandardMaterial {
    let mut out = StandardMaterial {
        base_color: material.base_color,
        perceptual_roughness: material.roughness,
        metallic: material.metallic,
        ..default()
    };
    if let Some((color, intensity)) = material.emissive {
        out.emissive = color.to_linear() * intensity;
    }
    if let Some(opacity) = material.opacity {
        out.base_color = material.base_color.with_alpha(opacity);
        out.alpha_mode = AlphaMode::Blend;
    }
    if material.double_sided {
        out.double_sided = true;
        out.cull_mode = None;
    }
    out
}

// ---------------------------------------------------------------------------
// Shared asset cache
// ---------------------------------------------------------------------------

/// Bit-exact identity of a shape, used to share one mesh asset between every
/// node with the same geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct ShapeKey(u8, [u32; 3]);

impl From<&Shape> for ShapeKey {
    fn from(shape: &Shape) -> Self {
        let b = f32::to_bits;
        match *shape {
            Shape::Capsule { radius, length } => ShapeKey(0, [b(radius), b(length), 0]),
            Shape::Sphere { radius } => ShapeKey(1, [b(radius), 0, 0]),
            Shape::SphereSegment {
                radius,
                theta_start,
                theta_length,
            } => ShapeKey(2, [b(radius), b(theta_start), b(theta_length)]),
            Shape::Cuboid { size } => ShapeKey(3, [b(size.x), b(size.y), b(size.z)]),
            Shape::Torus { radius, tube, arc } => ShapeKey(4, [b(radius), b(tube), b(arc)]),
            Shape::Cylinder { radius, height } => ShapeKey(5, [b(radius), b(height), 0]),
            Shape::Cone { radius, height } => ShapeKey(6, [b(radius), b(height), 0]),
            Shape::Plane { size } => ShapeKey(7, [b(size.x), b(size.y), 0]),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct MaterialKey([u32; 11]);

impl From<&PartMaterial> for MaterialKey {
    fn from(material: &PartMaterial) -> Self {
        let base = material.base_color.to_srgba();
        let (emissive, intensity) = material
            .emissive
            .map(|(c, i)| (c.to_srgba(), i))
            .unwrap_or((Srgba::NONE, 0.0));
        MaterialKey([
            base.red.to_bits(),
            base.green.to_bits(),
            base.blue.to_bits(),
            material.roughness.to_bits(),
            material.metallic.to_bits(),
            emissive.red.to_bits(),
            emissive.green.to_bits(),
            emissive.blue.to_bits(),
            intensity.to_bits(),
            material.opacity.map_or(u32::MAX, f32::to_bits),
            u32::from(material.double_sided),
        ])
    }
}

/// Mesh and material handles shared across all spawned parts. Entities are
/// never shared; only the GPU assets behind them are.
#[derive(Resource, Default)]
pub struct PartMeshCache {
    meshes: HashMap<ShapeKey, Handle<Mesh>>,
    materials: HashMap<MaterialKey, Handle<StandardMaterial>>,
}

impl PartMeshCache {
    pub fn mesh(&mut self, shape: &Shape, assets: &mut Assets<Mesh>) -> Handle<Mesh> {
        self.meshes
            .entry(ShapeKey::from(shape))
            .or_insert_with(|| assets.add(shape_mesh(shape)))
            .clone()
    }

    pub fn material(
        &mut self,
        material: &PartMaterial,
        assets: &mut Assets<StandardMaterial>,
    ) -> Handle<StandardMaterial> {
        self.materials
            .entry(MaterialKey::from(material))
            .or_insert_with(|| assets.add(part_material(material)))
            .clone()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Give every freshly spawned [`PartGeometry`] its mesh and material.
pub fn materialize_part_meshes(
    mut commands: Commands,
    mut cache: ResMut<PartMeshCache>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pending: Query<(Entity, &PartGeometry), Without<Mesh3d>>,
) {
    for (entity, geometry) in &pending {
        let part = geometry.0;
        let mut entity = commands.entity(entity);
        entity.insert((
            Mesh3d(cache.mesh(&part.shape, &mut meshes)),
            MeshMaterial3d(cache.material(&part.material, &mut materials)),
        ));
        if !part.cast_shadow {
            entity.insert(NotShadowCaster);
        }
    }
}

use bevy::prelude::*;

use super::{AccessoryKind, PartMesh, PartNode};
use crate::pose::RestPose;

/// Geometry waiting to be turned into render assets by
/// [`materialize_part_meshes`](super::materialize_part_meshes).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PartGeometry(pub PartMesh);

/// Root of a spawned accessory subtree.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Accessory(pub AccessoryKind);

/// Instantiate `node` as a fresh entity subtree, optionally under `parent`.
///
/// Accessory roots are recorded in `accessories` (in spawn order) and get a
/// [`RestPose`] so animation hooks can target them.
pub fn spawn_part(
    commands: &mut Commands,
    node: &PartNode,
    parent: Option<Entity>,
    accessories: &mut Vec<(AccessoryKind, Entity)>,
) -> Entity {
    let mut entity = commands.spawn((node.pose.to_transform(), Visibility::default()));
    if let Some(mesh) = node.mesh {
        entity.insert(PartGeometry(mesh));
    }
    if let Some(kind) = node.accessory {
        entity.insert((
            Accessory(kind),
            RestPose(node.pose),
            Name::new(format!("{kind:?}")),
        ));
    }
    let id = entity.id();

    if let Some(kind) = node.accessory {
        accessories.push((kind, id));
    }
    if let Some(parent) = parent {
        commands.entity(parent).add_child(id);
    }
    for child in &node.children {
        spawn_part(commands, child, Some(id), accessories);
    }
    id
}

#[cfg(test)]
mod tests {
    use bevy::ecs::world::CommandQueue;

    use super::*;
    use crate::parts::{mat, Shape};

    #[test]
    fn test_spawn_mirrors_descriptor_tree() {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);

        let node = PartNode::group()
            .at(1.0, 2.0, 3.0)
            .child(PartNode::mesh(Shape::sphere(0.1), mat(0xffffff)))
            .child(AccessoryKind::Book.prototype());
        let mut accessories = Vec::new();
        let root = spawn_part(&mut commands, &node, None, &mut accessories);
        queue.apply(&mut world);

        let children = world.get::<Children>(root).map(|c| c.len());
        assert_eq!(children, Some(2));
        assert_eq!(
            world.get::<Transform>(root).map(|t| t.translation),
            Some(Vec3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(accessories.len(), 1);
        let (kind, book) = accessories[0];
        assert_eq!(kind, AccessoryKind::Book);
        assert_eq!(world.get::<Accessory>(book), Some(&Accessory(AccessoryKind::Book)));
        assert_eq!(world.get::<Parent>(book).map(Parent::get), Some(root));

        let geometry = world.query::<&PartGeometry>().iter(&world).count();
        assert_eq!(geometry, node.mesh_count());
    }

    #[test]
    fn test_same_prototype_spawns_disjoint_subtrees() {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);

        let cane = AccessoryKind::Cane.prototype();
        let mut accessories = Vec::new();
        let a = spawn_part(&mut commands, &cane, None, &mut accessories);
        let b = spawn_part(&mut commands, &cane, None, &mut accessories);
        queue.apply(&mut world);

        assert_ne!(a, b);
        let kids_a = world.get::<Children>(a).map(|c| c.to_vec()).unwrap_or_default();
        let kids_b = world.get::<Children>(b).map(|c| c.to_vec()).unwrap_or_default();
        assert_eq!(kids_a.len(), 2);
        assert!(kids_a.iter().all(|e| !kids_b.contains(e)));
    }
}

use bevy::prelude::*;

use crate::archetype::{spawn_archetype, ArchetypeKind};
use crate::config::DEFAULT_LAYOUT;

/// Startup phases, chained: the environment exists before passengers are
/// parented under it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComposeSet {
    Environment,
    Passengers,
}

/// Marks the environment subtree root passengers are parented under.
#[derive(Component, Default)]
pub struct EnvironmentAnchor;

/// Group holding every passenger instance.
#[derive(Component, Default)]
pub struct PassengerCabin;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatPlacement {
    pub kind: ArchetypeKind,
    pub position: Vec3,
}

/// Static placement table. Replace before `Startup` to reseat passengers.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PassengerLayout {
    pub seats: Vec<SeatPlacement>,
}

impl Default for PassengerLayout {
    fn default() -> Self {
        Self {
            seats: DEFAULT_LAYOUT
                .iter()
                .map(|&(kind, position)| SeatPlacement {
                    kind,
                    position: Vec3::from_array(position),
                })
                .collect(),
        }
    }
}

/// The composed scene: the cabin group and each passenger root, in layout
/// order.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PassengerScene {
    pub cabin: Entity,
    pub instances: Vec<(ArchetypeKind, Entity)>,
}

pub fn spawn_passengers(
    commands: &mut Commands,
    layout: &PassengerLayout,
    anchor: Option<Entity>,
) -> PassengerScene {
    let cabin = commands
        .spawn((
            PassengerCabin,
            Transform::default(),
            Visibility::default(),
            Name::new("Passengers"),
        ))
        .id();
    if let Some(anchor) = anchor {
        commands.entity(anchor).add_child(cabin);
    }

    let instances = layout
        .seats
        .iter()
        .map(|seat| {
            let root = spawn_archetype(commands, &seat.kind.blueprint(seat.position));
            commands.entity(cabin).add_child(root);
            (seat.kind, root)
        })
        .collect();

    PassengerScene { cabin, instances }
}

pub fn compose_passengers(
    mut commands: Commands,
    layout: Res<PassengerLayout>,
    anchors: Query<Entity, With<EnvironmentAnchor>>,
) {
    let mut found = anchors.iter();
    let anchor = found.next();
    if found.next().is_some() {
        warn!("More than one environment anchor; passengers join the first");
    }

    let scene = spawn_passengers(&mut commands, &layout, anchor);
    info!(
        "Composed {} passengers ({})",
        scene.instances.len(),
        if anchor.is_some() {
            "inside environment"
        } else {
            "standalone cabin"
        }
    );
    commands.insert_resource(scene);
}

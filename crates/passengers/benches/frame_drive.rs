//! Criterion benchmarks for the passenger animation driver.
//!
//! Benchmarks:
//!   - one animation frame over the default nine-passenger scene
//!   - pure frame-pose computation for a single seated passenger
//!   - blueprint construction for every archetype
//!
//! Run with: cargo bench -p passengers --bench frame_drive

use std::collections::HashMap;
use std::time::Duration;

use bevy::ecs::world::CommandQueue;
use bevy::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use passengers::animation::{animate_passengers, frame_poses};
use passengers::{spawn_passengers, ArchetypeKind, JointPose, Passenger, PassengerLayout, RestPose};

fn composed_world() -> World {
    let mut world = World::new();
    let mut queue = CommandQueue::default();
    let mut commands = Commands::new(&mut queue, &world);
    spawn_passengers(&mut commands, &PassengerLayout::default(), None);
    queue.apply(&mut world);
    world.insert_resource(Time::<()>::default());
    world
}

// ---------------------------------------------------------------------------
// Benchmark: full frame
// ---------------------------------------------------------------------------

fn bench_scene_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("passenger_frame");

    let mut world = composed_world();
    let mut schedule = Schedule::default();
    schedule.add_systems(animate_passengers);
    let mut elapsed = Duration::ZERO;

    group.bench_function("default_scene", |b| {
        b.iter(|| {
            elapsed += Duration::from_millis(16);
            world.resource_mut::<Time>().advance_to(elapsed);
            schedule.run(&mut world);
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: pure pose computation
// ---------------------------------------------------------------------------

fn bench_frame_poses(c: &mut Criterion) {
    let mut group = c.benchmark_group("passenger_frame_poses");

    let mut world = composed_world();
    let passengers: Vec<Passenger> = world.query::<&Passenger>().iter(&world).cloned().collect();
    let rest: HashMap<Entity, JointPose> = world
        .query::<(Entity, &RestPose)>()
        .iter(&world)
        .map(|(e, r)| (e, r.0))
        .collect();

    for passenger in passengers.iter().take(2) {
        group.bench_function(passenger.kind.name(), |b| {
            b.iter(|| {
                black_box(frame_poses(black_box(12.5), passenger, |e| {
                    rest.get(&e).copied()
                }))
            });
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: blueprints
// ---------------------------------------------------------------------------

fn bench_blueprints(c: &mut Criterion) {
    c.bench_function("archetype_blueprints", |b| {
        b.iter(|| {
            for kind in ArchetypeKind::ALL {
                black_box(kind.blueprint(black_box(Vec3::new(1.35, 0.9, -2.0))));
            }
        });
    });
}

criterion_group!(benches, bench_scene_frame, bench_frame_poses, bench_blueprints);
criterion_main!(benches);

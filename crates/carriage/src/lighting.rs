use bevy::pbr::{CascadeShadowConfigBuilder, DistanceFog, FogFalloff};
use bevy::prelude::*;
use passengers::palette::hex;

/// Sky blue behind the carriage; the fog fades into the same color.
pub const SKY_COLOR: u32 = 0x87ceeb;
pub const FOG_START: f32 = 10.0;
pub const FOG_END: f32 = 50.0;

/// Brightness units per unit of authored light intensity.
pub const AMBIENT_BRIGHTNESS: f32 = 500.0;
pub const SUN_ILLUMINANCE: f32 = 10_000.0;
pub const POINT_LIGHT_LUMENS: f32 = 4_000.0;

const AMBIENT_INTENSITY: f32 = 0.6;
const SUN_POSITION: Vec3 = Vec3::new(10.0, 10.0, 5.0);
/// Half extent of the area the sun's shadow map covers.
const SUN_SHADOW_EXTENT: f32 = 10.0;

const FILL_COLOR: u32 = 0xfff8e1;
const FILL_INTENSITY: f32 = 0.5;
const FILL_POSITIONS: [Vec3; 2] = [Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 2.0, -8.0)];
const FILL_RANGE: f32 = 20.0;

/// Warm fill light over the cabin, independent of the ceiling panels.
#[derive(Component)]
pub struct FillLight;

#[derive(Component)]
pub struct Sun;

/// Linear fog from [`FOG_START`] to [`FOG_END`], tinted like the sky.
pub fn sky_fog() -> DistanceFog {
    DistanceFog {
        color: hex(SKY_COLOR),
        falloff: FogFalloff::Linear {
            start: FOG_START,
            end: FOG_END,
        },
        ..default()
    }
}

pub fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(ClearColor(hex(SKY_COLOR)));

    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS,
    });

    // Sun shining through the windows from above and to the side
    commands.spawn((
        Sun,
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        CascadeShadowConfigBuilder {
            num_cascades: 1,
            maximum_distance: SUN_SHADOW_EXTENT * 2.0,
            ..default()
        }
        .build(),
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
    ));

    for position in FILL_POSITIONS {
        commands.spawn((
            FillLight,
            PointLight {
                color: hex(FILL_COLOR),
                intensity: FILL_INTENSITY * POINT_LIGHT_LUMENS,
                range: FILL_RANGE,
                ..default()
            },
            Transform::from_translation(position),
            Name::new("Fill light"),
        ));
    }
}

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};
use bevy_egui::EguiPlugin;

mod overlay;
mod screenshot;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Train Journey".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // Passengers animate every frame, so keep drawing while focused.
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::Continuous,
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins(EguiPlugin)
    .add_plugins((
        carriage::CarriagePlugin,
        passengers::PassengersPlugin,
        overlay::OverlayPlugin,
    ));

    // Screenshot mode: capture one frame once the scene has settled, then exit
    if let Ok(path) = std::env::var(screenshot::ENV_VAR) {
        app.insert_resource(screenshot::ScreenshotRequest::new(path))
            .add_systems(Update, screenshot::drive_screenshot);
    }

    app.run();
}

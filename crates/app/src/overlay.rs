//! Title card and mouse-controls help in the top-left corner.
//!
//! Toggled with F1.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

const TITLE: &str = "TRAIN JOURNEY";
const HEADING: &str = "Interactive Controls";
const CONTROL_HINTS: [&str; 4] = [
    "Left Click + Drag: Rotate view",
    "Right Click + Drag: Pan around",
    "Scroll: Zoom in/out",
    "Explore the train and observe the passengers!",
];

#[derive(Resource)]
pub struct OverlayOpen(pub bool);

impl Default for OverlayOpen {
    fn default() -> Self {
        Self(true)
    }
}

fn toggle_overlay(keys: Option<Res<ButtonInput<KeyCode>>>, mut open: ResMut<OverlayOpen>) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::F1) {
        open.0 = !open.0;
    }
}

fn controls_overlay_ui(mut contexts: EguiContexts, open: Res<OverlayOpen>) {
    if !open.0 {
        return;
    }

    egui::Area::new(egui::Id::new("controls_overlay"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style())
                .fill(egui::Color32::from_black_alpha(170))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(TITLE)
                            .size(22.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(HEADING)
                            .strong()
                            .color(egui::Color32::from_rgb(130, 200, 255)),
                    );
                    for hint in CONTROL_HINTS {
                        ui.colored_label(egui::Color32::from_gray(220), hint);
                    }
                    ui.add_space(4.0);
                    ui.colored_label(egui::Color32::from_gray(140), "F1: hide this panel");
                });
        });
}

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverlayOpen>()
            .add_systems(Update, (toggle_overlay, controls_overlay_ui).chain());
    }
}

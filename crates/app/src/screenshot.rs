use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

/// Set to an output path to render one screenshot and exit.
pub const ENV_VAR: &str = "TRAIN_JOURNEY_SCREENSHOT";

/// Frames to wait for assets and shadows before capturing.
const SETTLE_FRAMES: u32 = 120;
/// Frames to give the capture to reach disk before exiting.
const SAVE_FRAMES: u32 = 20;

#[derive(Resource, Debug)]
pub struct ScreenshotRequest {
    path: String,
    frame: u32,
}

impl ScreenshotRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            frame: 0,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Wait,
    Capture,
    Exit,
}

fn step_for(frame: u32) -> Step {
    if frame == SETTLE_FRAMES {
        Step::Capture
    } else if frame > SETTLE_FRAMES + SAVE_FRAMES {
        Step::Exit
    } else {
        Step::Wait
    }
}

pub fn drive_screenshot(
    mut commands: Commands,
    mut request: ResMut<ScreenshotRequest>,
    mut exit: EventWriter<AppExit>,
) {
    request.frame += 1;
    match step_for(request.frame) {
        Step::Wait => {}
        Step::Capture => {
            info!("Saving screenshot to {}", request.path);
            commands
                .spawn(Screenshot::primary_window())
                .observe(save_to_disk(request.path.clone()));
        }
        Step::Exit => {
            exit.send(AppExit::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_once_then_exits() {
        let steps: Vec<Step> = (1..=SETTLE_FRAMES + SAVE_FRAMES + 1).map(step_for).collect();
        assert_eq!(steps.iter().filter(|s| **s == Step::Capture).count(), 1);
        assert_eq!(steps[SETTLE_FRAMES as usize - 1], Step::Capture);
        assert_eq!(steps.last(), Some(&Step::Exit));
        assert!(steps[..steps.len() - 1].iter().all(|s| *s != Step::Exit));
    }
}

//! Keeps mouse drags and scrolls over the controls overlay from also moving
//! the camera.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer, i.e. the cursor is over an
/// egui window or egui is handling a drag/click.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy_egui::EguiUserTextures;

    use super::*;

    #[derive(Resource, Default)]
    struct Wanted(Option<bool>);

    fn record(mut contexts: EguiContexts, mut wanted: ResMut<Wanted>) {
        wanted.0 = Some(egui_wants_pointer(&mut contexts));
    }

    #[test]
    fn test_no_egui_window_leaves_pointer_free() {
        let mut world = World::new();
        world.init_resource::<EguiUserTextures>();
        world.init_resource::<Wanted>();

        let mut schedule = Schedule::default();
        schedule.add_systems(record);
        schedule.run(&mut world);

        assert_eq!(world.resource::<Wanted>().0, Some(false));
    }
}

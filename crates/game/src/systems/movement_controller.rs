use crate::prelude::*;

/// Step every input-driven entity by this frame's sample
pub fn move_targets(
    sample: Res<InputSample>,
    mut query: Query<(&mut Transform2D, &MovementController)>,
) {
    for (mut transform, controller) in query.iter_mut() {
        transform.position = controller.step(transform.position, &sample);
    }
}

/// Pull clamped entities back inside the current viewport
pub fn clamp_to_viewport(
    viewport: Res<Viewport>,
    mut query: Query<&mut Transform2D, With<ViewportClamped>>,
) {
    let bounds = Bounds::from(*viewport);
    for mut transform in query.iter_mut() {
        let clamped = bounds.clamp(transform.position);
        if clamped != transform.position {
            transform.position = clamped;
        }
    }
}

use crate::prelude::*;

/// Default maximum turn per frame, in radians
pub const DEFAULT_TURN_RATE: f32 = 0.025;

/// Rotates the entity's [`Transform2D`] to face another entity, at most
/// `turn_rate` radians per frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct AngleTracker {
    pub target: Entity,
    pub turn_rate: f32,
}

impl AngleTracker {
    pub fn new(target: Entity, turn_rate: f32) -> Self {
        Self { target, turn_rate }
    }

    /// Next facing angle of a tracker at `position` looking at `target`
    pub fn next_angle(&self, position: Point2<f32>, target: Point2<f32>, current_angle: f32) -> f32 {
        turn_to_face(position, target, current_angle, self.turn_rate)
    }
}

/// Present on a tracker whose target entity no longer has a transform
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct TargetLost;

/// Turn `current_angle` toward `face_this` by at most `turn_rate`.
///
/// Takes the shortest way around. Coincident points give a desired angle of 0.
pub fn turn_to_face(
    position: Point2<f32>,
    face_this: Point2<f32>,
    current_angle: f32,
    turn_rate: f32,
) -> f32 {
    let offset = face_this - position;
    let desired_angle = offset.y.atan2(offset.x);

    let difference = wrap_angle(desired_angle - current_angle).clamp(-turn_rate, turn_rate);

    wrap_angle(current_angle + difference)
}

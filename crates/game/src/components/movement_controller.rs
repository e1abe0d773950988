use crate::prelude::*;

/// Default maximum movement per frame, in pixels
pub const DEFAULT_MOVE_SPEED: f32 = 10.0;

/// Moves the entity's [`Transform2D`] from the frame's [`InputSample`]
#[derive(Component, Debug, Clone, Copy)]
pub struct MovementController {
    /// Pixels per frame
    pub move_speed: f32,
}

impl Default for MovementController {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
        }
    }
}

/// Resolved movement for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Unit vector, or zero when standing still
    pub direction: Vector2<f32>,
    /// Deceleration factor in [0, 1]
    pub smooth_stop: f32,
}

impl MovementController {
    pub fn new(move_speed: f32) -> Self {
        Self { move_speed }
    }

    /// Pick the input that drives this frame.
    ///
    /// Sources do not blend. Touch replaces the directional vector, and a held
    /// pointer replaces touch.
    pub fn resolve(&self, current: Point2<f32>, input: &InputSample) -> Motion {
        let mut motion = Motion {
            direction: input.movement,
            smooth_stop: 1.0,
        };

        // Unlike the pointer, a touch on the entity itself still wins and
        // stops it
        if let Some(touch) = input.touch {
            motion = self.home_toward(current, touch);
        }

        if let Some(pointer) = input.pointer {
            if pointer != current {
                motion = self.home_toward(current, pointer);
            }
        }

        if motion.direction != Vector2::zeros() {
            motion.direction = motion.direction.normalize();
        }

        motion
    }

    /// Position after one frame, before any clamping
    pub fn step(&self, current: Point2<f32>, input: &InputSample) -> Point2<f32> {
        let motion = self.resolve(current, input);
        current + motion.direction * self.move_speed * motion.smooth_stop
    }

    /// Slow down inside one frame's reach of `destination` so the entity
    /// lands on it instead of overshooting
    fn home_toward(&self, current: Point2<f32>, destination: Point2<f32>) -> Motion {
        let direction = destination - current;

        let smooth_stop = if self.move_speed > 0.0 {
            let distance = direction.norm().min(self.move_speed);
            1.0 - (self.move_speed - distance) / self.move_speed
        } else {
            0.0
        };

        Motion {
            direction,
            smooth_stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn sample(movement: Vector2<f32>) -> InputSample {
        InputSample {
            movement,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_input_stands_still() {
        let controller = MovementController::default();
        let current = Point2::new(100.0, 100.0);
        assert_eq!(controller.step(current, &InputSample::default()), current);
    }

    #[test]
    fn test_directional_moves_exactly_move_speed() {
        let controller = MovementController::default();
        let current = Point2::new(50.0, 50.0);

        for movement in [
            Vector2::new(1.0, 0.0),
            Vector2::new(-1.0, 1.0),
            Vector2::new(0.3, -0.2),
            // Stick pushed right while the right key is held
            Vector2::new(2.0, 0.0),
            Vector2::new(1.7, -1.3),
        ] {
            let next = controller.step(current, &sample(movement));
            assert!(((next - current).norm() - DEFAULT_MOVE_SPEED).abs() < EPSILON);
        }
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let controller = MovementController::default();
        let current = Point2::new(50.0, 50.0);
        let next = controller.step(current, &sample(Vector2::new(0.0, 0.0)));
        assert_eq!(next, current);
    }

    #[test]
    fn test_touch_inside_reach_lands_on_it() {
        let controller = MovementController::new(10.0);
        let input = InputSample {
            touch: Some(Point2::new(105.0, 100.0)),
            ..Default::default()
        };

        let motion = controller.resolve(Point2::new(100.0, 100.0), &input);
        assert_eq!(motion.direction, Vector2::new(1.0, 0.0));
        assert!((motion.smooth_stop - 0.5).abs() < EPSILON);

        let next = controller.step(Point2::new(100.0, 100.0), &input);
        assert!((next - Point2::new(105.0, 100.0)).norm() < EPSILON);
    }

    #[test]
    fn test_touch_out_of_reach_full_speed() {
        let controller = MovementController::new(10.0);
        let current = Point2::new(0.0, 0.0);

        for touch in [Point2::new(10.0, 0.0), Point2::new(30.0, 40.0)] {
            let input = InputSample {
                touch: Some(touch),
                ..Default::default()
            };
            let motion = controller.resolve(current, &input);
            assert!((motion.smooth_stop - 1.0).abs() < EPSILON);
            assert!(((controller.step(current, &input) - current).norm() - 10.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_smooth_stop_is_distance_over_speed() {
        let controller = MovementController::new(10.0);
        let current = Point2::new(20.0, 20.0);

        for distance in [0.5f32, 2.0, 7.5, 9.99] {
            let touch = current + Vector2::new(0.6, 0.8) * distance;
            let input = InputSample {
                touch: Some(touch),
                ..Default::default()
            };
            let motion = controller.resolve(current, &input);
            assert!((motion.smooth_stop - distance / 10.0).abs() < EPSILON);

            let moved = (controller.step(current, &input) - current).norm();
            assert!((moved - distance).abs() < EPSILON);
        }
    }

    #[test]
    fn test_touch_on_entity_stops_it() {
        let controller = MovementController::new(10.0);
        let current = Point2::new(42.0, 24.0);
        let input = InputSample {
            movement: Vector2::new(1.0, 1.0),
            touch: Some(current),
            ..Default::default()
        };

        let motion = controller.resolve(current, &input);
        assert_eq!(motion.smooth_stop, 0.0);
        assert_eq!(motion.direction, Vector2::zeros());
        assert_eq!(controller.step(current, &input), current);
    }

    #[test]
    fn test_touch_replaces_directional() {
        let controller = MovementController::new(10.0);
        let current = Point2::new(100.0, 100.0);
        let input = InputSample {
            movement: Vector2::new(0.0, 1.0),
            touch: Some(Point2::new(100.0, 50.0)),
            ..Default::default()
        };

        let next = controller.step(current, &input);
        assert!((next - Point2::new(100.0, 90.0)).norm() < EPSILON);
    }

    #[test]
    fn test_pointer_overrides_touch() {
        let controller = MovementController::new(10.0);
        let current = Point2::new(100.0, 100.0);
        let input = InputSample {
            movement: Vector2::new(1.0, 0.0),
            pointer: Some(Point2::new(100.0, 104.0)),
            touch: Some(Point2::new(0.0, 100.0)),
            exit: false,
        };

        let next = controller.step(current, &input);
        assert!((next - Point2::new(100.0, 104.0)).norm() < EPSILON);
    }

    #[test]
    fn test_pointer_on_entity_is_ignored() {
        let controller = MovementController::new(10.0);
        let current = Point2::new(100.0, 100.0);
        let input = InputSample {
            movement: Vector2::new(-1.0, 0.0),
            pointer: Some(current),
            ..Default::default()
        };

        let next = controller.step(current, &input);
        assert!((next - Point2::new(90.0, 100.0)).norm() < EPSILON);
    }

    #[test]
    fn test_zero_speed_never_moves() {
        let controller = MovementController::new(0.0);
        let current = Point2::new(1.0, 2.0);
        let input = InputSample {
            movement: Vector2::new(1.0, 0.0),
            touch: Some(Point2::new(9.0, 9.0)),
            ..Default::default()
        };
        assert_eq!(controller.step(current, &input), current);
    }
}

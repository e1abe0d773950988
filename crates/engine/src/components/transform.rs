use crate::prelude::*;

/// Placement of an entity in viewport pixel coordinates
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub position: Point2<f32>,
    /// Radians, 0 points along +x
    pub rotation: f32,
}

impl Transform2D {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Point2::new(x, y),
            ..Default::default()
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Point2::origin(),
            rotation: 0.0,
        }
    }
}

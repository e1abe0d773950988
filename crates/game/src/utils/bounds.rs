use crate::prelude::*;

/// Axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point2<f32>,
    pub max: Point2<f32>,
}

impl Bounds {
    /// Rectangle spanned by two opposite corners, in any order
    pub fn new(a: Point2<f32>, b: Point2<f32>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn contains(&self, point: Point2<f32>) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// Clamp each axis independently
    pub fn clamp(&self, point: Point2<f32>) -> Point2<f32> {
        Point2::new(
            point.x.max(self.min.x).min(self.max.x),
            point.y.max(self.min.y).min(self.max.y),
        )
    }
}

impl From<Viewport> for Bounds {
    fn from(viewport: Viewport) -> Self {
        let min = Point2::new(viewport.x as f32, viewport.y as f32);
        let max = min + Vector2::new(viewport.width as f32, viewport.height as f32);
        Self { min, max }
    }
}

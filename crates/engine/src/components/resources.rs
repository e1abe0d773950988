use crate::prelude::*;

use std::time::Duration;

#[derive(Resource)]
pub struct Time(pub Duration);

/// Number of frames run so far
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCount(pub u64);

/// Drawable area of the window in pixels
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Point at the given fractions of the viewport size
    pub fn fraction(&self, fx: f32, fy: f32) -> Point2<f32> {
        Point2::new(
            self.x as f32 + self.width as f32 * fx,
            self.y as f32 + self.height as f32 * fy,
        )
    }
}

/// Set by a layer to end the session after the current frame
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitRequested(pub bool);

use crate::prelude::*;

/// Point of a texture that sits on the entity position and that rotation
/// pivots around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Center,
    /// Middle of the left edge
    LeftCenter,
}

impl Anchor {
    /// Offset from the texture's top-left corner for a texture of `size` pixels
    pub fn resolve(self, size: Vector2<f32>) -> Vector2<f32> {
        match self {
            Anchor::Center => size / 2.0,
            Anchor::LeftCenter => Vector2::new(0.0, size.y / 2.0),
        }
    }
}

/// Draw hints handed to the renderer
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub anchor: Anchor,
    pub blend: Blend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blend {
    #[default]
    Alpha,
    Additive,
}

use crate::prelude::*;

/// Keeps the entity inside the viewport after it moves
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ViewportClamped;

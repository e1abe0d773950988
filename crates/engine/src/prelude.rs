pub use bevy_ecs::prelude::*;
pub use nalgebra::{Point2, Vector2};

pub use crate::components::*;
pub use crate::input::*;
pub use crate::{Layer, LayerContext};

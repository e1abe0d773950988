mod label;
mod resources;
mod sprite;
mod transform;

pub use label::*;
pub use resources::*;
pub use sprite::*;
pub use transform::*;

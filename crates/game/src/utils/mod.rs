mod angle;
mod bounds;

pub use angle::*;
pub use bounds::*;

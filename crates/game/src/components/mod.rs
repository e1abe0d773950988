mod angle_tracker;
mod movement_controller;
mod viewport_clamped;

pub use angle_tracker::*;
pub use movement_controller::*;
pub use viewport_clamped::*;

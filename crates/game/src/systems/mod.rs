mod angle_tracker;
mod input;
mod movement_controller;

pub use angle_tracker::*;
pub use input::*;
pub use movement_controller::*;

pub use aiming_engine::prelude::*;

pub use crate::components::*;
pub use crate::config::AimingConfig;
pub use crate::scene::*;
pub use crate::utils::*;

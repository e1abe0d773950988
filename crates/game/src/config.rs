use aiming_engine::Result;
use anyhow::{Context, ensure};
use std::str::FromStr;

use crate::components::{DEFAULT_MOVE_SPEED, DEFAULT_TURN_RATE};

pub const MOVE_SPEED_VAR: &str = "AIMING_MOVE_SPEED";
pub const TURN_RATE_VAR: &str = "AIMING_TURN_RATE";
pub const WINDOW_WIDTH_VAR: &str = "AIMING_WINDOW_WIDTH";
pub const WINDOW_HEIGHT_VAR: &str = "AIMING_WINDOW_HEIGHT";

/// Session settings
#[derive(Debug, Clone, PartialEq)]
pub struct AimingConfig {
    /// Target speed in pixels per frame
    pub move_speed: f32,
    /// Tracker turn rate in radians per frame
    pub turn_rate: f32,
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
}

impl Default for AimingConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            turn_rate: DEFAULT_TURN_RATE,
            window_width: 320,
            window_height: 480,
            title: "Aiming".to_string(),
        }
    }
}

impl AimingConfig {
    /// Defaults overridden by `AIMING_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(MOVE_SPEED_VAR) {
            config.move_speed = parse(MOVE_SPEED_VAR, &value)?;
        }
        if let Some(value) = lookup(TURN_RATE_VAR) {
            config.turn_rate = parse(TURN_RATE_VAR, &value)?;
        }
        if let Some(value) = lookup(WINDOW_WIDTH_VAR) {
            config.window_width = parse(WINDOW_WIDTH_VAR, &value)?;
        }
        if let Some(value) = lookup(WINDOW_HEIGHT_VAR) {
            config.window_height = parse(WINDOW_HEIGHT_VAR, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.move_speed.is_finite() && self.move_speed >= 0.0,
            "move speed must be a non-negative number, got {}",
            self.move_speed
        );
        ensure!(
            self.turn_rate.is_finite() && self.turn_rate >= 0.0,
            "turn rate must be a non-negative number, got {}",
            self.turn_rate
        );
        ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window size must be non-zero, got {}x{}",
            self.window_width,
            self.window_height
        );
        Ok(())
    }
}

fn parse<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid {}: {:?}", name, value))
}

//! A spotlight that turns at a bounded rate to follow a cat, and the input
//! handling that moves the cat.

pub mod aiming_layer;
pub mod components;
pub mod config;
pub mod prelude;
pub mod scene;
pub mod systems;
pub mod utils;

pub use aiming_layer::AimingLayer;

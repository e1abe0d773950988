use aiming::{AimingLayer, config::AimingConfig};
use aiming_engine::{ApplicationBuilder, Result, layers::TraceLayer};
use winit::event_loop::EventLoop;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("aiming", log::LevelFilter::Debug)
        .filter_module("aiming_engine", log::LevelFilter::Info)
        .init();

    let config = AimingConfig::from_env()?;
    log::info!(
        "Starting: move speed {} px/frame, turn rate {} rad/frame",
        config.move_speed,
        config.turn_rate
    );

    let event_loop = EventLoop::new()?;

    let layer_config = config.clone();
    let mut app = ApplicationBuilder::new()
        .with_title(config.title.clone())
        .with_size(config.window_width, config.window_height)
        .add_layer(move |context| Ok(Box::new(AimingLayer::new(context, &layer_config))))
        .add_layer(|context| Ok(Box::new(TraceLayer::new(context))))
        .build()?;

    event_loop.run_app(&mut app)?;

    Ok(())
}

use crate::prelude::*;

use aiming_engine::Result;
use bevy_ecs::schedule::Schedule;

/// Runs the aiming systems once per frame
pub struct AimingLayer {
    config: AimingConfig,
    schedule: Schedule,
}

impl AimingLayer {
    pub fn new(_context: &LayerContext, config: &AimingConfig) -> Self {
        Self {
            config: config.clone(),
            schedule: frame_schedule(),
        }
    }
}

/// Movement, then the viewport clamp, then aiming at the clamped position
pub fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            crate::systems::sample_input,
            crate::systems::move_targets,
            crate::systems::clamp_to_viewport,
            crate::systems::track_targets,
            crate::systems::request_exit,
        )
            .chain(),
    );
    schedule
}

impl Layer for AimingLayer {
    fn frame(&mut self, context: &LayerContext) -> Result<()> {
        let mut world = context.lock_world()?;

        // The window only reports its real size once it exists, so the scene
        // is placed on the first frame rather than at build time
        if !world.contains_resource::<SceneEntities>() {
            let viewport = *world.resource::<Viewport>();
            spawn_scene(&mut world, viewport, &self.config);
        }

        self.schedule.run(&mut world);
        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}
}

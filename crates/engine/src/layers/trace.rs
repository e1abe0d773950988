use crate::prelude::*;

/// Stand-in for a renderer: reports what would be drawn each frame.
pub struct TraceLayer;

impl TraceLayer {
    pub fn new(_context: &LayerContext) -> Self {
        Self
    }
}

impl Layer for TraceLayer {
    fn frame(&mut self, context: &LayerContext) -> crate::Result<()> {
        if !log::log_enabled!(log::Level::Trace) {
            return Ok(());
        }

        let mut world = context.lock_world()?;
        let delta_time = world.resource::<Time>().0;
        let mut query = world.query::<(&Tag, &Transform2D, Option<&Sprite>)>();

        for (tag, transform, sprite) in query.iter(&world) {
            log::trace!(
                "frame {} ({:?}): {} at ({:.1}, {:.1}) rot {:.3} {:?}",
                context.frame,
                delta_time,
                tag.label,
                transform.position.x,
                transform.position.y,
                transform.rotation,
                sprite.map(|s| s.anchor),
            );
        }

        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}
}

use crate::prelude::*;

/// The two entities of an aiming scene
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneEntities {
    pub spotlight: Entity,
    pub cat: Entity,
}

/// Spawn the cat at a quarter of the viewport width and the spotlight at the
/// centre, facing right.
pub fn spawn_scene(world: &mut World, viewport: Viewport, config: &AimingConfig) -> SceneEntities {
    let cat_position = viewport.fraction(0.25, 0.5);
    let cat = world
        .spawn((
            Tag {
                label: "Cat".to_string(),
            },
            Transform2D::at(cat_position.x, cat_position.y),
            Sprite {
                anchor: Anchor::Center,
                blend: Blend::Alpha,
            },
            MovementController::new(config.move_speed),
            ViewportClamped,
        ))
        .id();

    let spotlight_position = viewport.fraction(0.5, 0.5);
    let spotlight = world
        .spawn((
            Tag {
                label: "Spotlight".to_string(),
            },
            Transform2D::at(spotlight_position.x, spotlight_position.y),
            // Rotates around the light source on the texture's left edge
            Sprite {
                anchor: Anchor::LeftCenter,
                blend: Blend::Additive,
            },
            AngleTracker::new(cat, config.turn_rate),
        ))
        .id();

    log::debug!(
        "Scene seeded in {}x{}: cat at {:?}, spotlight at {:?}",
        viewport.width,
        viewport.height,
        cat_position,
        spotlight_position
    );

    let entities = SceneEntities { spotlight, cat };
    world.insert_resource(entities);
    entities
}

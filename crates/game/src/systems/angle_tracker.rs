use crate::prelude::*;

use bevy_ecs::query::Has;

/// Turn every tracker toward its target's current position
pub fn track_targets(
    mut commands: Commands,
    mut trackers: Query<(Entity, &mut Transform2D, &AngleTracker, Has<TargetLost>)>,
    targets: Query<&Transform2D, Without<AngleTracker>>,
) {
    for (entity, mut transform, tracker, was_lost) in trackers.iter_mut() {
        let Ok(target) = targets.get(tracker.target) else {
            if !was_lost {
                log::warn!(
                    "Tracker {:?} lost its target {:?}, holding angle",
                    entity,
                    tracker.target
                );
                commands.entity(entity).insert(TargetLost);
            }
            continue;
        };
        if was_lost {
            log::debug!("Tracker {:?} found target {:?}", entity, tracker.target);
            commands.entity(entity).remove::<TargetLost>();
        }

        transform.rotation =
            tracker.next_angle(transform.position, target.position, transform.rotation);
    }
}

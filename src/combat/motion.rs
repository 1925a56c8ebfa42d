use crate::entities::entity::{Entity, Ticks};

pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Extrapolate an entity's motion state to `as_of`, in place.
///
/// Moves the cached position along the line toward `finish` by
/// `speed * elapsed`, clamped at `finish`, then applies a pending heading
/// change once its deadline has passed (at most once per motion segment).
/// `start_time` advances to `as_of`, so calling again with the same
/// timestamp is a no-op. Timestamps before `start_time` are a caller
/// contract violation and do nothing.
pub fn advance(entity: &mut Entity, as_of: Ticks) {
    if as_of <= entity.start_time {
        return;
    }
    let elapsed = (as_of - entity.start_time) as f32 / TICKS_PER_SECOND as f32;
    if entity.speed > 0.0 {
        entity.position = entity.position.move_toward(entity.finish, entity.speed * elapsed);
    }
    entity.start_time = as_of;
    if entity.end_time != 0 && entity.end_time <= entity.start_time {
        entity.heading = entity.end_angle;
        entity.end_time = 0;
    }
}

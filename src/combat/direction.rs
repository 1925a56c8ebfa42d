use crate::combat::geometry::{Angle, Vec3f};

/// Strike angle relative to the target's facing. `Dot` marks periodic ticks,
/// which have no meaningful instantaneous geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitDirection {
    Front,
    Side,
    Back,
    Dot,
}

const FRONT_CONE_DEGREES: f32 = 45.0;
const BACK_CONE_DEGREES: f32 = 135.0;

/// Bucket the bearing from target to source against the target's heading:
/// within the forward cone is Front, within the rearward cone is Back, the
/// remainder is Side. Coincident positions have a degenerate bearing and
/// classify as Front.
pub fn classify(source_pos: Vec3f, target_pos: Vec3f, target_heading: Angle) -> HitDirection {
    if source_pos.x == target_pos.x && source_pos.y == target_pos.y {
        return HitDirection::Front;
    }
    let bearing = target_pos.heading_to(source_pos);
    let offset = bearing.diff(target_heading).to_degrees().abs();
    if offset <= FRONT_CONE_DEGREES {
        HitDirection::Front
    } else if offset >= BACK_CONE_DEGREES {
        HitDirection::Back
    } else {
        HitDirection::Side
    }
}

use std::fmt;

/// Full revolution of the wire angle format, 65536 raw units.
const FULL_CIRCLE: f32 = 65536.0;

/// Heading as transmitted on the wire: a raw i16 where 0x4000 is a quarter
/// turn and wrap-around arithmetic gives the shortest signed difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Angle(pub i16);

impl Angle {
    pub fn from_radians(radians: f32) -> Self {
        let raw = (radians / std::f32::consts::TAU * FULL_CIRCLE).round() as i64;
        Angle((raw & 0xffff) as u16 as i16)
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    pub fn to_radians(self) -> f32 {
        f32::from(self.0) / FULL_CIRCLE * std::f32::consts::TAU
    }

    pub fn to_degrees(self) -> f32 {
        f32::from(self.0) * 360.0 / FULL_CIRCLE
    }

    /// Shortest signed difference `self - other`, in [-180°, 180°).
    pub fn diff(self, other: Angle) -> Angle {
        Angle(self.0.wrapping_sub(other.0))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.to_degrees())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn distance_to(self, other: Vec3f) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Bearing toward `other` in the horizontal plane. Height is ignored;
    /// headings are planar on the wire.
    pub fn heading_to(self, other: Vec3f) -> Angle {
        Angle::from_radians((other.y - self.y).atan2(other.x - self.x))
    }

    /// Point `distance` units along the straight line toward `finish`,
    /// clamped so the result never passes `finish`.
    pub fn move_toward(self, finish: Vec3f, distance: f32) -> Vec3f {
        if distance <= 0.0 {
            return self;
        }
        let total = self.distance_to(finish);
        if total <= distance || total == 0.0 {
            return finish;
        }
        let t = distance / total;
        Vec3f {
            x: self.x + (finish.x - self.x) * t,
            y: self.y + (finish.y - self.y) * t,
            z: self.z + (finish.z - self.z) * t,
        }
    }
}

impl fmt::Display for Vec3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_round_trips_through_degrees() {
        let angle = Angle::from_degrees(90.0);
        assert_eq!(angle.0, 16384);
        assert!((angle.to_degrees() - 90.0).abs() < 0.01);
    }

    #[test]
    fn angle_wraps_past_half_turn() {
        let angle = Angle::from_degrees(270.0);
        assert!((angle.to_degrees() - (-90.0)).abs() < 0.01);
    }

    #[test]
    fn diff_takes_shortest_arc() {
        let a = Angle::from_degrees(170.0);
        let b = Angle::from_degrees(-170.0);
        assert!((a.diff(b).to_degrees() - (-20.0)).abs() < 0.1);
    }

    #[test]
    fn heading_to_points_along_positive_x() {
        let origin = Vec3f::zero();
        let east = Vec3f::new(10.0, 0.0, 0.0);
        assert_eq!(origin.heading_to(east).0, 0);
    }

    #[test]
    fn move_toward_clamps_at_finish() {
        let start = Vec3f::zero();
        let finish = Vec3f::new(3.0, 4.0, 0.0);
        assert_eq!(start.move_toward(finish, 100.0), finish);
    }

    #[test]
    fn move_toward_interpolates_partway() {
        let start = Vec3f::zero();
        let finish = Vec3f::new(10.0, 0.0, 0.0);
        let mid = start.move_toward(finish, 4.0);
        assert!((mid.x - 4.0).abs() < 0.001);
        assert_eq!(mid.y, 0.0);
    }
}

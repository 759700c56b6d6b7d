use serde::{Deserialize, Serialize};

/// 2D vector in screen space (y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Signed angle in degrees from `self` to `other`, in (-360, 360).
    ///
    /// Not normalized; callers wrap with `rem_euclid(360.0)`.
    pub fn angle_to(&self, other: Vec2) -> f32 {
        other.y.atan2(other.x).to_degrees() - self.y.atan2(self.x).to_degrees()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_to_measures_counter_to_screen_rotation() {
        let right = Vec2::new(1.0, 0.0);
        let down = Vec2::new(0.0, 1.0);
        assert!((right.angle_to(down) - 90.0).abs() < 1e-4);
        assert!((down.angle_to(right) + 90.0).abs() < 1e-4);
        assert_eq!(right.angle_to(right), 0.0);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut v = Vec2::new(1.0, 2.0);
        v += Vec2::new(3.0, -4.0);
        assert_eq!(v, Vec2::new(4.0, -2.0));
        assert_eq!(v - Vec2::new(4.0, -2.0), Vec2::zero());
    }
}

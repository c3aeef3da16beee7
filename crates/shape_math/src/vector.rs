//! 2D vector type

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 2D vector, also used as a point on the pixel lattice
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Lattice point from integer pixel coordinates
    #[inline]
    pub fn from_grid(x: u32, y: u32) -> Self {
        Self::new(x as f32, y as f32)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Exact bit-level key for hashing and ordering.
    ///
    /// `Vec2` cannot be `Eq`/`Hash` because of `f32`; lattice points are
    /// always finite integers, so comparing bit patterns is exact.
    #[inline]
    pub fn key(self) -> PointKey {
        // +0.0 and -0.0 must land on the same key
        PointKey((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

/// Hashable identity of a [`Vec2`], see [`Vec2::key`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey(u32, u32);

impl Add for Vec2 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Vec2 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}
impl Neg for Vec2 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}
impl AddAssign for Vec2 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Vec2 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_length() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vec2::ZERO.distance(v), 5.0);
    }

    #[test]
    fn test_vec2_ops() {
        let mut a = Vec2::new(1.0, 2.0);
        a += Vec2::ONE;
        assert_eq!(a, Vec2::new(2.0, 3.0));
        a -= Vec2::new(0.5, 0.5);
        assert_eq!(a * 2.0, Vec2::new(3.0, 5.0));
        assert_eq!(-a, Vec2::new(-1.5, -2.5));
    }

    #[test]
    fn test_key_is_exact() {
        assert_eq!(Vec2::from_grid(3, 7).key(), Vec2::new(3.0, 7.0).key());
        assert_ne!(Vec2::new(3.0, 7.0).key(), Vec2::new(3.0, 7.000_001).key());
        assert_eq!(Vec2::new(0.0, 0.0).key(), Vec2::new(-0.0, 0.0).key());
    }
}

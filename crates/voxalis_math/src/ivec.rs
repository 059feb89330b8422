//! Integer 3D vectors for grid coordinates and grid sizes.

use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::vector::Vec3;

/// Integer 3D vector.
///
/// Used both as a grid coordinate and as a grid size ("rows"), in which
/// case `count` is the number of cells and `contains` tests bounds.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct IVec3 {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
    /// Z component
    pub z: i32,
}

impl IVec3 {
    /// Zero vector
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// All ones
    pub const ONE: Self = Self::new(1, 1, 1);

    /// Creates a new vector.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// All components set to `value`.
    #[inline]
    #[must_use]
    pub const fn splat(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// Unit step for a direction.
    #[must_use]
    pub const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::new(-1, 0, 0),
            Direction::Right => Self::new(1, 0, 0),
            Direction::Top => Self::new(0, 1, 0),
            Direction::Bottom => Self::new(0, -1, 0),
            Direction::Front => Self::new(0, 0, 1),
            Direction::Back => Self::new(0, 0, -1),
        }
    }

    /// Rounds each component up.
    #[must_use]
    pub fn from_vec3_ceil(v: Vec3) -> Self {
        Self::new(v.x.ceil() as i32, v.y.ceil() as i32, v.z.ceil() as i32)
    }

    /// Inverse of [`IVec3::to_index`] for a grid of size `rows`.
    ///
    /// `rows.x` and `rows.y` must be non-zero.
    #[must_use]
    pub const fn from_index(index: i32, rows: Self) -> Self {
        let layer = rows.x * rows.y;
        let z = index / layer;
        let y = (index - z * layer) / rows.x;
        let x = index - rows.x * (y + rows.y * z);
        Self::new(x, y, z)
    }

    /// Linear index of this coordinate in a grid of size `rows` (x fastest).
    #[inline]
    #[must_use]
    pub const fn to_index(self, rows: Self) -> i32 {
        self.x + rows.x * (self.y + rows.y * self.z)
    }

    /// Number of cells when used as a grid size.
    #[inline]
    #[must_use]
    pub const fn count(self) -> i32 {
        self.x * self.y * self.z
    }

    /// Returns true if `coord` lies inside a grid of this size.
    #[inline]
    #[must_use]
    pub const fn contains(self, coord: Self) -> bool {
        coord.x >= 0
            && coord.x < self.x
            && coord.y >= 0
            && coord.y < self.y
            && coord.z >= 0
            && coord.z < self.z
    }

    /// Component-wise euclidean modulo; results are never negative.
    #[must_use]
    pub const fn euclid_mod(self, value: Self) -> Self {
        Self::new(
            self.x.rem_euclid(value.x),
            self.y.rem_euclid(value.y),
            self.z.rem_euclid(value.z),
        )
    }

    /// Euclidean modulo applied only to the axis `direction` lies on.
    #[must_use]
    pub const fn euclid_mod_axis(self, value: Self, direction: Direction) -> Self {
        let mut out = self;
        match direction {
            Direction::Left | Direction::Right => out.x = self.x.rem_euclid(value.x),
            Direction::Top | Direction::Bottom => out.y = self.y.rem_euclid(value.y),
            Direction::Front | Direction::Back => out.z = self.z.rem_euclid(value.z),
        }
        out
    }

    /// Converts to a float vector.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Euclidean distance.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        self.to_vec3().distance(other.to_vec3())
    }
}

impl fmt::Display for IVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl From<Direction> for IVec3 {
    fn from(direction: Direction) -> Self {
        Self::from_direction(direction)
    }
}

macro_rules! impl_component_op {
    ($trait:ident, $fn:ident, $op:tt) => {
        impl $trait for IVec3 {
            type Output = Self;
            fn $fn(self, rhs: Self) -> Self {
                Self::new(self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }

        impl $trait<i32> for IVec3 {
            type Output = Self;
            fn $fn(self, rhs: i32) -> Self {
                Self::new(self.x $op rhs, self.y $op rhs, self.z $op rhs)
            }
        }
    };
}

impl_component_op!(Add, add, +);
impl_component_op!(Sub, sub, -);
impl_component_op!(Mul, mul, *);
impl_component_op!(Div, div, /);

impl Add<Direction> for IVec3 {
    type Output = Self;
    fn add(self, rhs: Direction) -> Self {
        self + Self::from_direction(rhs)
    }
}

impl Sub<Direction> for IVec3 {
    type Output = Self;
    fn sub(self, rhs: Direction) -> Self {
        self - Self::from_direction(rhs)
    }
}

impl Rem<i32> for IVec3 {
    type Output = Self;
    fn rem(self, rhs: i32) -> Self {
        self.euclid_mod(Self::splat(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_covers_grid() {
        let rows = IVec3::new(4, 3, 5);
        for i in 0..rows.count() {
            let coord = IVec3::from_index(i, rows);
            assert!(rows.contains(coord), "{coord} outside {rows}");
            assert_eq!(coord.to_index(rows), i);
        }
    }

    #[test]
    fn test_modulo_never_negative() {
        let v = IVec3::new(-1, -17, 33) % 16;
        assert_eq!(v, IVec3::new(15, 15, 1));
    }

    #[test]
    fn test_modulo_axis_only_touches_one_component() {
        let v = IVec3::new(-1, -1, -1).euclid_mod_axis(IVec3::splat(16), Direction::Top);
        assert_eq!(v, IVec3::new(-1, 15, -1));
    }

    #[test]
    fn test_direction_arithmetic() {
        let origin = IVec3::new(2, 2, 2);
        assert_eq!(origin + Direction::Top, IVec3::new(2, 3, 2));
        assert_eq!(origin - Direction::Front, IVec3::new(2, 2, 1));
        assert_eq!(origin * 3, IVec3::splat(6));
        assert_eq!(origin / IVec3::new(1, 2, 2), IVec3::new(2, 1, 1));
    }

    #[test]
    fn test_ceil_and_display() {
        let v = IVec3::from_vec3_ceil(Vec3::new(0.2, -0.7, 3.0));
        assert_eq!(v, IVec3::new(1, 0, 3));
        assert_eq!(v.to_string(), "1 0 3");
    }

    #[test]
    fn test_contains_rejects_negative() {
        let rows = IVec3::splat(8);
        assert!(rows.contains(IVec3::ZERO));
        assert!(!rows.contains(IVec3::new(-1, 0, 0)));
        assert!(!rows.contains(IVec3::new(0, 8, 0)));
    }
}

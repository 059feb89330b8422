//! Axis-aligned face directions.

use serde::{Deserialize, Serialize};

use crate::ivec::IVec3;
use crate::vector::Vec3;

/// One of the six faces of a voxel.
///
/// The discriminant doubles as the face index into cube mesh tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// +Z
    Front = 0,
    /// +X
    Right = 1,
    /// -Z
    Back = 2,
    /// -X
    Left = 3,
    /// +Y
    Top = 4,
    /// -Y
    Bottom = 5,
}

impl Direction {
    /// All six directions.
    pub const CROSS: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::Front,
        Self::Back,
    ];

    /// The four horizontal directions.
    pub const FLAT: [Self; 4] = [Self::Left, Self::Right, Self::Front, Self::Back];

    /// Face index (0..6).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Unit vector for this direction.
    #[must_use]
    pub const fn to_vec3(self) -> Vec3 {
        match self {
            Self::Front => Vec3::FORWARD,
            Self::Back => Vec3::BACK,
            Self::Left => Vec3::LEFT,
            Self::Right => Vec3::RIGHT,
            Self::Top => Vec3::UP,
            Self::Bottom => Vec3::DOWN,
        }
    }

    /// Unit integer step for this direction.
    #[must_use]
    pub const fn to_ivec3(self) -> IVec3 {
        IVec3::from_direction(self)
    }

    /// Returns true for `Top` and `Bottom`.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

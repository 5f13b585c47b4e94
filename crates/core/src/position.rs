//! Block and world coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

/// Integer block coordinates.
///
/// Ordering is `(x, y, z)` lexical, which gives block stores a deterministic
/// scan order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BlockPos {
    /// East/west axis.
    pub x: i32,
    /// Vertical axis.
    pub y: i32,
    /// North/south axis.
    pub z: i32,
}

impl BlockPos {
    /// Create a block position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Position shifted by the given deltas.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Block `n` steps towards negative z.
    pub const fn north(self, n: i32) -> Self {
        self.offset(0, 0, -n)
    }

    /// Block `n` steps towards positive z.
    pub const fn south(self, n: i32) -> Self {
        self.offset(0, 0, n)
    }

    /// Block `n` steps towards positive x.
    pub const fn east(self, n: i32) -> Self {
        self.offset(n, 0, 0)
    }

    /// Block `n` steps towards negative x.
    pub const fn west(self, n: i32) -> Self {
        self.offset(-n, 0, 0)
    }

    /// Block `n` steps up.
    pub const fn above(self, n: i32) -> Self {
        self.offset(0, n, 0)
    }

    /// Minimum corner of the block as a world location.
    pub fn location(self) -> Vec3 {
        Vec3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

/// Error returned when parsing a `x,y,z` triple fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected `x,y,z` integer coordinates, got `{0}`")]
pub struct BlockPosParseError(pub String);

impl FromStr for BlockPos {
    type Err = BlockPosParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || BlockPosParseError(s.to_string());
        let mut parts = s.split(',').map(|part| part.trim().parse::<i32>());
        let (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };
        Ok(Self::new(x, y, z))
    }
}

/// Continuous world location (entity positions, particle spawn points).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// East/west axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// North/south axis.
    pub z: f64,
}

impl Vec3 {
    /// Create a location.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Block containing this location.
    pub fn floor(self) -> BlockPos {
        BlockPos::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

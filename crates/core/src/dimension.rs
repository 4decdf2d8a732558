//! Dimension identifiers and horizontal coordinate scaling.
//!
//! One Nether block spans eight Overworld blocks along X and Z. The End uses
//! Overworld scale. Scaling down floors, so a round trip through the Nether
//! loses the low three bits of each coordinate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chunk::BlockPos;
use crate::error::ParseError;

/// Overworld blocks per Nether block along each horizontal axis.
pub const NETHER_SCALE: i32 = 8;

/// Stable identifier for a world dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionId {
    /// The Overworld dimension.
    Overworld,
    /// The Nether dimension.
    Nether,
    /// The End dimension.
    End,
}

impl DimensionId {
    /// Default (Overworld) dimension.
    pub const DEFAULT: Self = Self::Overworld;

    /// Overworld-equivalent blocks per block of this dimension.
    pub const fn coordinate_scale(self) -> i32 {
        match self {
            Self::Overworld | Self::End => NETHER_SCALE,
            Self::Nether => 1,
        }
    }

    /// Map a horizontal position in `self` to the matching position in `to`.
    ///
    /// Scaling down floors toward negative infinity; scaling up saturates at
    /// the i32 bounds.
    pub const fn convert(self, pos: BlockPos, to: DimensionId) -> BlockPos {
        let from_scale = self.coordinate_scale();
        let to_scale = to.coordinate_scale();
        if from_scale > to_scale {
            let factor = from_scale / to_scale;
            BlockPos::new(pos.x.div_euclid(factor), pos.z.div_euclid(factor))
        } else if from_scale < to_scale {
            let factor = to_scale / from_scale;
            BlockPos::new(pos.x.saturating_mul(factor), pos.z.saturating_mul(factor))
        } else {
            pos
        }
    }

    /// Canonical string key used in configs/logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overworld => "overworld",
            Self::Nether => "nether",
            Self::End => "end",
        }
    }
}

impl Default for DimensionId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Overworld => "Overworld",
            Self::Nether => "Nether",
            Self::End => "End",
        };
        f.write_str(name)
    }
}

impl FromStr for DimensionId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overworld" | "ow" => Ok(Self::Overworld),
            "nether" => Ok(Self::Nether),
            "end" => Ok(Self::End),
            _ => Err(ParseError::UnknownDimension(s.to_string())),
        }
    }
}

/// Nether coordinates matching Overworld `(x, z)`.
pub const fn overworld_to_nether(x: i32, z: i32) -> (i32, i32) {
    let pos = DimensionId::Overworld.convert(BlockPos::new(x, z), DimensionId::Nether);
    (pos.x, pos.z)
}

/// Overworld coordinates matching Nether `(x, z)`.
///
/// Not an inverse of [`overworld_to_nether`]: the result is always a multiple of 8.
pub const fn nether_to_overworld(x: i32, z: i32) -> (i32, i32) {
    let pos = DimensionId::Nether.convert(BlockPos::new(x, z), DimensionId::Overworld);
    (pos.x, pos.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overworld_to_nether_floors() {
        assert_eq!(overworld_to_nether(128, 256), (16, 32));
        assert_eq!(overworld_to_nether(7, 15), (0, 1));
        assert_eq!(overworld_to_nether(-1, -8), (-1, -1));
        assert_eq!(overworld_to_nether(-9, -16), (-2, -2));
    }

    #[test]
    fn nether_to_overworld_scales_up() {
        assert_eq!(nether_to_overworld(16, 32), (128, 256));
        assert_eq!(nether_to_overworld(-3, 0), (-24, 0));
    }

    #[test]
    fn nether_to_overworld_saturates() {
        assert_eq!(nether_to_overworld(i32::MAX, i32::MIN), (i32::MAX, i32::MIN));
    }

    #[test]
    fn end_uses_overworld_scale() {
        let pos = BlockPos::new(-100, 250);
        assert_eq!(DimensionId::End.convert(pos, DimensionId::Overworld), pos);
        assert_eq!(
            DimensionId::End.convert(pos, DimensionId::Nether),
            BlockPos::new(-13, 31)
        );
        assert_eq!(DimensionId::Nether.convert(pos, DimensionId::Nether), pos);
    }

    #[test]
    fn dimension_names_parse() {
        assert_eq!("Nether".parse(), Ok(DimensionId::Nether));
        assert_eq!(" overworld ".parse(), Ok(DimensionId::Overworld));
        assert_eq!("end".parse(), Ok(DimensionId::End));
        assert!(matches!(
            "aether".parse::<DimensionId>(),
            Err(ParseError::UnknownDimension(_))
        ));
        assert_eq!(DimensionId::default().as_str(), "overworld");
        assert_eq!(DimensionId::Nether.to_string(), "Nether");
    }
}

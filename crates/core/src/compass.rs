//! Compass bearings and block distances between two horizontal positions.
//!
//! Bearing labels read increasing X as east and increasing Z as north, so
//! travelling from (100, 200) to (120, 180) is "Southeast". Distances are
//! computed from `i64` differences, so any pair of `i32` positions is handled
//! without overflow.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chunk::BlockPos;

/// Eight-way compass direction from one position to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Both positions coincide.
    #[serde(rename = "Same location")]
    Same,
    /// Z increases, X unchanged.
    North,
    /// Z decreases, X unchanged.
    South,
    /// X increases, Z unchanged.
    East,
    /// X decreases, Z unchanged.
    West,
    /// X and Z increase.
    Northeast,
    /// X decreases, Z increases.
    Northwest,
    /// X increases, Z decreases.
    Southeast,
    /// X and Z decrease.
    Southwest,
}

impl Direction {
    /// Direction of travel from `from` to `to`.
    ///
    /// Compound labels only appear when both axes differ.
    pub fn between(from: BlockPos, to: BlockPos) -> Self {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dz = i64::from(to.z) - i64::from(from.z);
        match (dx.signum(), dz.signum()) {
            (0, 0) => Self::Same,
            (0, -1) => Self::South,
            (0, _) => Self::North,
            (-1, 0) => Self::West,
            (_, 0) => Self::East,
            (1, -1) => Self::Southeast,
            (_, -1) => Self::Southwest,
            (1, _) => Self::Northeast,
            (_, _) => Self::Northwest,
        }
    }

    /// Human-readable label ("Northeast", "Same location", ...).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Same => "Same location",
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Northeast => "Northeast",
            Self::Northwest => "Northwest",
            Self::Southeast => "Southeast",
            Self::Southwest => "Southwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction plus rounded straight-line distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bearing {
    /// Compass direction of travel.
    pub direction: Direction,
    /// Euclidean distance in blocks, rounded to the nearest integer.
    pub distance: i64,
}

impl Bearing {
    /// Bearing from `from` to `to`.
    pub fn between(from: BlockPos, to: BlockPos) -> Self {
        Self {
            direction: Direction::between(from, to),
            distance: euclidean_distance(from, to),
        }
    }

    /// Direction label.
    pub const fn label(&self) -> &'static str {
        self.direction.label()
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} blocks", self.direction, self.distance)
    }
}

/// Straight-line distance rounded to the nearest block.
///
/// Exact in integers: `round(sqrt(n))` is `k + 1` when `n - k² > k` for
/// `k = isqrt(n)`, else `k`. A sum of integer squares never has a root ending
/// in exactly `.5`, so this agrees with half-up, half-even and
/// half-away-from-zero rounding alike.
pub fn euclidean_distance(from: BlockPos, to: BlockPos) -> i64 {
    let dx = u128::from((i64::from(to.x) - i64::from(from.x)).unsigned_abs());
    let dz = u128::from((i64::from(to.z) - i64::from(from.z)).unsigned_abs());
    let n = dx * dx + dz * dz;
    let root = n.isqrt();
    let rounded = if n - root * root > root { root + 1 } else { root };
    rounded as i64
}

/// Sum of the absolute axis differences.
pub fn manhattan_distance(p1: (i32, i32), p2: (i32, i32)) -> i64 {
    let dx = i64::from(p2.0) - i64::from(p1.0);
    let dz = i64::from(p2.1) - i64::from(p1.1);
    dx.abs() + dz.abs()
}

/// Direction label and rounded distance from `(x1, z1)` to `(x2, z2)`.
pub fn direction(x1: i32, z1: i32, x2: i32, z2: i32) -> (&'static str, i64) {
    let bearing = Bearing::between(BlockPos::new(x1, z1), BlockPos::new(x2, z2));
    (bearing.label(), bearing.distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_bearing_matches_reference_scenario() {
        assert_eq!(direction(100, 200, 120, 180), ("Southeast", 28));
        assert_eq!(manhattan_distance((100, 200), (120, 180)), 40);
    }

    #[test]
    fn same_location_has_zero_distance() {
        assert_eq!(direction(5, 5, 5, 5), ("Same location", 0));
    }

    #[test]
    fn pure_axis_labels() {
        assert_eq!(direction(0, 0, 0, -3).0, "South");
        assert_eq!(direction(0, 0, 0, 3).0, "North");
        assert_eq!(direction(0, 0, 3, 0).0, "East");
        assert_eq!(direction(0, 0, -3, 0).0, "West");
    }

    #[test]
    fn compound_labels() {
        assert_eq!(direction(0, 0, 1, -1).0, "Southeast");
        assert_eq!(direction(0, 0, -1, -1).0, "Southwest");
        assert_eq!(direction(0, 0, 1, 1).0, "Northeast");
        assert_eq!(direction(0, 0, -1, 1).0, "Northwest");
    }

    #[test]
    fn distance_rounds_to_nearest() {
        let origin = BlockPos::new(0, 0);
        assert_eq!(euclidean_distance(origin, BlockPos::new(3, 4)), 5);
        assert_eq!(euclidean_distance(origin, BlockPos::new(1, 1)), 1);
        assert_eq!(euclidean_distance(origin, BlockPos::new(2, 2)), 3);
        // sqrt(72) = 8.485 rounds down, sqrt(73) = 8.544 rounds up.
        assert_eq!(euclidean_distance(origin, BlockPos::new(6, 6)), 8);
        assert_eq!(euclidean_distance(origin, BlockPos::new(8, 3)), 9);
    }

    #[test]
    fn distance_agrees_with_float_rounding_near_half() {
        // Values whose root lands closest to .5: n = k² + k and k² + k + 1.
        for k in 0u32..2000 {
            for n in [k * k + k, k * k + k + 1] {
                let exact = {
                    let root = u128::from(n).isqrt();
                    let n = u128::from(n);
                    if n - root * root > root { root + 1 } else { root }
                };
                assert_eq!(exact as f64, f64::from(n).sqrt().round());
            }
        }
    }

    #[test]
    fn float_rounding_rule_is_half_away_from_zero() {
        // The documented rule for non-integer inputs; integer inputs never tie.
        assert_eq!(2.5f64.round(), 3.0);
        assert_eq!(0.5f64.round(), 1.0);
    }

    #[test]
    fn extreme_positions_do_not_overflow() {
        let a = BlockPos::new(i32::MIN, i32::MIN);
        let b = BlockPos::new(i32::MAX, i32::MAX);
        assert_eq!(manhattan_distance((a.x, a.z), (b.x, b.z)), 2 * (u32::MAX as i64));
        // (2^32 - 1) * sqrt(2) = 6074000998.54
        assert_eq!(euclidean_distance(a, b), 6_074_000_999);
        assert_eq!(Direction::between(a, b), Direction::Northeast);
    }

    #[test]
    fn serialized_direction_uses_labels() {
        let json = serde_json::to_string(&Direction::Same).unwrap();
        assert_eq!(json, "\"Same location\"");
        let bearing = Bearing::between(BlockPos::new(0, 0), BlockPos::new(0, 10));
        assert_eq!(bearing.to_string(), "North, 10 blocks");
    }
}

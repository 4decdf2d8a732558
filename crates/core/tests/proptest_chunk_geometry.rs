//! Property-based tests for chunk geometry and coordinate conversions
//!
//! Critical invariants:
//! - Every corner of a block's chunk maps back to the same chunk
//! - Chunk membership floors toward negative infinity
//! - Nether round trips are exact only on multiples of 8
//! - Distances are symmetric and bounded by each other

use proptest::prelude::*;
use slimecalc_core::{
    block_to_chunk, chunk_center, chunk_corners, direction, euclidean_distance,
    manhattan_distance, nether_to_overworld, overworld_to_nether, BlockPos, ChunkPos,
    CHUNK_SIZE_X, CHUNK_SIZE_Z,
};

proptest! {
    /// Property: corners and center stay inside the chunk they came from
    #[test]
    fn corners_map_back_to_same_chunk(x in any::<i32>(), z in any::<i32>()) {
        let chunk = block_to_chunk(x, z);
        for (cx, cz) in chunk_corners(x, z) {
            prop_assert_eq!(block_to_chunk(cx, cz), chunk);
        }
        let (mx, mz) = chunk_center(x, z);
        prop_assert_eq!(block_to_chunk(mx, mz), chunk);
    }

    /// Property: the block lies between its chunk's NW and SE corners
    #[test]
    fn block_lies_within_its_corners(x in any::<i32>(), z in any::<i32>()) {
        let [nw, _, _, se] = chunk_corners(x, z);
        prop_assert!(nw.0 <= x && x <= se.0);
        prop_assert!(nw.1 <= z && z <= se.1);
        prop_assert_eq!(i64::from(se.0) - i64::from(nw.0), i64::from(CHUNK_SIZE_X - 1));
        prop_assert_eq!(i64::from(se.1) - i64::from(nw.1), i64::from(CHUNK_SIZE_Z - 1));
    }

    /// Property: membership floors rather than truncates
    #[test]
    fn chunk_membership_floors(x in any::<i32>(), z in any::<i32>()) {
        let (cx, cz) = block_to_chunk(x, z);
        prop_assert_eq!(i64::from(cx), (i64::from(x) as f64 / 16.0).floor() as i64);
        prop_assert_eq!(i64::from(cz), (i64::from(z) as f64 / 16.0).floor() as i64);
        prop_assert!(ChunkPos::new(cx, cz).contains(BlockPos::new(x, z)));
    }

    /// Property: Overworld -> Nether -> Overworld loses at most 7 per axis
    #[test]
    fn nether_round_trip_is_lossy(x in any::<i32>(), z in any::<i32>()) {
        let (nx, nz) = overworld_to_nether(x, z);
        let (rx, rz) = nether_to_overworld(nx, nz);
        prop_assert!((0..=7).contains(&(i64::from(x) - i64::from(rx))));
        prop_assert!((0..=7).contains(&(i64::from(z) - i64::from(rz))));
        let exact = x % 8 == 0 && z % 8 == 0;
        prop_assert_eq!((rx, rz) == (x, z), exact);
    }

    /// Property: Nether -> Overworld -> Nether is exact inside the world
    #[test]
    fn nether_to_overworld_is_right_inverse(
        x in -(1i32 << 27)..(1i32 << 27),
        z in -(1i32 << 27)..(1i32 << 27),
    ) {
        let (ox, oz) = nether_to_overworld(x, z);
        prop_assert_eq!(overworld_to_nether(ox, oz), (x, z));
    }

    /// Property: distances are symmetric and Euclidean never exceeds Manhattan
    #[test]
    fn distances_are_symmetric(
        x1 in any::<i32>(), z1 in any::<i32>(),
        x2 in any::<i32>(), z2 in any::<i32>(),
    ) {
        let a = BlockPos::new(x1, z1);
        let b = BlockPos::new(x2, z2);
        prop_assert_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
        prop_assert_eq!(manhattan_distance((x1, z1), (x2, z2)), manhattan_distance((x2, z2), (x1, z1)));
        prop_assert!(euclidean_distance(a, b) <= manhattan_distance((x1, z1), (x2, z2)));
    }

    /// Property: only identical points are "Same location", and they are 0 apart
    #[test]
    fn same_location_iff_identical(
        x1 in -1000i32..1000, z1 in -1000i32..1000,
        x2 in -1000i32..1000, z2 in -1000i32..1000,
    ) {
        let (label, distance) = direction(x1, z1, x2, z2);
        prop_assert_eq!(label == "Same location", (x1, z1) == (x2, z2));
        prop_assert_eq!(distance == 0, (x1, z1) == (x2, z2));
    }

    /// Property: exact integer rounding matches float rounding on small inputs
    #[test]
    fn distance_matches_float_rounding(dx in -46_000i32..46_000, dz in -46_000i32..46_000) {
        let expected = f64::from(dx).hypot(f64::from(dz)).round() as i64;
        prop_assert_eq!(euclidean_distance(BlockPos::new(0, 0), BlockPos::new(dx, dz)), expected);
    }
}

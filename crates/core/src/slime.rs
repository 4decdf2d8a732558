//! Slime chunk detection.
//!
//! A chunk's seed is `chunk_x * 0x1F1F1F1F ^ chunk_z` in wrapping 32-bit
//! arithmetic. The chunk is a slime chunk when the first MT19937 word drawn
//! from that seed is divisible by ten. No world seed is involved.

use tracing::{debug, trace};

use crate::chunk::{ChunkPos, ChunkRegion};
use crate::mt::MersenneTwister;

/// Multiplier applied to the chunk X coordinate when deriving the seed.
pub const SLIME_SEED_MULTIPLIER: u32 = 0x1F1F_1F1F;
/// One chunk in `SLIME_CHUNK_MODULUS` is expected to be a slime chunk.
pub const SLIME_CHUNK_MODULUS: u32 = 10;

/// Generator seed for the chunk at `(chunk_x, chunk_z)`.
///
/// Negative coordinates contribute their two's-complement bit patterns.
pub const fn chunk_seed(chunk_x: i32, chunk_z: i32) -> u32 {
    (chunk_x as u32).wrapping_mul(SLIME_SEED_MULTIPLIER) ^ (chunk_z as u32)
}

/// Whether the chunk at `(chunk_x, chunk_z)` is a slime chunk.
pub fn is_slime_chunk(chunk_x: i32, chunk_z: i32) -> bool {
    let mut mt = MersenneTwister::new(chunk_seed(chunk_x, chunk_z));
    mt.next_u32() % SLIME_CHUNK_MODULUS == 0
}

impl ChunkPos {
    /// Generator seed for this chunk.
    pub const fn slime_seed(self) -> u32 {
        chunk_seed(self.x, self.z)
    }

    /// Whether this chunk is a slime chunk.
    pub fn is_slime_chunk(self) -> bool {
        is_slime_chunk(self.x, self.z)
    }
}

/// All slime chunks in `region`, in ascending `(z, x)` order.
pub fn slime_chunks_in(region: &ChunkRegion) -> Vec<ChunkPos> {
    let found: Vec<ChunkPos> = region.iter().filter(|pos| pos.is_slime_chunk()).collect();
    debug!(
        %region,
        scanned = region.width() * region.depth(),
        found = found.len(),
        "scanned region for slime chunks"
    );
    found
}

/// Closest slime chunk to `origin` within Chebyshev distance `max_radius`.
///
/// Closeness is squared Euclidean chunk distance; ties go to the smaller
/// `(z, x)`. Rings are searched outward and the search stops once no later
/// ring can hold a closer or tying chunk.
pub fn nearest_slime_chunk(origin: ChunkPos, max_radius: u32) -> Option<ChunkPos> {
    let mut best: Option<(u128, i32, i32)> = None;
    let mut rings_searched = 0u64;
    for radius in 0..=max_radius {
        rings_searched = u64::from(radius) + 1;
        for pos in chebyshev_ring(origin, radius) {
            if !pos.is_slime_chunk() {
                continue;
            }
            let key = (squared_distance(origin, pos), pos.z, pos.x);
            if best.map_or(true, |current| key < current) {
                best = Some(key);
            }
        }
        // Every chunk beyond this ring is at least `radius + 1` away on one axis.
        let next = u128::from(radius) + 1;
        if best.is_some_and(|(dist, _, _)| dist < next * next) {
            break;
        }
    }
    let nearest = best.map(|(_, z, x)| ChunkPos::new(x, z));
    trace!(%origin, max_radius, rings_searched, ?nearest, "nearest slime chunk search");
    nearest
}

fn squared_distance(a: ChunkPos, b: ChunkPos) -> u128 {
    let dx = u128::from((i64::from(a.x) - i64::from(b.x)).unsigned_abs());
    let dz = u128::from((i64::from(a.z) - i64::from(b.z)).unsigned_abs());
    dx * dx + dz * dz
}

/// Chunks at exactly Chebyshev distance `radius` from `origin`, in ascending
/// `(z, x)` order. Positions outside the `i32` range are skipped.
fn chebyshev_ring(origin: ChunkPos, radius: u32) -> impl Iterator<Item = ChunkPos> {
    let r = i64::from(radius);
    (-r..=r)
        .flat_map(move |dz| {
            // Edge rows are full; rows in between only touch the two sides.
            let step = if dz.abs() == r { 1 } else { 2 * r };
            (-r..=r).step_by(step as usize).map(move |dx| (dx, dz))
        })
        .filter_map(move |(dx, dz)| {
            let x = i32::try_from(i64::from(origin.x) + dx).ok()?;
            let z = i32::try_from(i64::from(origin.z) + dz).ok()?;
            Some(ChunkPos::new(x, z))
        })
}

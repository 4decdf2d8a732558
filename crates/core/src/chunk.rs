use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{parse_components, ParseError};

/// Chunk width (X axis) in blocks.
pub const CHUNK_SIZE_X: i32 = 16;
/// Chunk depth (Z axis) in blocks.
pub const CHUNK_SIZE_Z: i32 = 16;
/// Offset from a chunk's north-west block to the block treated as its center.
pub const CHUNK_CENTER_OFFSET: i32 = 7;

/// Block coordinate (X,Z) in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    /// East/west coordinate.
    pub x: i32,
    /// North/south coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Construct a block position.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing this block.
    ///
    /// Rounds toward negative infinity, so block -1 lives in chunk -1.
    pub const fn chunk(self) -> ChunkPos {
        ChunkPos::new(
            self.x.div_euclid(CHUNK_SIZE_X),
            self.z.div_euclid(CHUNK_SIZE_Z),
        )
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl FromStr for BlockPos {
    type Err = ParseError;

    /// Parse `"x,z"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, z] = parse_components::<2>(s)?;
        Ok(Self::new(x, z))
    }
}

/// Chunk coordinate (X,Z) in chunk space.
/// Implements Ord for deterministic iteration in BTreeMap/BTreeSet (sorts by x, then z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkPos {
    /// Chunk column index along X.
    pub x: i32,
    /// Chunk row index along Z.
    pub z: i32,
}

impl ChunkPos {
    /// Construct a chunk position.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// North-west (minimum) block of the chunk.
    ///
    /// Geometry saturates for chunks no block can belong to.
    pub const fn origin(self) -> BlockPos {
        BlockPos::new(
            self.x.saturating_mul(CHUNK_SIZE_X),
            self.z.saturating_mul(CHUNK_SIZE_Z),
        )
    }

    /// Block treated as the chunk center, `(x*16+7, z*16+7)`.
    pub const fn center(self) -> BlockPos {
        let origin = self.origin();
        BlockPos::new(
            origin.x.saturating_add(CHUNK_CENTER_OFFSET),
            origin.z.saturating_add(CHUNK_CENTER_OFFSET),
        )
    }

    /// The four corner blocks of the chunk.
    pub const fn corners(self) -> ChunkCorners {
        let origin = self.origin();
        let east = origin.x.saturating_add(CHUNK_SIZE_X - 1);
        let south = origin.z.saturating_add(CHUNK_SIZE_Z - 1);
        ChunkCorners {
            nw: origin,
            ne: BlockPos::new(east, origin.z),
            sw: BlockPos::new(origin.x, south),
            se: BlockPos::new(east, south),
        }
    }

    /// Whether `block` lies inside this chunk.
    pub const fn contains(self, block: BlockPos) -> bool {
        let chunk = block.chunk();
        chunk.x == self.x && chunk.z == self.z
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl FromStr for ChunkPos {
    type Err = ParseError;

    /// Parse `"x,z"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, z] = parse_components::<2>(s)?;
        Ok(Self::new(x, z))
    }
}

/// Corner blocks of a chunk, named by compass quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkCorners {
    /// Minimum X, minimum Z.
    pub nw: BlockPos,
    /// Maximum X, minimum Z.
    pub ne: BlockPos,
    /// Minimum X, maximum Z.
    pub sw: BlockPos,
    /// Maximum X, maximum Z.
    pub se: BlockPos,
}

impl ChunkCorners {
    /// Corners in NW, NE, SW, SE order.
    pub const fn to_array(self) -> [BlockPos; 4] {
        [self.nw, self.ne, self.sw, self.se]
    }
}

/// Inclusive rectangle of chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkRegion {
    min: ChunkPos,
    max: ChunkPos,
}

impl ChunkRegion {
    /// Region spanning `a` and `b`, in any order.
    pub fn new(a: ChunkPos, b: ChunkPos) -> Self {
        Self {
            min: ChunkPos::new(a.x.min(b.x), a.z.min(b.z)),
            max: ChunkPos::new(a.x.max(b.x), a.z.max(b.z)),
        }
    }

    /// Square region of Chebyshev `radius` around `center`, clamped to the i32 range.
    pub fn around(center: ChunkPos, radius: u32) -> Self {
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        Self::new(
            ChunkPos::new(center.x.saturating_sub(r), center.z.saturating_sub(r)),
            ChunkPos::new(center.x.saturating_add(r), center.z.saturating_add(r)),
        )
    }

    /// Minimum corner chunk.
    pub fn min(&self) -> ChunkPos {
        self.min
    }

    /// Maximum corner chunk.
    pub fn max(&self) -> ChunkPos {
        self.max
    }

    /// Chunks along X.
    pub fn width(&self) -> u64 {
        (i64::from(self.max.x) - i64::from(self.min.x) + 1) as u64
    }

    /// Chunks along Z.
    pub fn depth(&self) -> u64 {
        (i64::from(self.max.z) - i64::from(self.min.z) + 1) as u64
    }

    /// Whether `pos` lies inside the region.
    pub fn contains(&self, pos: ChunkPos) -> bool {
        (self.min.x..=self.max.x).contains(&pos.x) && (self.min.z..=self.max.z).contains(&pos.z)
    }

    /// Chunks in ascending `(z, x)` order, one row of X at a time.
    pub fn iter(&self) -> impl Iterator<Item = ChunkPos> {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| (min.x..=max.x).map(move |x| ChunkPos::new(x, z)))
    }
}

impl fmt::Display for ChunkRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.min, self.max)
    }
}

impl FromStr for ChunkRegion {
    type Err = ParseError;

    /// Parse `"x1,z1,x2,z2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x1, z1, x2, z2] = parse_components::<4>(s)?;
        Ok(Self::new(ChunkPos::new(x1, z1), ChunkPos::new(x2, z2)))
    }
}

/// Chunk coordinates of the block at `(x, z)`.
pub const fn block_to_chunk(x: i32, z: i32) -> (i32, i32) {
    let chunk = BlockPos::new(x, z).chunk();
    (chunk.x, chunk.z)
}

/// Center block of the chunk containing `(x, z)`.
pub const fn chunk_center(x: i32, z: i32) -> (i32, i32) {
    let center = BlockPos::new(x, z).chunk().center();
    (center.x, center.z)
}

/// Corner blocks (NW, NE, SW, SE) of the chunk containing `(x, z)`.
pub fn chunk_corners(x: i32, z: i32) -> [(i32, i32); 4] {
    BlockPos::new(x, z)
        .chunk()
        .corners()
        .to_array()
        .map(|corner| (corner.x, corner.z))
}

//! Result records shared by the CLI, slash commands and scripts.
//!
//! Every record serializes to JSON and renders to plain text lines.

use std::collections::BTreeSet;

use serde::Serialize;
use slimecalc_core::{
    manhattan_distance, nearest_slime_chunk, slime_chunks_in, Bearing, BlockPos, ChunkCorners,
    ChunkPos, ChunkRegion, DimensionId,
};

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Help { lines: Vec<String> },
    Chunk(ChunkReport),
    Slime(SlimeReport),
    Conversion(ConversionReport),
    Bearing(BearingReport),
    Nearest(NearestReport),
    Map(SlimeMap),
}

impl Report {
    pub fn text_lines(&self, config: &AppConfig) -> Vec<String> {
        match self {
            Self::Help { lines } => lines.clone(),
            Self::Chunk(report) => report.text_lines(),
            Self::Slime(report) => report.text_lines(),
            Self::Conversion(report) => vec![report.text_line()],
            Self::Bearing(report) => report.text_lines(),
            Self::Nearest(report) => report.text_lines(),
            Self::Map(map) => map.render(config.slime_glyph, config.empty_glyph),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkReport {
    pub block: BlockPos,
    pub chunk: ChunkPos,
    pub center: BlockPos,
    pub corners: ChunkCorners,
    pub slime: bool,
}

impl ChunkReport {
    pub fn for_block(block: BlockPos) -> Self {
        let chunk = block.chunk();
        Self {
            block,
            chunk,
            center: chunk.center(),
            corners: chunk.corners(),
            slime: chunk.is_slime_chunk(),
        }
    }

    fn text_lines(&self) -> Vec<String> {
        let c = &self.corners;
        vec![
            format!("Block {} is in chunk {}", self.block, self.chunk),
            format!("The center of this chunk is at block {}", self.center),
            format!(
                "Chunk corners (NW, NE, SW, SE): {}, {}, {}, {}",
                c.nw, c.ne, c.sw, c.se
            ),
            slime_line(self.chunk, self.slime),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlimeReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockPos>,
    pub chunk: ChunkPos,
    pub seed: u32,
    pub slime: bool,
}

impl SlimeReport {
    pub fn for_block(block: BlockPos) -> Self {
        Self {
            block: Some(block),
            ..Self::for_chunk(block.chunk())
        }
    }

    pub fn for_chunk(chunk: ChunkPos) -> Self {
        Self {
            block: None,
            chunk,
            seed: chunk.slime_seed(),
            slime: chunk.is_slime_chunk(),
        }
    }

    fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if let Some(block) = self.block {
            lines.push(format!("Block {} is in chunk {}", block, self.chunk));
        }
        lines.push(slime_line(self.chunk, self.slime));
        lines
    }
}

fn slime_line(chunk: ChunkPos, slime: bool) -> String {
    if slime {
        format!("Chunk {chunk} is a slime chunk!")
    } else {
        format!("Chunk {chunk} is NOT a slime chunk.")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub from: DimensionId,
    pub to: DimensionId,
    pub input: BlockPos,
    pub output: BlockPos,
}

impl ConversionReport {
    pub fn new(from: DimensionId, to: DimensionId, input: BlockPos) -> Self {
        Self {
            from,
            to,
            input,
            output: from.convert(input, to),
        }
    }

    fn text_line(&self) -> String {
        format!("{} {} -> {} {}", self.from, self.input, self.to, self.output)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BearingReport {
    pub from: BlockPos,
    pub to: BlockPos,
    pub direction: String,
    pub distance: i64,
    pub manhattan: i64,
}

impl BearingReport {
    pub fn between(from: BlockPos, to: BlockPos) -> Self {
        let bearing = Bearing::between(from, to);
        Self {
            from,
            to,
            direction: bearing.label().to_string(),
            distance: bearing.distance,
            manhattan: manhattan_distance((from.x, from.z), (to.x, to.z)),
        }
    }

    fn text_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Direction from {} to {}: {}, Distance: {}",
                self.from, self.to, self.direction, self.distance
            ),
            format!("Manhattan (block) distance: {}", self.manhattan),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NearestReport {
    pub block: BlockPos,
    pub radius: u32,
    pub nearest: Option<NearestSlimeChunk>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NearestSlimeChunk {
    pub chunk: ChunkPos,
    pub center: BlockPos,
    pub direction: String,
    pub distance: i64,
}

impl NearestReport {
    pub fn search(block: BlockPos, radius: u32) -> Self {
        let nearest = nearest_slime_chunk(block.chunk(), radius).map(|chunk| {
            let center = chunk.center();
            let bearing = Bearing::between(block, center);
            NearestSlimeChunk {
                chunk,
                center,
                direction: bearing.label().to_string(),
                distance: bearing.distance,
            }
        });
        Self {
            block,
            radius,
            nearest,
        }
    }

    fn text_lines(&self) -> Vec<String> {
        match &self.nearest {
            Some(found) => {
                let heading = if found.center == self.block {
                    format!("You are standing on its center {}", found.center)
                } else {
                    format!(
                        "Its center {} is {}, {} blocks away",
                        found.center, found.direction, found.distance
                    )
                };
                vec![
                    format!(
                        "Nearest slime chunk to block {} is chunk {}",
                        self.block, found.chunk
                    ),
                    heading,
                ]
            }
            None => vec![format!(
                "No slime chunk within {} chunks of block {}",
                self.radius, self.block
            )],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlimeMap {
    pub region: ChunkRegion,
    pub slime_chunks: Vec<ChunkPos>,
}

impl SlimeMap {
    pub fn scan(region: ChunkRegion) -> Self {
        Self {
            region,
            slime_chunks: slime_chunks_in(&region),
        }
    }

    /// Header and legend, then one line per chunk row in ascending z.
    pub fn render(&self, slime_glyph: char, empty_glyph: char) -> Vec<String> {
        let slime: BTreeSet<ChunkPos> = self.slime_chunks.iter().copied().collect();
        let (min, max) = (self.region.min(), self.region.max());
        let mut lines = Vec::with_capacity(self.region.depth() as usize + 2);
        lines.push(format!(
            "Slime chunks in {}: {} of {}",
            self.region,
            self.slime_chunks.len(),
            self.region.width() * self.region.depth()
        ));
        lines.push(format!(
            "Legend: {slime_glyph} = slime chunk, {empty_glyph} = other; rows run z {} to {}",
            min.z, max.z
        ));
        for z in min.z..=max.z {
            let row: String = (min.x..=max.x)
                .map(|x| {
                    if slime.contains(&ChunkPos::new(x, z)) {
                        slime_glyph
                    } else {
                        empty_glyph
                    }
                })
                .collect();
            lines.push(row);
        }
        lines
    }
}

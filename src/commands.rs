use slimecalc_core::{BlockPos, ChunkPos, ChunkRegion, DimensionId};
use thiserror::Error;
use tracing::debug;

use crate::config::AppConfig;
use crate::report::{
    BearingReport, ChunkReport, ConversionReport, NearestReport, Report, SlimeMap, SlimeReport,
};

/// Largest region `/map` will scan.
pub const MAX_MAP_CHUNKS: u64 = 1 << 20;
/// Largest chunk radius `/nearest` will search.
pub const MAX_NEAREST_RADIUS: u32 = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: /{0} (try /help)")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("Invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },
    #[error("Map region too large: {chunks} chunks (limit {limit})")]
    RegionTooLarge { chunks: u64, limit: u64 },
    #[error("Search radius too large: {radius} chunks (limit {limit})")]
    RadiusTooLarge { radius: u32, limit: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    Chunk {
        block: BlockPos,
    },
    SlimeAtBlock {
        block: BlockPos,
    },
    SlimeChunk {
        chunk: ChunkPos,
    },
    Convert {
        from: DimensionId,
        to: DimensionId,
        pos: BlockPos,
    },
    Direction {
        from: BlockPos,
        to: BlockPos,
    },
    Nearest {
        block: BlockPos,
        radius: Option<u32>,
    },
    Map {
        region: Option<ChunkRegion>,
    },
}

pub fn execute_command(cmd: &SlashCommand, config: &AppConfig) -> Result<Report, CommandError> {
    debug!(?cmd, "executing command");
    let report = match *cmd {
        SlashCommand::Help => Report::Help {
            lines: help_lines(),
        },
        SlashCommand::Chunk { block } => Report::Chunk(ChunkReport::for_block(block)),
        SlashCommand::SlimeAtBlock { block } => Report::Slime(SlimeReport::for_block(block)),
        SlashCommand::SlimeChunk { chunk } => Report::Slime(SlimeReport::for_chunk(chunk)),
        SlashCommand::Convert { from, to, pos } => {
            Report::Conversion(ConversionReport::new(from, to, pos))
        }
        SlashCommand::Direction { from, to } => Report::Bearing(BearingReport::between(from, to)),
        SlashCommand::Nearest { block, radius } => {
            let radius = radius.unwrap_or(config.nearest_radius);
            if radius > MAX_NEAREST_RADIUS {
                return Err(CommandError::RadiusTooLarge {
                    radius,
                    limit: MAX_NEAREST_RADIUS,
                });
            }
            Report::Nearest(NearestReport::search(block, radius))
        }
        SlashCommand::Map { region } => {
            let region = region
                .unwrap_or_else(|| ChunkRegion::around(ChunkPos::new(0, 0), config.map_radius));
            let chunks = region.width().saturating_mul(region.depth());
            if chunks > MAX_MAP_CHUNKS {
                return Err(CommandError::RegionTooLarge {
                    chunks,
                    limit: MAX_MAP_CHUNKS,
                });
            }
            Report::Map(SlimeMap::scan(region))
        }
    };
    Ok(report)
}

pub fn parse_command(input: &str) -> Result<SlashCommand, CommandError> {
    let input = input.trim();
    let input = input.strip_prefix('/').unwrap_or(input).trim();
    if input.is_empty() {
        return Ok(SlashCommand::Help);
    }

    let mut parts = input.split_whitespace();
    let cmd = parts
        .next()
        .ok_or(CommandError::Usage("/help"))?
        .to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    match cmd.as_str() {
        "help" | "?" => Ok(SlashCommand::Help),
        "chunk" => {
            let [x, z] = coords(&args, "/chunk <x> <z>")?;
            Ok(SlashCommand::Chunk {
                block: BlockPos::new(x, z),
            })
        }
        "slime" => {
            let [x, z] = coords(&args, "/slime <x> <z>")?;
            Ok(SlashCommand::SlimeAtBlock {
                block: BlockPos::new(x, z),
            })
        }
        "slimechunk" => {
            let [x, z] = coords(&args, "/slimechunk <chunk_x> <chunk_z>")?;
            Ok(SlashCommand::SlimeChunk {
                chunk: ChunkPos::new(x, z),
            })
        }
        "nether" => {
            let [x, z] = coords(&args, "/nether <x> <z>")?;
            Ok(SlashCommand::Convert {
                from: DimensionId::Overworld,
                to: DimensionId::Nether,
                pos: BlockPos::new(x, z),
            })
        }
        "overworld" => {
            let [x, z] = coords(&args, "/overworld <x> <z>")?;
            Ok(SlashCommand::Convert {
                from: DimensionId::Nether,
                to: DimensionId::Overworld,
                pos: BlockPos::new(x, z),
            })
        }
        "convert" => parse_convert(&args),
        "direction" | "distance" => {
            let [x1, z1, x2, z2] = coords(&args, "/direction <x1> <z1> <x2> <z2>")?;
            Ok(SlashCommand::Direction {
                from: BlockPos::new(x1, z1),
                to: BlockPos::new(x2, z2),
            })
        }
        "nearest" => {
            const USAGE: &str = "/nearest <x> <z> [radius]";
            let (pos, rest) = match args.len() {
                2 => (&args[..2], None),
                3 => (&args[..2], Some(args[2])),
                _ => return Err(CommandError::Usage(USAGE)),
            };
            let [x, z] = coords(pos, USAGE)?;
            let radius = rest
                .map(|value| {
                    value.parse::<u32>().map_err(|_| CommandError::InvalidArgument {
                        what: "radius",
                        value: value.to_string(),
                    })
                })
                .transpose()?;
            Ok(SlashCommand::Nearest {
                block: BlockPos::new(x, z),
                radius,
            })
        }
        "map" => {
            if args.is_empty() {
                return Ok(SlashCommand::Map { region: None });
            }
            let [x1, z1, x2, z2] = coords(&args, "/map [<x1> <z1> <x2> <z2>]")?;
            Ok(SlashCommand::Map {
                region: Some(ChunkRegion::new(
                    ChunkPos::new(x1, z1),
                    ChunkPos::new(x2, z2),
                )),
            })
        }
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_convert(args: &[&str]) -> Result<SlashCommand, CommandError> {
    const USAGE: &str = "/convert <from> <to> <x> <z>";
    if args.len() != 4 {
        return Err(CommandError::Usage(USAGE));
    }
    let dimension = |value: &str| {
        value
            .parse::<DimensionId>()
            .map_err(|_| CommandError::InvalidArgument {
                what: "dimension",
                value: value.to_string(),
            })
    };
    let from = dimension(args[0])?;
    let to = dimension(args[1])?;
    let [x, z] = coords(&args[2..], USAGE)?;
    Ok(SlashCommand::Convert {
        from,
        to,
        pos: BlockPos::new(x, z),
    })
}

fn coords<const N: usize>(args: &[&str], usage: &'static str) -> Result<[i32; N], CommandError> {
    if args.len() != N {
        return Err(CommandError::Usage(usage));
    }
    let mut out = [0i32; N];
    for (slot, raw) in out.iter_mut().zip(args) {
        *slot = parse_coord(raw)?;
    }
    Ok(out)
}

fn parse_coord(raw: &str) -> Result<i32, CommandError> {
    // Tolerate the "x," separators people paste from the F3 screen.
    let trimmed = raw.trim().trim_end_matches(',');
    trimmed
        .parse::<i32>()
        .map_err(|_| CommandError::InvalidCoordinate(raw.to_string()))
}

pub fn help_lines() -> Vec<String> {
    [
        "Commands:",
        "  /chunk <x> <z>                  chunk, center and corners for a block",
        "  /slime <x> <z>                  is the block's chunk a slime chunk?",
        "  /slimechunk <cx> <cz>           is this chunk a slime chunk?",
        "  /nether <x> <z>                 Overworld -> Nether coordinates",
        "  /overworld <x> <z>              Nether -> Overworld coordinates",
        "  /convert <from> <to> <x> <z>    convert between overworld, nether and end",
        "  /direction <x1> <z1> <x2> <z2>  bearing and distances between two blocks",
        "  /nearest <x> <z> [radius]       closest slime chunk to a block",
        "  /map [<x1> <z1> <x2> <z2>]      ASCII slime chunk map of a chunk region",
        "  /help                           this list",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

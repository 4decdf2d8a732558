#![warn(missing_docs)]
//! Chunk geometry, dimension scaling, compass bearings and slime chunk
//! detection for block-grid worlds.
//!
//! Everything here is a pure function of its integer inputs. The slime chunk
//! predicate reproduces the reference MT19937 stream bit for bit.

mod chunk;
mod compass;
mod dimension;
mod error;
mod mt;
mod slime;

pub use chunk::*;
pub use compass::*;
pub use dimension::*;
pub use error::ParseError;
pub use mt::{MersenneTwister, MT_STATE_WORDS};
pub use slime::*;

use std::num::ParseIntError;

use thiserror::Error;

/// Errors emitted while parsing textual coordinates and regions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong number of comma-separated components.
    #[error("expected {expected} comma-separated integers, found {found}")]
    ComponentCount {
        /// Components the format requires.
        expected: usize,
        /// Components actually present.
        found: usize,
    },
    /// A component was not a valid 32-bit integer.
    #[error("invalid coordinate {value:?}: {source}")]
    InvalidInteger {
        /// The offending component, trimmed.
        value: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// Unknown dimension name.
    #[error("unknown dimension {0:?} (expected overworld, nether or end)")]
    UnknownDimension(String),
}

/// Parse exactly `N` comma-separated `i32` values.
pub(crate) fn parse_components<const N: usize>(input: &str) -> Result<[i32; N], ParseError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ParseError::ComponentCount {
            expected: N,
            found: parts.len(),
        });
    }

    let mut out = [0i32; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part.parse().map_err(|source| ParseError::InvalidInteger {
            value: part.to_string(),
            source,
        })?;
    }
    Ok(out)
}

//! The binary alphabet shared by the symbol source and the transducer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// Value returned by [`SymbolSource::next_symbol`](crate::SymbolSource::next_symbol)
/// once every real symbol has been read.
pub const END_OF_INPUT: i32 = -1;

/// A single input or output symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];

    /// Index into per-state rule arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> u8 {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl From<Bit> for i32 {
    fn from(bit: Bit) -> i32 {
        i32::from(u8::from(bit))
    }
}

impl TryFrom<u8> for Bit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(format!("{other} is not a binary symbol")),
        }
    }
}

impl TryFrom<i32> for Bit {
    type Error = AgentError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(AgentError::UnknownSymbol(other)),
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            other => Err(other),
        }
    }
}

/// Parses a whole string of '0'/'1' characters, failing on the first other character.
pub fn parse_bits(input: &str) -> Result<Vec<Bit>, AgentError> {
    input
        .chars()
        .enumerate()
        .map(|(position, c)| {
            Bit::try_from(c).map_err(|found| AgentError::InvalidAlphabet { found, position })
        })
        .collect()
}

//! The environment the agent observes: a binary string read one symbol at a time.
//!
//! [`SymbolSource`] only ever exposes the symbol under its cursor. Once the
//! cursor reaches the end it keeps answering [`END_OF_INPUT`] without moving.

use std::fmt;

use tracing::debug;

use crate::error::AgentError;
use crate::symbols::{Bit, END_OF_INPUT, parse_bits};

/// A validated binary sequence plus a read cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSource {
    bits: Vec<Bit>,
    cursor: usize,
}

impl SymbolSource {
    /// Fails with [`AgentError::InvalidAlphabet`] unless `input` is made only of '0' and '1'.
    pub fn new(input: &str) -> Result<Self, AgentError> {
        Ok(Self {
            bits: parse_bits(input)?,
            cursor: 0,
        })
    }

    /// Swaps in a new sequence and rewinds the cursor.
    ///
    /// Validation happens before anything is touched, so a rejected input
    /// leaves both the old sequence and the old cursor in place.
    pub fn replace(&mut self, input: &str) -> Result<(), AgentError> {
        let bits = parse_bits(input)?;
        debug!(len = bits.len(), "replacing symbol source");
        self.bits = bits;
        self.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Reads the symbol under the cursor as 0 or 1 and advances, or returns
    /// [`END_OF_INPUT`] forever once the sequence is exhausted.
    pub fn next_symbol(&mut self) -> i32 {
        match self.bits.get(self.cursor) {
            Some(&bit) => {
                self.cursor += 1;
                i32::from(bit)
            }
            None => END_OF_INPUT,
        }
    }

    /// Iterates the remaining symbols through the same cursor.
    pub fn bits(&mut self) -> Bits<'_> {
        Bits { source: self }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Offset of the next symbol to be read.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.bits.len()
    }
}

impl fmt::Display for SymbolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bits.iter().try_for_each(|bit| write!(f, "{bit}"))
    }
}

/// Borrowing iterator returned by [`SymbolSource::bits`]; yields `None` at exhaustion.
pub struct Bits<'a> {
    source: &'a mut SymbolSource,
}

impl Iterator for Bits<'_> {
    type Item = Bit;

    fn next(&mut self) -> Option<Bit> {
        let bit = self.source.bits.get(self.source.cursor).copied()?;
        self.source.cursor += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.source.bits.len() - self.source.cursor;
        (remaining, Some(remaining))
    }
}

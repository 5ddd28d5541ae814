use tracing::trace;

use super::table::TransitionTable;
use crate::error::{AgentError, TableError};
use crate::symbols::{Bit, END_OF_INPUT, parse_bits};

/// The model-based agent: a transition table, a current state, and
/// everything written so far.
///
/// There is no terminal state. The machine keeps going for as long as the
/// caller feeds it symbols.
#[derive(Debug, Clone)]
pub struct Transducer {
    table: TransitionTable,
    start: String,
    current: String,
    output: String,
}

impl Transducer {
    /// Fails with [`TableError::MissingStartState`] if `start` is not a state of `table`.
    pub fn new(table: TransitionTable, start: impl Into<String>) -> Result<Self, AgentError> {
        let start = start.into();
        if !table.contains(&start) {
            return Err(TableError::MissingStartState(start).into());
        }
        Ok(Self {
            table,
            current: start.clone(),
            start,
            output: String::new(),
        })
    }

    pub fn reset(&mut self) {
        self.current.clone_from(&self.start);
        self.output.clear();
    }

    /// Consumes one symbol and returns the symbol written.
    ///
    /// - [`END_OF_INPUT`] is a no-op and returns `None`.
    /// - `0` and `1` follow the table, append the written symbol, and move
    ///   to the next state.
    /// - Anything else fails with [`AgentError::UnknownSymbol`] and leaves the
    ///   machine exactly as it was.
    pub fn step(&mut self, symbol: i32) -> Result<Option<Bit>, AgentError> {
        if symbol == END_OF_INPUT {
            return Ok(None);
        }
        let read = Bit::try_from(symbol)?;
        self.feed(read).map(Some)
    }

    /// Applies the transition for `read` from the current state.
    pub fn feed(&mut self, read: Bit) -> Result<Bit, AgentError> {
        let rule = self.table.rule(&self.current, read).ok_or_else(|| {
            AgentError::MalformedTable(TableError::UndefinedState(self.current.clone()))
        })?;
        trace!(from = %self.current, %read, to = %rule.next, write = %rule.write, "transition");

        let write = rule.write;
        self.output.push_str(&write.to_string());
        self.current.clone_from(&rule.next);
        Ok(write)
    }

    /// Resets, then feeds every symbol of `input`; returns the full output.
    ///
    /// The input is validated before the reset, so a bad input changes nothing.
    pub fn transduce(&mut self, input: &str) -> Result<String, AgentError> {
        let bits = parse_bits(input)?;
        self.reset();
        for bit in bits {
            self.feed(bit)?;
        }
        Ok(self.output.clone())
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn current_state(&self) -> &str {
        &self.current
    }

    pub fn start_state(&self) -> &str {
        &self.start
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }
}

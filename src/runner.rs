//! Drives a [`Transducer`] over a whole [`SymbolSource`] and records snapshots.
//!
//! [`drive`] is the contract the visualizer relies on: reset both sides,
//! record the starting frame, then one frame per symbol read, and finally one
//! frame after the end-of-input sentinel has been fed to the engine.
//! [`Playback`] steps back and forth through the recorded frames.

use serde::Serialize;
use tracing::{debug, info};

use crate::environment::SymbolSource;
use crate::error::AgentError;
use crate::state_machine::Transducer;
use crate::symbols::{Bit, END_OF_INPUT};

/// What the agent saw just before a snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Observation {
    /// Nothing read yet.
    Start,
    Bit(Bit),
    EndOfInput,
}

/// Engine state and output after processing one observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub index: usize,
    pub observed: Observation,
    pub state: String,
    pub output: String,
}

/// Every snapshot of one run, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub input: String,
    pub snapshots: Vec<Snapshot>,
}

impl Trace {
    /// Output after the last snapshot.
    pub fn output(&self) -> &str {
        self.snapshots.last().map_or("", |s| s.output.as_str())
    }

    pub fn final_state(&self) -> Option<&str> {
        self.snapshots.last().map(|s| s.state.as_str())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// Resets both sides and drains `source` into `agent`.
///
/// For an input of length n the trace holds n + 2 snapshots: the start, one
/// per symbol, and a settled frame after the sentinel step.
pub fn drive(source: &mut SymbolSource, agent: &mut Transducer) -> Result<Trace, AgentError> {
    source.reset();
    agent.reset();

    let mut snapshots = Vec::with_capacity(source.len() + 2);
    snapshots.push(snapshot(0, Observation::Start, agent));

    loop {
        let symbol = source.next_symbol();
        agent.step(symbol)?;
        let observed = if symbol == END_OF_INPUT {
            Observation::EndOfInput
        } else {
            Observation::Bit(Bit::try_from(symbol)?)
        };
        debug!(symbol, state = agent.current_state(), output = agent.output(), "step");
        snapshots.push(snapshot(snapshots.len(), observed, agent));
        if symbol == END_OF_INPUT {
            break;
        }
    }

    info!(
        frames = snapshots.len(),
        output = agent.output(),
        "run complete"
    );
    Ok(Trace {
        input: source.to_string(),
        snapshots,
    })
}

fn snapshot(index: usize, observed: Observation, agent: &Transducer) -> Snapshot {
    Snapshot {
        index,
        observed,
        state: agent.current_state().to_string(),
        output: agent.output().to_string(),
    }
}

/// Frame cursor over a [`Trace`], bounded at both ends.
#[derive(Debug, Clone)]
pub struct Playback {
    trace: Trace,
    frame: usize,
}

impl Playback {
    pub fn new(trace: Trace) -> Self {
        Self { trace, frame: 0 }
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.trace.snapshots.get(self.frame)
    }

    pub fn position(&self) -> usize {
        self.frame
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn can_advance(&self) -> bool {
        self.frame + 1 < self.trace.len()
    }

    pub fn can_rewind(&self) -> bool {
        self.frame > 0
    }

    /// Moves to the next frame; returns false at the last one.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.frame += 1;
        true
    }

    /// Moves to the previous frame; returns false at the first one.
    pub fn rewind(&mut self) -> bool {
        if !self.can_rewind() {
            return false;
        }
        self.frame -= 1;
        true
    }
}

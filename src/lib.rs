//! A model-based agent that scans a binary string one symbol at a time.
//!
//! The agent is a finite-state transducer: a [`TransitionTable`] maps each
//! (state, symbol read) pair to a next state and a symbol to write. A
//! [`SymbolSource`] feeds it symbols until the input runs out, and
//! [`runner::drive`] records a [`Snapshot`] after every step.
//!
//! ```
//! use bitagent::{AgentConfig, SymbolSource, runner};
//!
//! let mut agent = AgentConfig::default().build()?;
//! let mut source = SymbolSource::new("1001001")?;
//! let trace = runner::drive(&mut source, &mut agent)?;
//! assert_eq!(trace.output(), "0001001");
//! # Ok::<(), bitagent::AgentError>(())
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
pub mod runner;
pub mod state_machine;
pub mod symbols;
pub mod ui;

pub use config::AgentConfig;
pub use environment::SymbolSource;
pub use error::{AgentError, TableError};
pub use runner::{Observation, Playback, Snapshot, Trace};
pub use state_machine::{Edge, RawTable, Transducer, TransitionTable};
pub use symbols::{Bit, END_OF_INPUT};

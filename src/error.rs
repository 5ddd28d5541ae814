use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Invalid input: {found:?} at position {position} is not a 0 or 1")]
    InvalidAlphabet { found: char, position: usize },

    #[error("Malformed transition table: {0}")]
    MalformedTable(#[from] TableError),

    #[error("Unknown symbol {0}: expected -1, 0 or 1")]
    UnknownSymbol(i32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Well-formedness violations found while validating a transition table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table has no states")]
    Empty,

    #[error("start state {0:?} is not defined")]
    MissingStartState(String),

    /// The engine's current state has no row in its table. Tables are
    /// validated on construction, so this only guards the lookup invariant.
    #[error("state {0:?} is not defined")]
    UndefinedState(String),

    #[error("state {state:?} has an entry for {key:?}, which is not a 0 or 1")]
    InvalidSymbolKey { state: String, key: String },

    #[error("state {state:?} has no transition for symbol {symbol}")]
    MissingTransition { state: String, symbol: u8 },

    #[error("state {state:?} writes {write} on symbol {symbol}, expected 0 or 1")]
    InvalidWriteSymbol { state: String, symbol: u8, write: u8 },

    #[error("state {from:?} moves to undefined state {to:?} on symbol {symbol}")]
    DanglingState { from: String, symbol: u8, to: String },
}

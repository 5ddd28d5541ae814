//! Agent configuration loaded from `bitagent.toml`.
//!
//! [`AgentConfig`] holds the transition table and the start state. Anything
//! missing from the file falls back to the "detect 1001" automaton.
//! The `BITAGENT_CONFIG` environment variable points at another file and
//! takes precedence over `bitagent.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AgentError;
use crate::state_machine::{RawTable, RuleSpec, Transducer, TransitionTable};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "bitagent.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "BITAGENT_CONFIG";

/// Rows of `(state, [(next on 0, write), (next on 1, write)])`.
pub type TableRows<'a> = &'a [(&'a str, [(&'a str, u8); 2])];

/// Detects the substring "1001" ending at the current position.
///
/// Reading a 1 always leads to B. Only the 1 read in D writes a 1, since D
/// is reached only right after "100".
pub const DETECT_1001: TableRows<'static> = &[
    ("A", [("A", 0), ("B", 0)]),
    ("B", [("C", 0), ("B", 0)]),
    ("C", [("D", 0), ("B", 0)]),
    ("D", [("A", 0), ("B", 1)]),
];

/// Builds a raw table from constant rows.
pub fn table_from_rows(rows: TableRows<'_>) -> RawTable {
    rows.iter()
        .map(|(state, rules)| {
            let entries = rules
                .iter()
                .enumerate()
                .map(|(symbol, (next, write))| {
                    (
                        symbol.to_string(),
                        RuleSpec {
                            next: next.to_string(),
                            write: *write,
                        },
                    )
                })
                .collect();
            (state.to_string(), entries)
        })
        .collect()
}

pub fn detect_1001() -> RawTable {
    table_from_rows(DETECT_1001)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// State the agent starts (and resets) in.
    #[serde(default = "default_start")]
    pub start: String,

    /// Transition table keyed by state, then by symbol read ("0" or "1").
    #[serde(default = "detect_1001")]
    pub states: RawTable,
}

fn default_start() -> String {
    "A".to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            states: detect_1001(),
        }
    }
}

impl AgentConfig {
    /// Loads `$BITAGENT_CONFIG` if set, else `bitagent.toml` in the current
    /// directory, else the defaults.
    pub fn load() -> Result<Self, AgentError> {
        if let Ok(path) = std::env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Self::load_from(path);
        }

        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            debug!("no {CONFIG_FILE} found, using built-in table");
            Ok(Self::default())
        }
    }

    /// Reads a config file, as JSON when the extension is `.json` and as TOML otherwise.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, AgentError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading agent config");
        if is_json(path) {
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(toml::from_str(&contents)?)
        }
    }

    /// Validates the table and builds a transducer in the configured start state.
    pub fn build(&self) -> Result<Transducer, AgentError> {
        let table = TransitionTable::from_raw(&self.states)?;
        Transducer::new(table, self.start.clone())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::symbols::Bit;

/// A transition as written in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub next: String,
    pub write: u8,
}

/// Unvalidated table shape: `state -> {"0" | "1" -> rule}`.
///
/// Symbol keys are strings because TOML and JSON object keys are.
pub type RawTable = BTreeMap<String, BTreeMap<String, RuleSpec>>;

/// Where to go and what to write after reading one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub next: String,
    pub write: Bit,
}

/// One labeled arrow of the state diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge<'a> {
    pub from: &'a str,
    pub read: Bit,
    pub to: &'a str,
    pub write: Bit,
}

impl fmt::Display for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --{}? write {}--> {}",
            self.from, self.read, self.write, self.to
        )
    }
}

/// A total transition function over the binary alphabet.
///
/// Every state has a rule for both symbols and every rule points at a
/// defined state. The table cannot be modified once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionTable {
    states: BTreeMap<String, [Rule; 2]>,
}

impl TransitionTable {
    /// Validates a raw table.
    ///
    /// Checks run in a fixed order so the reported error is deterministic:
    /// emptiness, then per state (sorted) its symbol keys, coverage of 0 and 1,
    /// and write symbols; dangling next states are checked last.
    pub fn from_raw(raw: &RawTable) -> Result<Self, TableError> {
        if raw.is_empty() {
            return Err(TableError::Empty);
        }

        let mut states = BTreeMap::new();
        for (state, rules) in raw {
            if let Some(key) = rules.keys().find(|k| !matches!(k.as_str(), "0" | "1")) {
                return Err(TableError::InvalidSymbolKey {
                    state: state.clone(),
                    key: key.clone(),
                });
            }
            let zero = Self::rule_for(state, rules, Bit::Zero)?;
            let one = Self::rule_for(state, rules, Bit::One)?;
            states.insert(state.clone(), [zero, one]);
        }

        for (from, rules) in &states {
            for (rule, read) in rules.iter().zip(Bit::ALL) {
                if !states.contains_key(&rule.next) {
                    return Err(TableError::DanglingState {
                        from: from.clone(),
                        symbol: read.into(),
                        to: rule.next.clone(),
                    });
                }
            }
        }

        Ok(Self { states })
    }

    fn rule_for(
        state: &str,
        rules: &BTreeMap<String, RuleSpec>,
        read: Bit,
    ) -> Result<Rule, TableError> {
        let symbol = u8::from(read);
        let spec = rules
            .get(&read.to_string())
            .ok_or_else(|| TableError::MissingTransition {
                state: state.to_string(),
                symbol,
            })?;
        let write = Bit::try_from(spec.write).map_err(|_| TableError::InvalidWriteSymbol {
            state: state.to_string(),
            symbol,
            write: spec.write,
        })?;
        Ok(Rule {
            next: spec.next.clone(),
            write,
        })
    }

    pub fn rule(&self, state: &str, read: Bit) -> Option<&Rule> {
        self.states.get(state).map(|rules| &rules[read.index()])
    }

    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// State names in sorted order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Every transition, grouped by source state and ordered by symbol read.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.states.iter().flat_map(|(from, rules)| {
            rules.iter().zip(Bit::ALL).map(move |(rule, read)| Edge {
                from,
                read,
                to: &rule.next,
                write: rule.write,
            })
        })
    }

    /// Converts back into the configuration shape.
    pub fn to_raw(&self) -> RawTable {
        self.states
            .iter()
            .map(|(state, rules)| {
                let entries = rules
                    .iter()
                    .zip(Bit::ALL)
                    .map(|(rule, read)| {
                        (
                            read.to_string(),
                            RuleSpec {
                                next: rule.next.clone(),
                                write: rule.write.into(),
                            },
                        )
                    })
                    .collect();
                (state.clone(), entries)
            })
            .collect()
    }
}

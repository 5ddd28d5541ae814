//! Property-based tests for the symbol source and the transducer.
//!
//! These run the detect-1001 agent and randomly generated total tables over
//! random binary strings.

use bitagent::config::{detect_1001, table_from_rows};
use bitagent::{END_OF_INPUT, SymbolSource, Transducer, TransitionTable, runner};
use proptest::prelude::*;

const STATE_NAMES: [&str; 4] = ["q0", "q1", "q2", "q3"];

fn detector() -> Transducer {
    let table = TransitionTable::from_raw(&detect_1001()).unwrap();
    Transducer::new(table, "A").unwrap()
}

prop_compose! {
    fn binary_string()(bits in prop::collection::vec(any::<bool>(), 0..64)) -> String {
        bits.into_iter().map(|b| if b { '1' } else { '0' }).collect()
    }
}

prop_compose! {
    // A total table over 1..=4 states with arbitrary targets and writes.
    fn arbitrary_agent()(size in 1usize..=4)(
        targets in prop::collection::vec((0..size, 0u8..2, 0..size, 0u8..2), size),
        start in 0..size,
    ) -> Transducer {
        let rows: Vec<(&str, [(&str, u8); 2])> = targets
            .iter()
            .enumerate()
            .map(|(i, &(t0, w0, t1, w1))| {
                (STATE_NAMES[i], [(STATE_NAMES[t0], w0), (STATE_NAMES[t1], w1)])
            })
            .collect();
        let table = TransitionTable::from_raw(&table_from_rows(&rows)).unwrap();
        Transducer::new(table, STATE_NAMES[start]).unwrap()
    }
}

// Reference: a match ends at i exactly when input[i-3..=i] == "1001".
fn naive_detect(input: &str) -> String {
    (0..input.len())
        .map(|i| {
            if i >= 3 && &input[i - 3..=i] == "1001" {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn output_length_matches_input(input in binary_string(), mut agent in arbitrary_agent()) {
        let mut source = SymbolSource::new(&input).unwrap();
        let trace = runner::drive(&mut source, &mut agent).unwrap();
        prop_assert_eq!(trace.output().len(), input.len());
        prop_assert_eq!(trace.len(), input.len() + 2);
    }

    #[test]
    fn reruns_are_idempotent(input in binary_string(), mut agent in arbitrary_agent()) {
        let mut source = SymbolSource::new(&input).unwrap();
        let first = runner::drive(&mut source, &mut agent).unwrap();
        let second = runner::drive(&mut source, &mut agent).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn detector_agrees_with_substring_search(input in binary_string()) {
        let mut agent = detector();
        prop_assert_eq!(agent.transduce(&input).unwrap(), naive_detect(&input));
    }

    #[test]
    fn sentinel_is_idempotent(input in binary_string(), extra in 1usize..20) {
        let mut source = SymbolSource::new(&input).unwrap();
        let mut agent = detector();
        loop {
            let symbol = source.next_symbol();
            if symbol == END_OF_INPUT {
                break;
            }
            agent.step(symbol).unwrap();
        }
        let state = agent.current_state().to_string();
        let output = agent.output().to_string();

        for _ in 0..extra {
            prop_assert_eq!(source.next_symbol(), END_OF_INPUT);
            prop_assert_eq!(agent.step(END_OF_INPUT).unwrap(), None);
        }
        prop_assert_eq!(agent.current_state(), state.as_str());
        prop_assert_eq!(agent.output(), output.as_str());
    }

    #[test]
    fn replacing_source_does_not_touch_engine(
        first in binary_string(),
        second in binary_string(),
        cut in 0usize..64,
    ) {
        let mut source = SymbolSource::new(&first).unwrap();
        let mut agent = detector();
        for _ in 0..cut.min(first.len()) {
            agent.step(source.next_symbol()).unwrap();
        }
        let state = agent.current_state().to_string();
        let output = agent.output().to_string();

        source.replace(&second).unwrap();
        prop_assert_eq!(source.position(), 0);
        prop_assert_eq!(agent.current_state(), state.as_str());
        prop_assert_eq!(agent.output(), output.as_str());

        agent.reset();
        prop_assert_eq!(agent.current_state(), "A");
        prop_assert_eq!(agent.output(), "");
    }

    #[test]
    fn non_binary_input_is_rejected(
        prefix in binary_string(),
        bad in any::<char>().prop_filter("non-binary", |c| *c != '0' && *c != '1'),
        suffix in binary_string(),
    ) {
        let input = format!("{prefix}{bad}{suffix}");
        prop_assert!(SymbolSource::new(&input).is_err());

        let mut source = SymbolSource::new(&prefix).unwrap();
        prop_assert!(source.replace(&input).is_err());
        prop_assert_eq!(source.to_string(), prefix);
    }
}

#[test]
fn worked_examples() {
    let mut agent = detector();
    for (input, expected) in [
        ("1001", "0001"),
        ("0000", "0000"),
        ("", ""),
        ("1001001", "0001001"),
    ] {
        let mut source = SymbolSource::new(input).unwrap();
        let trace = runner::drive(&mut source, &mut agent).unwrap();
        assert_eq!(trace.output(), expected, "input {input:?}");
    }
}

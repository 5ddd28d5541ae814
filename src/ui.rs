//! Terminal front end for the agent: state diagram, frames and playback.
//!
//! Uses `console` for colored output and key input. [`TraceView`] renders a
//! [`Trace`] frame by frame, highlighting the current state the way the
//! diagram highlights the active node.

use std::io;

use console::{Key, Style, Term};

use crate::runner::{Observation, Playback, Snapshot, Trace};
use crate::state_machine::TransitionTable;
use crate::symbols::END_OF_INPUT;

/// Styles shared by every rendered frame.
pub struct TraceView {
    // Highlight for the current state and the symbol under the cursor.
    highlight: Style,
    // Style for state names that are not current.
    state: Style,
    // Style for arrows and labels.
    arrow: Style,
    // Style for secondary text such as key hints.
    dim: Style,
}

impl Default for TraceView {
    fn default() -> Self {
        Self {
            highlight: Style::new().red().bold(),
            state: Style::new().cyan(),
            arrow: Style::new().blue(),
            dim: Style::new().dim(),
        }
    }
}

impl TraceView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists every state and every labeled transition.
    ///
    /// `current` is highlighted and `start` is marked with `>`.
    pub fn render_graph(&self, table: &TransitionTable, start: &str, current: &str) -> String {
        let mut out = String::new();

        let states: Vec<String> = table
            .states()
            .map(|name| {
                let marker = if name == start { ">" } else { " " };
                let style = if name == current {
                    &self.highlight
                } else {
                    &self.state
                };
                format!("{marker}({})", style.apply_to(name))
            })
            .collect();
        out.push_str(&format!("States: {}\n", states.join(" ")));

        for edge in table.edges() {
            out.push_str(&format!(
                "  {} {} {}\n",
                self.state_label(edge.from, current),
                self.arrow
                    .apply_to(format!("--{}? write {}-->", edge.read, edge.write)),
                self.state_label(edge.to, current),
            ));
        }
        out
    }

    fn state_label(&self, name: &str, current: &str) -> String {
        if name == current {
            self.highlight.apply_to(name).to_string()
        } else {
            self.state.apply_to(name).to_string()
        }
    }

    /// Shows what the agent sees and what it has written at frame `index`.
    ///
    /// The symbol the agent reads next is bracketed; past the end of the
    /// input the brackets close the string.
    pub fn render_frame(&self, trace: &Trace, index: usize) -> Option<String> {
        let snapshot = trace.snapshots.get(index)?;
        Some(format!(
            "Frame {index}/{last} ({observed})\nWhat the agent sees: {sees}\nWhat the agent has written: {written}\nCurrent state: {state}",
            last = trace.len().saturating_sub(1),
            observed = describe(snapshot),
            sees = self.cursor_view(&trace.input, index),
            written = snapshot.output,
            state = self.highlight.apply_to(&snapshot.state),
        ))
    }

    fn cursor_view(&self, input: &str, index: usize) -> String {
        let mut chars = input.chars();
        let seen: String = chars.by_ref().take(index).collect();
        let under = chars.next().map(String::from).unwrap_or_default();
        format!(
            "{seen}[{}]{}",
            self.highlight.apply_to(under),
            chars.as_str()
        )
    }

    /// Steps through `playback` interactively until the user quits.
    ///
    /// `n`/Right advances, `p`/Left rewinds, `q`/Esc quits.
    pub fn interact(
        &self,
        term: &Term,
        mut playback: Playback,
        table: &TransitionTable,
        start: &str,
    ) -> io::Result<()> {
        loop {
            term.clear_screen()?;
            if let Some(snapshot) = playback.current() {
                term.write_line(&self.render_graph(table, start, &snapshot.state))?;
            }
            if let Some(frame) = self.render_frame(playback.trace(), playback.position()) {
                term.write_line(&frame)?;
            }
            term.write_line(&self.dim.apply_to(self.key_hints(&playback)).to_string())?;

            match term.read_key()? {
                Key::Char('n') | Key::ArrowRight | Key::Enter => {
                    playback.advance();
                }
                Key::Char('p') | Key::ArrowLeft => {
                    playback.rewind();
                }
                Key::Char('q') | Key::Escape => return Ok(()),
                _ => {}
            }
        }
    }

    fn key_hints(&self, playback: &Playback) -> String {
        let mut hints = Vec::new();
        if playback.can_rewind() {
            hints.push("[p] prev");
        }
        if playback.can_advance() {
            hints.push("[n] next");
        }
        hints.push("[q] quit");
        hints.join("  ")
    }
}

/// Plain transcript of a run: each symbol read followed by the output so far,
/// with the sentinel shown as `-1`, then the final output.
pub fn render_run(trace: &Trace) -> String {
    let mut out = String::new();
    for snapshot in &trace.snapshots {
        let read = match snapshot.observed {
            Observation::Start => continue,
            Observation::Bit(bit) => bit.to_string(),
            Observation::EndOfInput => END_OF_INPUT.to_string(),
        };
        out.push_str(&format!("{read}\n{}\n", snapshot.output));
    }
    out.push_str(&format!("Output: {}\n", trace.output()));
    out
}

fn describe(snapshot: &Snapshot) -> String {
    match snapshot.observed {
        Observation::Start => "start".to_string(),
        Observation::Bit(bit) => format!("read {bit}"),
        Observation::EndOfInput => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::environment::SymbolSource;
    use crate::runner::drive;

    fn trace_for(input: &str) -> (Trace, TransitionTable) {
        let mut agent = AgentConfig::default().build().unwrap();
        let mut source = SymbolSource::new(input).unwrap();
        let trace = drive(&mut source, &mut agent).unwrap();
        (trace, agent.table().clone())
    }

    #[test]
    fn graph_lists_states_and_edges() {
        let (_, table) = trace_for("");
        let view = TraceView::new();
        let graph = console::strip_ansi_codes(&view.render_graph(&table, "A", "C")).to_string();

        assert!(graph.starts_with("States: >(A)  (B)  (C)  (D)"));
        assert!(graph.contains("A --1? write 0--> B"));
        assert!(graph.contains("D --1? write 1--> B"));
        assert_eq!(graph.lines().count(), 9);
    }

    #[test]
    fn frame_brackets_next_symbol() {
        let (trace, _) = trace_for("1001");
        let view = TraceView::new();

        let first = console::strip_ansi_codes(&view.render_frame(&trace, 0).unwrap()).to_string();
        assert!(first.contains("What the agent sees: [1]001"));
        assert!(first.contains("What the agent has written: \n"));
        assert!(first.contains("Current state: A"));

        let middle = console::strip_ansi_codes(&view.render_frame(&trace, 2).unwrap()).to_string();
        assert!(middle.contains("What the agent sees: 10[0]1"));
        assert!(middle.contains("(read 0)"));
        assert!(middle.contains("What the agent has written: 00"));
    }

    #[test]
    fn frame_past_end_shows_empty_cursor() {
        let (trace, _) = trace_for("10");
        let view = TraceView::new();
        let last = console::strip_ansi_codes(&view.render_frame(&trace, 3).unwrap()).to_string();
        assert!(last.contains("What the agent sees: 10[]"));
        assert!(last.contains("(end of input)"));
        assert!(view.render_frame(&trace, 4).is_none());
    }

    #[test]
    fn frame_handles_multibyte_input() {
        let trace = Trace {
            input: "é1ü".to_string(),
            snapshots: vec![Snapshot {
                index: 0,
                observed: Observation::Start,
                state: "A".into(),
                output: String::new(),
            }],
        };
        let view = TraceView::new();
        let frame = console::strip_ansi_codes(&view.render_frame(&trace, 0).unwrap()).to_string();
        assert!(frame.contains("What the agent sees: [é]1ü"));
        assert_eq!(
            console::strip_ansi_codes(&view.cursor_view(&trace.input, 1)),
            "é[1]ü"
        );
        assert_eq!(
            console::strip_ansi_codes(&view.cursor_view(&trace.input, 7)),
            "é1ü[]"
        );
    }

    #[test]
    fn run_transcript_lists_reads_then_final_output() {
        let (trace, _) = trace_for("1001");
        assert_eq!(
            render_run(&trace),
            "1\n0\n0\n00\n0\n000\n1\n0001\n-1\n0001\nOutput: 0001\n"
        );

        let (empty, _) = trace_for("");
        assert_eq!(render_run(&empty), "-1\n\nOutput: \n");
    }
}

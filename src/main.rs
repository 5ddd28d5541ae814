mod cli;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use bitagent::runner::{self, Playback};
use bitagent::ui::{TraceView, render_run};
use bitagent::{AgentConfig, SymbolSource, logging};
use clap::Parser;
use cli::Cli;
use console::Term;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.table {
        Some(path) => AgentConfig::load_from(path)
            .with_context(|| format!("loading table from {}", path.display()))?,
        None => AgentConfig::load()?,
    };
    if let Some(start) = cli.start.clone() {
        config.start = start;
    }
    let mut agent = config.build()?;

    let term = Term::stdout();
    let view = TraceView::new();
    if cli.graph {
        let start = agent.start_state();
        term.write_line(&view.render_graph(agent.table(), start, start))?;
    }

    let bits = match cli.bits {
        Some(bits) => bits,
        None => prompt(&term)?,
    };
    let mut source = SymbolSource::new(&bits)?;
    let trace = runner::drive(&mut source, &mut agent)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
    } else if cli.step {
        view.interact(&term, Playback::new(trace), agent.table(), agent.start_state())?;
    } else {
        print!("{}", render_run(&trace));
    }
    Ok(())
}

fn prompt(term: &Term) -> Result<String> {
    term.write_str("Enter a string of 1s and 0s: ")?;
    term.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

use std::io::{self, Write};

use outcome_core::{
    config::Config,
    render::{render_json, render_text},
};

mod directory;

use directory::{Directory, Tally};

fn main() -> Result<(), outcome_core::Error> {
    let cfg = Config::load()?;
    outcome_core::logging::init("outcome", &cfg)?;

    let ids: Vec<String> = std::env::args().skip(1).collect();
    if ids.is_empty() {
        eprintln!("usage: outcome <user-id>...");
        return Ok(());
    }

    let directory = Directory::seeded();
    let mut tally = Tally::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for raw in &ids {
        let found = directory.lookup(raw);
        tally.record(&found);
        writeln!(out, "{}", render_text(&found))?;
        writeln!(out, "{}", render_json(&found, &cfg)?)?;
    }

    writeln!(out, "{tally}")?;
    Ok(())
}

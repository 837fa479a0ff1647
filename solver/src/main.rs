use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quarantine::{Containment, NetworkBuilder, Planner, DEFAULT_VIRUS_START};

fn main() -> anyhow::Result<()> {
    // logs go to stderr; stdout carries only the plan
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let start = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_VIRUS_START.to_owned());

    let lines = io::stdin().lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("reading corridors from stdin")?;

    let network = NetworkBuilder::new()
        .add_lines(lines.iter().map(String::as_str))
        .build()
        .context("parsing corridors")?;
    info!(nodes = network.node_count(), corridors = network.corridor_count(), start = start.as_str(), "network built");

    let containment = Planner::from(&network).plan(&start)?;
    match &containment {
        Containment::AlreadyContained => info!("virus is already contained"),
        Containment::Plan(severances) => info!(steps = severances.len(), "containment plan found"),
        Containment::Impossible => info!("no severance sequence contains the virus"),
    }

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", containment)?;
    stdout.flush()?;

    Ok(())
}

#![forbid(unsafe_code)]

//! # jobsets
//!
//! Browse job sets in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p jobsets -- --seed 7
//! cargo run -p jobsets -- --input job-sets.json render --width 120
//! ```

use std::io::{self, IsTerminal};

use anyhow::{Context, bail};
use jobset_table::{JobSet, SelectionIntents, Styles};
use tracing::info;

use jobsets::data::{Generator, load_job_sets};
use jobsets::logging::{self, LogLevel};
use jobsets::{App, Cli, Command, Config, JobSetsContainer, Program, RenderArgs, render_table};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::from_cli(&cli)?;
    logging::init(
        config.log_file.as_deref(),
        LogLevel::from_verbosity(config.verbosity),
    )?;

    if matches!(cli.command, Some(Command::Diagnostics)) {
        println!("{}", config.to_diagnostic_string());
        return Ok(());
    }

    let job_sets = job_sets(&cli, &config)?;
    let container = JobSetsContainer::new(job_sets)
        .with_newest_first(config.newest_first)
        .with_column_weights(config.columns);

    match &cli.command {
        Some(Command::Render(args)) => render(container, &config, args),
        _ => interactive(container, &config),
    }
}

fn job_sets(cli: &Cli, config: &Config) -> anyhow::Result<Vec<JobSet>> {
    if let Some(path) = &config.input {
        return Ok(load_job_sets(path)?);
    }
    let seed = cli.effective_seed();
    info!(seed, count = config.count, "generating job sets");
    Ok(Generator::new(seed).job_sets(config.count))
}

fn render(
    mut container: JobSetsContainer,
    config: &Config,
    args: &RenderArgs,
) -> anyhow::Result<()> {
    for id in &args.select {
        let index = container
            .job_sets()
            .iter()
            .position(|js| &js.job_set_id == id)
            .with_context(|| format!("unknown job set id: {id}"))?;
        container.select_job_set(index, true);
    }

    let rows = container.job_sets().len();
    let height = args
        .height
        .unwrap_or(config.header_height + rows * config.row_height);
    let out = render_table(&container, args.width, height, config.metrics(), Styles::plain());
    println!("{out}");
    Ok(())
}

fn interactive(container: JobSetsContainer, config: &Config) -> anyhow::Result<()> {
    if !io::stdout().is_terminal() {
        bail!("stdout is not a terminal; use `jobsets render` for plain output");
    }

    info!(rows = container.job_sets().len(), "starting");
    let app = Program::new(App::new(container, config)).run()?;

    if config.print_navigation
        && let Some(target) = app.last_navigation()
    {
        println!("{target}");
    }
    Ok(())
}

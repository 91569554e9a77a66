use anyhow::{Context, Result};
use clap::Parser;
use limited_correspondence::input::read_instances;
use limited_correspondence::solve;
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Solves limited-correspondence PCP cases, printing `Case <k>: <result>`.
#[derive(Parser, Debug)]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,
    /// Worker threads for the search (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,
    /// Log filter progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
    }

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let instances = read_instances(reader)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (case, inst) in instances.iter().enumerate() {
        let stime = Instant::now();
        let outcome = solve(inst);
        info!(
            "case {}: {} pairs, {:.3}s",
            case + 1,
            inst.len(),
            stime.elapsed().as_secs_f64()
        );
        writeln!(out, "Case {}: {}", case + 1, outcome)?;
    }
    Ok(())
}

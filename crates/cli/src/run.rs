use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use log::debug;

use polyfuse_core::{Engine, Fusion, Normalization};
use polyfuse_io::{Run, read_run};

use crate::args::Cli;

pub fn run(args: Cli) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[polyfuse] {e}");
            ExitCode::from(1)
        }
    }
}

fn execute(args: Cli) -> Result<ExitCode> {
    let fusion = Fusion::parse(&args.fusion)
        .with_context(|| format!("unknown fusion `{}`", args.fusion))?;

    let normalization = args
        .normalization
        .as_deref()
        .map(|name| {
            Normalization::parse(name)
                .with_context(|| format!("unknown normalization `{name}`"))
        })
        .transpose()?;

    if !args.weights.is_empty() && args.weights.len() != args.runs.len() {
        bail!(
            "expected {} -w weights (one per run file) but got {}",
            args.runs.len(),
            args.weights.len()
        );
    }

    let run_id = args
        .run_id
        .clone()
        .unwrap_or_else(|| format!("polyfuse-{}", fusion.name()));

    let mut paths = args.runs.iter();
    let first_path = paths.next().expect("clap requires at least one run file");
    let first_weight = args.weights.first().copied().unwrap_or(1.0);

    debug!("folding {} into a fresh engine", first_path.display());
    let first_run = load_run(first_path)?;
    let mut engine = Engine::new()
        .set_fusion(fusion, args.rrf_k, args.phi)
        .fold(&first_run, first_weight, normalization);

    for (i, path) in paths.enumerate() {
        let weight = args.weights.get(i + 1).copied().unwrap_or(1.0);
        debug!("folding {}", path.display());
        let run = load_run(path)?;
        engine = engine.fold(&run, weight, normalization);
    }

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    engine
        .present(&mut out, &run_id, args.depth, args.tie_prevention)
        .with_context(|| "failed to present fusion output")?;
    out.flush().context("failed to flush output")?;

    Ok(ExitCode::SUCCESS)
}

fn load_run(path: &std::path::Path) -> Result<Run> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_run(BufReader::new(file)).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

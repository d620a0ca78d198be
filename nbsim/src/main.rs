use nbsim::{run_sweep, summarize, ConsolePrinter, NoopObserver, ProgressConfig, StepObserver, SweepConfig};
use nbsim::simulation::params::DEFAULT_REPORT_EVERY;
use nbsim::reporting::console::{write_record, write_summary, RECORD_HEADER};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Times direct vs third-law n-body force evaluation")]
struct Args {
    /// Sweep file under `scenarios/`
    #[arg(short, long, default_value = "sweep.yaml")]
    file_name: String,

    /// Dump body states while running
    #[arg(long)]
    progress: bool,

    /// Override the population sizes, e.g. `--sizes 10,100,1000`
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Override runs per (size, variant)
    #[arg(long)]
    repetitions: Option<usize>,
}

// load here to keep main clean
fn load_sweep_from_yaml(file_name: &str) -> Result<SweepConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let sweep_cfg: SweepConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(sweep_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut cfg = load_sweep_from_yaml(&args.file_name)?;

    if let Some(sizes) = args.sizes {
        cfg.population_sizes = sizes;
    }
    if let Some(reps) = args.repetitions {
        cfg.repetitions = reps;
    }
    if args.progress && cfg.progress.is_none() {
        cfg.progress = Some(ProgressConfig { every: DEFAULT_REPORT_EVERY });
    }

    let mut printer = ConsolePrinter;
    let mut silent = NoopObserver;
    let observer: &mut dyn StepObserver = if cfg.progress.is_some() {
        &mut printer
    } else {
        &mut silent
    };

    println!("{RECORD_HEADER}");
    let stdout = io::stdout();
    let records = run_sweep(&cfg, observer, |r| {
        let mut out = stdout.lock();
        if let Err(e) = write_record(&mut out, r).and_then(|_| out.flush()) {
            log::warn!("writing record for N = {} failed: {e}", r.bodies);
        }
    })?;

    write_summary(&mut stdout.lock(), &summarize(&records))?;

    Ok(())
}

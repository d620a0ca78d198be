use std::time::Instant;

use log::{info, warn};

use crate::configuration::config::SweepConfig;
use crate::error::Result;
use crate::simulation::engine::StepObserver;
use crate::simulation::scenario::Scenario;

/// Wall-clock cost of one kernel run
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRecord {
    pub bodies: usize,
    pub third_law: bool,
    pub repetition: usize,
    pub seconds: f64,
}

/// Mean cost per population size, both variants side by side
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    pub bodies: usize,
    pub direct_mean: f64,
    pub symmetric_mean: f64,
    pub speedup: f64, // direct / symmetric
}

/// Time every (size, variant, repetition) of `cfg`
///
/// Sizes run in file order; for each size all direct runs come first, then
/// all symmetric ones. The clock only covers the kernel, not the layout.
/// `on_record` sees each record as soon as it is measured.
pub fn run_sweep(
    cfg: &SweepConfig,
    observer: &mut dyn StepObserver,
    mut on_record: impl FnMut(&SweepRecord),
) -> Result<Vec<SweepRecord>> {
    let mut records = Vec::with_capacity(cfg.population_sizes.len() * 2 * cfg.repetitions);

    for &n in &cfg.population_sizes {
        info!("sweep: N = {n}, {} repetitions per variant", cfg.repetitions);

        for third_law in [false, true] {
            for repetition in 0..cfg.repetitions {
                let run = cfg.run_for(n, third_law);

                let mut scenario = Scenario::build_scenario(run).map_err(|e| {
                    warn!("sweep: N = {n} rejected: {e}");
                    e
                })?;

                let t0 = Instant::now();
                scenario.run(observer)?;
                let seconds = t0.elapsed().as_secs_f64();

                let record = SweepRecord {
                    bodies: n,
                    third_law,
                    repetition,
                    seconds,
                };
                on_record(&record);
                records.push(record);
            }
        }
    }

    Ok(records)
}

/// Average each (size, variant) group, keeping first-seen size order
pub fn summarize(records: &[SweepRecord]) -> Vec<SweepSummary> {
    let mut sizes: Vec<usize> = Vec::new();
    for r in records {
        if !sizes.contains(&r.bodies) {
            sizes.push(r.bodies);
        }
    }

    sizes
        .into_iter()
        .map(|n| {
            let mean = |third_law: bool| {
                let times: Vec<f64> = records
                    .iter()
                    .filter(|r| r.bodies == n && r.third_law == third_law)
                    .map(|r| r.seconds)
                    .collect();
                if times.is_empty() {
                    f64::NAN
                } else {
                    times.iter().sum::<f64>() / times.len() as f64
                }
            };
            let direct_mean = mean(false);
            let symmetric_mean = mean(true);

            SweepSummary {
                bodies: n,
                direct_mean,
                symmetric_mean,
                speedup: direct_mean / symmetric_mean,
            }
        })
        .collect()
}

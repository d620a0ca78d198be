//! Console output for runs and sweeps
//!
//! [`ConsolePrinter`] is a [`StepObserver`] that dumps every body as a table
//! row. The table writers take any `io::Write` so tests can capture output.

use std::io::{self, Write};

use crate::benchmark::benchmark::{SweepRecord, SweepSummary};
use crate::simulation::engine::StepObserver;
use crate::simulation::states::System;

/// Write one table of body states for `step`
pub fn write_bodies<W: Write>(out: &mut W, step: u64, sys: &System) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "OBJ_ID,    MASS,     POS_X,    POS_Y,    VEL_X,    VEL_Y,    TIME")?;
    for (i, b) in sys.bodies.iter().enumerate() {
        writeln!(
            out,
            "{},       {:.6}, {:.6}, {:.6}, {:.6}, {:.6}, {}",
            i, b.m, b.x.x, b.x.y, b.v.x, b.v.y, step
        )?;
    }
    Ok(())
}

/// Progress observer printing to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrinter;

impl StepObserver for ConsolePrinter {
    fn on_step(&mut self, step: u64, sys: &System) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = write_bodies(&mut lock, step, sys) {
            log::warn!("progress output failed: {e}");
        }
    }
}

pub const RECORD_HEADER: &str = "num_objects,third_law,seconds";

/// One CSV row per timed run; paste into a spreadsheet to graph
pub fn write_record<W: Write>(out: &mut W, r: &SweepRecord) -> io::Result<()> {
    writeln!(out, "{},{},{:.6}", r.bodies, u8::from(r.third_law), r.seconds)
}

pub fn write_summary<W: Write>(out: &mut W, rows: &[SweepSummary]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{:>8} {:>14} {:>14} {:>8}", "N", "direct_s", "symmetric_s", "speedup")?;
    for s in rows {
        writeln!(
            out,
            "{:>8} {:>14.6} {:>14.6} {:>8.2}",
            s.bodies, s.direct_mean, s.symmetric_mean, s.speedup
        )?;
    }
    Ok(())
}

use std::io::Write;

use crate::analysis::{Record, RunResult};
use crate::args::ShowArgs;
use crate::common::open_output;
use crate::constants::RECORD_SEPARATOR;
use crate::errors::*;
use crate::window::HitWindow;

fn print_run(out: &mut dyn Write, run: &RunResult, subject: &[u8], context: usize) -> Result<()> {
    writeln!(
        out,
        ">{} {} ({} hits; up to {} mismatches)",
        run.subject_id,
        run.pattern_id,
        run.total_hits(),
        run.tolerance
    )?;

    for &hit in &run.hits {
        let window = HitWindow::new(subject.len(), hit, run.pattern.len(), context);
        let (pattern_line, subject_line) = window.format(&run.pattern, subject);
        let (start, end) = window.location();

        writeln!(out, "Pattern: {}", pattern_line)?;
        writeln!(out, "Subject: {}", subject_line)?;
        writeln!(out, "Start Location: {} End Location: {}", start, end)?;
    }

    writeln!(out, "{}", RECORD_SEPARATOR)?;

    Ok(())
}

/// Prints every pair with at least one hit, showing `context` bases around each hit.
pub fn write_runs(
    out: &mut dyn Write,
    runs: &[RunResult],
    subjects: &[Record],
    context: usize,
) -> Result<()> {
    for run in runs.iter().filter(|run| run.total_hits() > 0) {
        let subject = &subjects[run.subject_idx].sequence;

        print_run(out, run, subject, context).chain_err(|| "failed to write output")?;
    }

    Ok(())
}

pub fn main(args: &ShowArgs) -> Result<()> {
    let (subjects, runs) = super::collect_runs(
        &args.patterns,
        &args.subjects,
        args.mismatches,
        args.mode,
        args.threads,
    )?;

    let mut out = open_output(&args.output)?;
    write_runs(&mut out, &runs, &subjects, args.context)?;
    out.flush().chain_err(|| "failed to flush output")?;

    Ok(())
}

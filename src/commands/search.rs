use std::io::Write;

use crate::analysis::{Record, RunResult};
use crate::args::SearchArgs;
use crate::common::open_output;
use crate::constants::SEARCH_HEADER;
use crate::errors::*;
use crate::window::HitWindow;

/// Writes a TSV table with one row per hit; pairs without hits produce no rows.
pub fn write_runs(out: &mut dyn Write, runs: &[RunResult], subjects: &[Record]) -> Result<()> {
    writeln!(out, "{}", SEARCH_HEADER).chain_err(|| "failed to write output header")?;

    for run in runs {
        let subject_len = subjects[run.subject_idx].sequence.len();
        for &hit in &run.hits {
            let (start, end) = HitWindow::new(subject_len, hit, run.pattern.len(), 0).location();

            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                run.subject_id,
                run.pattern_id,
                String::from_utf8_lossy(&run.pattern),
                start,
                end,
                run.total_hits(),
                run.tolerance,
            )
            .chain_err(|| "failed to write output row")?;
        }
    }

    Ok(())
}

pub fn main(args: &SearchArgs) -> Result<()> {
    let (subjects, runs) = super::collect_runs(
        &args.patterns,
        &args.subjects,
        args.mismatches,
        args.mode,
        args.threads,
    )?;

    let mut out = open_output(&args.output)?;
    write_runs(&mut out, &runs, &subjects)?;
    out.flush().chain_err(|| "failed to flush output")?;

    let total_hits: usize = runs.iter().map(RunResult::total_hits).sum();
    eprintln!("Found {} hits in {} pattern/subject pairs.", total_hits, runs.len());

    Ok(())
}

pub mod search;
pub mod show;

use crate::analysis::{analyze, compile_patterns, load_records, Record, RunResult, ScanMode};
use crate::errors::*;
use crate::progress;

/// Loads both FASTA files and scans every subject for every pattern.
fn collect_runs(
    patterns: &str,
    subjects: &str,
    mismatches: usize,
    mode: ScanMode,
    threads: usize,
) -> Result<(Vec<Record>, Vec<RunResult>)> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")?;

    eprintln!("Reading patterns from {:?}", patterns);
    let queries = compile_patterns(&load_records(&patterns)?)?;
    eprintln!("  read {} patterns.", queries.len());

    eprintln!("Reading subject sequences from {:?}", subjects);
    let subjects = load_records(&subjects)?;
    eprintln!("  read {} subject sequences.", subjects.len());

    let progress = progress::subjects(subjects.len());
    let runs = analyze(&queries, &subjects, mismatches, mode, &progress);
    progress.finish();

    Ok((subjects, runs))
}

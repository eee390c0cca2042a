//! Pairs every pattern record against every subject record.

use std::fmt::Debug;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;
use rayon::prelude::*;

use crate::errors::*;
use crate::matcher::{all_matches, first_match};
use crate::pattern::Pattern;
use crate::progress::ProgressBar;

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub id: String,
    pub sequence: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    pub id: String,
    pub pattern: Pattern,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScanMode {
    /// Report every (possibly overlapping) match
    All,
    /// Report only the leftmost match
    First,
}

/// Hits of a single pattern in a single subject.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    pub subject_idx: usize,
    pub subject_id: String,
    pub pattern_id: String,
    pub pattern: Vec<u8>,
    pub hits: Vec<usize>,
    pub tolerance: usize,
}

impl RunResult {
    pub fn total_hits(&self) -> usize {
        self.hits.len()
    }
}

/// Reads FASTA records, uppercasing sequences and stripping trailing whitespace.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for record in fasta::Reader::new(reader).records() {
        let record = record.chain_err(|| "failed to read FASTA record")?;
        record
            .check()
            .map_err(|v| Error::from(ErrorKind::Msg(v.into())))
            .chain_err(|| format!("invalid FASTA record {:?}", record.id()))?;

        let mut sequence = record.seq().to_ascii_uppercase();
        while sequence.last().map_or(false, |c| c.is_ascii_whitespace()) {
            sequence.pop();
        }

        records.push(Record {
            id: record.id().to_owned(),
            sequence,
        });
    }

    Ok(records)
}

pub fn load_records<P: AsRef<Path> + Debug>(path: &P) -> Result<Vec<Record>> {
    // File is opened separately for better error reporting
    let file = std::fs::File::open(path)
        .chain_err(|| format!("failed to open FASTA file {:?}", path))?;

    read_records(file).chain_err(|| format!("failed to parse FASTA file {:?}", path))
}

pub fn compile_patterns(records: &[Record]) -> Result<Vec<Query>> {
    records
        .iter()
        .map(|record| {
            let pattern = Pattern::new(&record.sequence)
                .chain_err(|| format!("invalid pattern {:?}", record.id))?;

            Ok(Query {
                id: record.id.clone(),
                pattern,
            })
        })
        .collect()
}

fn scan(query: &Query, subject: &[u8], tolerance: usize, mode: ScanMode) -> Vec<usize> {
    match mode {
        ScanMode::All => all_matches(&query.pattern, subject, tolerance),
        ScanMode::First => first_match(&query.pattern, subject, tolerance)
            .into_iter()
            .collect(),
    }
}

/// Runs every query against every subject. Results are ordered by subject and
/// then by query, following input order, regardless of how work was scheduled.
pub fn analyze(
    queries: &[Query],
    subjects: &[Record],
    tolerance: usize,
    mode: ScanMode,
    pg: &ProgressBar,
) -> Vec<RunResult> {
    let runs: Vec<Vec<RunResult>> = subjects
        .par_iter()
        .enumerate()
        .map(|(subject_idx, subject)| {
            let runs = queries
                .iter()
                .map(|query| RunResult {
                    subject_idx,
                    subject_id: subject.id.clone(),
                    pattern_id: query.id.clone(),
                    pattern: query.pattern.as_bytes().to_owned(),
                    hits: scan(query, &subject.sequence, tolerance, mode),
                    tolerance,
                })
                .collect();

            pg.inc(1);
            runs
        })
        .collect();

    runs.into_iter().flatten().collect()
}

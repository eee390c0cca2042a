extern crate dnamatch;

use dnamatch::analysis::{Record, RunResult};
use dnamatch::commands::show::write_runs;

fn subjects() -> Vec<Record> {
    vec![
        Record {
            id: "s1".into(),
            sequence: b"GGGGATCGCCCCCC".to_vec(),
        },
        Record {
            id: "s2".into(),
            sequence: b"GATCGCCC".to_vec(),
        },
    ]
}

fn run(subject_idx: usize, subject_id: &str, hits: Vec<usize>) -> RunResult {
    RunResult {
        subject_idx,
        subject_id: subject_id.into(),
        pattern_id: "p1".into(),
        pattern: b"ATCG".to_vec(),
        hits,
        tolerance: 1,
    }
}

fn render(runs: &[RunResult], context: usize) -> String {
    let mut out: Vec<u8> = Vec::new();
    write_runs(&mut out, runs, &subjects(), context).unwrap();

    String::from_utf8(out).unwrap()
}

#[test]
fn test_write_runs_single_hit() {
    assert_eq!(
        render(&[run(0, "s1", vec![4])], 4),
        ">s1 p1 (1 hits; up to 1 mismatches)\n\
         Pattern:      ATCG\n\
         Subject: GGGG ATCG CCCC\n\
         Start Location: 5 End Location: 8\n\
         ________\n"
    );
}

#[test]
fn test_write_runs_skips_pairs_without_hits() {
    let runs = vec![run(0, "s1", vec![]), run(1, "s2", vec![1])];

    assert_eq!(
        render(&runs, 4),
        ">s2 p1 (1 hits; up to 1 mismatches)\n\
         Pattern:   ATCG\n\
         Subject: G ATCG CCC\n\
         Start Location: 2 End Location: 5\n\
         ________\n"
    );
}

#[test]
fn test_write_runs_multiple_hits_and_context() {
    let runs = vec![run(0, "s1", vec![3, 4])];

    assert_eq!(
        render(&runs, 1),
        ">s1 p1 (2 hits; up to 1 mismatches)\n\
         Pattern:   ATCG\n\
         Subject: G GATC G\n\
         Start Location: 4 End Location: 7\n\
         Pattern:   ATCG\n\
         Subject: G ATCG C\n\
         Start Location: 5 End Location: 8\n\
         ________\n"
    );
}

#[test]
fn test_write_runs_nothing_to_show() {
    assert_eq!(render(&[run(0, "s1", vec![])], 4), "");
}

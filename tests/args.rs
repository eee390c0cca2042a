extern crate dnamatch;

use dnamatch::analysis::ScanMode;
use dnamatch::args::{parse_args_from, Args};

#[test]
fn test_search_defaults() {
    match parse_args_from(vec!["dnamatch", "search", "p.fasta", "s.fasta"]).unwrap() {
        Args::Search(args) => {
            assert_eq!(args.patterns, "p.fasta");
            assert_eq!(args.subjects, "s.fasta");
            assert_eq!(args.output, None);
            assert_eq!(args.mismatches, 0);
            assert_eq!(args.mode, ScanMode::All);
            assert_eq!(args.threads, 0);
        }
        _ => panic!("expected search arguments"),
    }
}

#[test]
fn test_show_defaults() {
    match parse_args_from(vec!["dnamatch", "show", "p.fasta", "s.fasta", "out.txt"]).unwrap() {
        Args::Show(args) => {
            assert_eq!(args.output, Some("out.txt".to_owned()));
            assert_eq!(args.mismatches, 0);
            assert_eq!(args.context, 4);
            assert_eq!(args.mode, ScanMode::All);
            assert_eq!(args.threads, 0);
        }
        _ => panic!("expected show arguments"),
    }
}

#[test]
fn test_show_options() {
    let argv = vec![
        "dnamatch", "show", "p.fasta", "s.fasta", "-m", "2", "--context", "10", "--first",
        "--threads", "3",
    ];

    match parse_args_from(argv).unwrap() {
        Args::Show(args) => {
            assert_eq!(args.mismatches, 2);
            assert_eq!(args.context, 10);
            assert_eq!(args.mode, ScanMode::First);
            assert_eq!(args.threads, 3);
        }
        _ => panic!("expected show arguments"),
    }
}

#[test]
fn test_invalid_number() {
    let argv = vec!["dnamatch", "search", "p.fasta", "s.fasta", "--mismatches", "two"];
    let err = match parse_args_from(argv) {
        Ok(_) => panic!("expected an error"),
        Err(err) => err,
    };

    assert!(err.to_string().starts_with("Invalid --mismatches (\"two\") value"));
}

#[test]
fn test_no_subcommand() {
    match parse_args_from(vec!["dnamatch"]).unwrap() {
        Args::None => {}
        _ => panic!("expected no arguments"),
    }
}

use std::ffi::OsString;

use clap::{App, Arg, ArgMatches, SubCommand};

use crate::analysis::ScanMode;
use crate::constants::*;
use crate::errors::*;

#[derive(Debug)]
pub struct SearchArgs {
    pub patterns: String,
    pub subjects: String,
    pub output: Option<String>,
    pub mismatches: usize,
    pub mode: ScanMode,
    pub threads: usize,
}

#[derive(Debug)]
pub struct ShowArgs {
    pub patterns: String,
    pub subjects: String,
    pub output: Option<String>,
    pub mismatches: usize,
    pub context: usize,
    pub mode: ScanMode,
    pub threads: usize,
}

pub enum Args {
    Search(SearchArgs),
    Show(ShowArgs),
    None,
}

fn common_args<'a, 'b>(command: App<'a, 'b>) -> App<'a, 'b> {
    command
        .arg(
            Arg::with_name("patterns")
                .help("FASTA file containing IUPAC query patterns.")
                .required(true),
        )
        .arg(
            Arg::with_name("subjects")
                .help("FASTA file containing subject sequences.")
                .required(true),
        )
        .arg(Arg::with_name("output").help("Output file (default: STDOUT, or \"-\")."))
        .arg(
            Arg::with_name("mismatches")
                .long("mismatches")
                .short("m")
                .takes_value(true)
                .number_of_values(1)
                .help("Maximum number of mismatching positions per hit."),
        )
        .arg(
            Arg::with_name("first")
                .long("first")
                .help("Only report the leftmost hit of each pattern in each subject."),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .number_of_values(1)
                .help("Number of threads used for computation (0 for automatic)."),
        )
}

fn search_command<'a, 'b>() -> App<'a, 'b> {
    common_args(
        SubCommand::with_name("search")
            .about("Write a table of pattern hits in subject sequences"),
    )
}

fn show_command<'a, 'b>() -> App<'a, 'b> {
    common_args(
        SubCommand::with_name("show").about("Print pattern hits alongside their sequence context"),
    )
    .arg(
        Arg::with_name("context")
            .long("context")
            .takes_value(true)
            .number_of_values(1)
            .help("Number of bases shown on either side of each hit."),
    )
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn parse_usize(matches: &ArgMatches, key: &str, default: usize) -> Result<usize> {
    let s = match matches.value_of(key) {
        Some(s) => s,
        None => return Ok(default),
    };

    match s.parse::<usize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --{} ({:?}) value: {}", key, s, err).into()),
    }
}

fn parse_mode(matches: &ArgMatches) -> ScanMode {
    if matches.is_present("first") {
        ScanMode::First
    } else {
        ScanMode::All
    }
}

pub fn parse_args() -> Result<Args> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<I, T>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = App::new("dnamatch")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Mikkel Schubert")
        .about("Find IUPAC patterns in DNA/RNA sequences, allowing mismatches")
        .subcommand(search_command())
        .subcommand(show_command())
        .get_matches_from(args);

    if let Some(matches) = matches.subcommand_matches("search") {
        Ok(Args::Search(SearchArgs {
            patterns: get_string(matches, "patterns")?,
            subjects: get_string(matches, "subjects")?,
            output: matches.value_of("output").map(|s| s.to_string()),
            mismatches: parse_usize(matches, "mismatches", DEFAULT_MISMATCHES)?,
            mode: parse_mode(matches),
            threads: parse_usize(matches, "threads", DEFAULT_THREADS)?,
        }))
    } else if let Some(matches) = matches.subcommand_matches("show") {
        Ok(Args::Show(ShowArgs {
            patterns: get_string(matches, "patterns")?,
            subjects: get_string(matches, "subjects")?,
            output: matches.value_of("output").map(|s| s.to_string()),
            mismatches: parse_usize(matches, "mismatches", DEFAULT_MISMATCHES)?,
            context: parse_usize(matches, "context", DEFAULT_CONTEXT)?,
            mode: parse_mode(matches),
            threads: parse_usize(matches, "threads", DEFAULT_THREADS)?,
        }))
    } else {
        eprintln!("{}", matches.usage());

        Ok(Args::None)
    }
}

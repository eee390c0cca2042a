use std::fs::File;
use std::io;
use std::io::Write;

use crate::errors::*;

/// Opens the named output file, or STDOUT if no path (or "-") was given.
pub fn open_output(path: &Option<String>) -> Result<Box<dyn Write>> {
    match path.as_ref().map(String::as_str) {
        None | Some("-") => Ok(Box::new(io::BufWriter::new(io::stdout()))),
        Some(path) => {
            let handle = File::create(path)
                .chain_err(|| format!("could not create output file {:?}", path))?;

            Ok(Box::new(io::BufWriter::new(handle)))
        }
    }
}

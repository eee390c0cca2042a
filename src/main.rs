extern crate dnamatch;

use dnamatch::{args, commands, errors};

fn print_err(e: &errors::Error) {
    use error_chain::ChainedError;
    use std::io::Write; // trait which holds `display_chain`
    let stderr = &mut ::std::io::stderr();
    let errmsg = "Error writing to stderr";

    writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
}

fn inner_main() -> errors::Result<()> {
    match args::parse_args()? {
        args::Args::Search(args) => commands::search::main(&args),
        args::Args::Show(args) => commands::show::main(&args),
        args::Args::None => Ok(()),
    }
}

fn main() {
    if let Err(e) = inner_main() {
        print_err(&e);

        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}

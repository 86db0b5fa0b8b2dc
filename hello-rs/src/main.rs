use std::io::{self, Write};
use std::process::ExitCode;

use hello::cli::{self, USAGE};
use hello::{logging, tour, Error};

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("hello: {e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(args.debug);

    let mut out = io::stdout().lock();
    let result = if args.help {
        writeln!(out, "{USAGE}").and_then(|()| out.flush())
    } else if args.version {
        writeln!(out, "{}", cli::version_line()).and_then(|()| out.flush())
    } else {
        tour::run(&mut out)
    };

    match result.map_err(Error::from) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => {
            log::debug!("stdout closed early");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("hello: {e}");
            ExitCode::FAILURE
        }
    }
}

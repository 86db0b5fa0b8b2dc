//! Command-line argument parsing.
//!
//! Usage:
//!   hello [-dhV]
//!
//! Running with no arguments is the normal case.

use crate::error::{Error, Result};

pub const USAGE: &str = "Usage: hello [-d] [-h] [-V]";

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Debug logging on stderr (`-d`).
    pub debug: bool,
    /// Print usage and exit (`-h`).
    pub help: bool,
    /// Print the version and exit (`-V`).
    pub version: bool,
}

/// Parse `std::env::args()`.
pub fn parse_args() -> Result<CliArgs> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(raw.get(1..).unwrap_or_default())
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs> {
    let mut args = CliArgs::default();

    for (i, arg) in argv.iter().enumerate() {
        // `--` ends flag processing; nothing may follow it.
        if arg == "--" {
            if let Some(extra) = argv.get(i + 1) {
                return Err(Error::Usage(format!("unexpected argument: {extra}")));
            }
            break;
        }

        let Some(flags) = arg.strip_prefix('-').filter(|f| !f.is_empty()) else {
            return Err(Error::Usage(format!("unexpected argument: {arg}")));
        };

        for c in flags.chars() {
            match c {
                'd' => args.debug = true,
                'h' => args.help = true,
                'V' => args.version = true,
                c => return Err(Error::Usage(format!("unknown option: -{c}"))),
            }
        }
    }

    Ok(args)
}

/// `hello <version>`
pub fn version_line() -> String {
    format!("hello {}", env!("CARGO_PKG_VERSION"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

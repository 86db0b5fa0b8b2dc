//! stderr logging through `env_logger`.
//!
//! Diagnostics never go to stdout; the transcript owns it.

use std::io::Write;

use log::{LevelFilter, Record};

/// `hello: debug: counting to 5`
fn format_record(record: &Record<'_>) -> String {
    format!(
        "hello: {}: {}",
        record.level().as_str().to_ascii_lowercase(),
        record.args()
    )
}

/// Level used for a given `-d` setting.
pub fn level_for(debug: bool) -> LevelFilter {
    if debug { LevelFilter::Debug } else { LevelFilter::Warn }
}

/// Logger writing `hello: <level>: <message>` lines to stderr.
pub fn builder(debug: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(debug))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}", format_record(record)));
    builder
}

/// Install the stderr logger.  Only the first call has any effect.
pub fn init(debug: bool) {
    if let Err(e) = builder(debug).try_init() {
        log::debug!("logger already installed: {e}");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

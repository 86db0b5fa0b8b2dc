//! Error type shared by the library and the binary.

use std::io;

/// Everything that can stop the tour from printing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),
    /// Writing to stdout failed.
    #[error("write error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// `true` when the reader of stdout went away (e.g. `hello | head -1`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_displays_message_verbatim() {
        let e = Error::Usage("unknown option: -z".to_owned());
        assert_eq!(e.to_string(), "unknown option: -z");
    }

    #[test]
    fn io_converts_with_question_mark() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))?;
            Ok(())
        }
        let e = fails().unwrap_err();
        assert!(matches!(e, Error::Io(_)));
        assert_eq!(e.to_string(), "write error: disk on fire");
    }

    #[test]
    fn broken_pipe_detected() {
        let e = Error::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(e.is_broken_pipe());
        assert!(!Error::Usage("x".to_owned()).is_broken_pipe());
    }
}

//! A short tour of basic language features.
//!
//! The binary prints a fixed eleven-line transcript: a greeting built from a
//! few bound values, an age classification, a bounded count, an indexed list
//! access and one call to a named procedure.

pub mod cli;
pub mod error;
pub mod logging;
pub mod profile;
pub mod tour;

pub use error::{Error, Result};
pub use profile::{Classification, Profile, FRUITS};

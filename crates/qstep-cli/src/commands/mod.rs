//! CLI command implementations.

pub mod common;
pub mod parse;
pub mod run;
pub mod samples;
pub mod version;

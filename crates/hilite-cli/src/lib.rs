//! hilite CLI: file plumbing and binaries around the highlighting pipeline
pub mod demo;
pub mod job;
pub mod logging;

pub use job::{run, JobReport};

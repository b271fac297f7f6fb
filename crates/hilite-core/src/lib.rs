//! hilite core: Stage trait, Pipeline, and data model
//!
//! A pipeline is a fixed, ordered list of stateless text-to-text stages.
//! Each stage rewrites the whole text once and hands the result on.

pub mod stage;
pub mod runner;
pub mod data_model;
pub mod error;
pub mod config;

pub use stage::Stage;
pub use runner::Pipeline;
pub use data_model::{Rendered, StageTrace};
pub use config::RunConfig;
pub use error::HiliteError;

/// Engine version, recorded in trace reports
pub const HILITE_VERSION: &str = env!("CARGO_PKG_VERSION");

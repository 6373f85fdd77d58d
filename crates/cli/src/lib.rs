//! `stockroom-cli` — replays stock scripts against a single stock record.
//!
//! This is the calling system around the inventory domain: it loads input,
//! owns the record, serializes every mutation, and reports domain errors to
//! its user through logs and the exit status.

pub mod config;
pub mod replay;
pub mod script;

pub use config::{CliConfig, ConfigError};
pub use replay::{Rejection, ReplayOptions, ReplayReport, replay};
pub use script::{StockScript, load_script};

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::sink::{JsonSink, TextSink};
pub use config::{toml_config::TomlConfig, FoldConfig};
pub use self::core::{engine::ReduceEngine, fold::fold_traced, pipeline::FoldPipeline};
pub use utils::error::{ReduceError, Result};

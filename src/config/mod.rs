#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];
pub const DEFAULT_INITIAL: i64 = 100;

/// Fully resolved fold settings after merging CLI flags, TOML and defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldConfig {
    pub numbers: Vec<i64>,
    pub initial: i64,
    pub format: OutputFormat,
    pub monitor: bool,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            numbers: DEFAULT_NUMBERS.to_vec(),
            initial: DEFAULT_INITIAL,
            format: OutputFormat::Text,
            monitor: false,
        }
    }
}

impl ConfigProvider for FoldConfig {
    fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    fn initial(&self) -> i64 {
        self.initial
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

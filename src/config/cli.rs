use crate::config::toml_config::TomlConfig;
use crate::config::FoldConfig;
use crate::core::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::str::FromStr;

/// Comma-separated `--numbers` value. An empty string is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberList(pub Vec<i64>);

impl FromStr for NumberList {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(NumberList(Vec::new()));
        }

        s.split(',')
            .map(|item| {
                item.trim()
                    .parse::<i64>()
                    .map_err(|e| format!("invalid number '{}': {}", item.trim(), e))
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(NumberList)
    }
}

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "reduce-trace")]
#[command(about = "Fold a list of integers with addition, tracing every step")]
pub struct CliConfig {
    /// Comma-separated values to fold, "" for none [default: 1,2,3,4,5]
    #[arg(long, allow_hyphen_values = true)]
    pub numbers: Option<NumberList>,

    /// Initial accumulator [default: 100]
    #[arg(long, allow_hyphen_values = true)]
    pub initial: Option<i64>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

impl CliConfig {
    /// 合併設定：命令列 > TOML 檔案 > 預設值
    pub fn resolve(&self) -> Result<FoldConfig> {
        let mut config = FoldConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            file_config.apply_to(&mut config)?;
        }

        if let Some(NumberList(numbers)) = &self.numbers {
            config.numbers = numbers.clone();
        }
        if let Some(initial) = self.initial {
            config.initial = initial;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.monitor |= self.monitor;

        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

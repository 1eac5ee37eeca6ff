pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::greeting::DEFAULT_WHO;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hello-fortune")]
#[command(about = "Prints a greeting and the local time, optionally with a fortune")]
pub struct CliConfig {
    /// Who to greet; anything after the first name is ignored
    #[arg(value_name = "WHO", num_args = 0..)]
    pub args: Vec<String>,

    /// TOML file with a `fortunes = [...]` array; the built-in list is used otherwise
    #[arg(long)]
    pub fortunes: Option<String>,

    #[arg(long, help = "Also print a fortune")]
    pub fortune: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn who(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or(DEFAULT_WHO)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.fortunes {
            validate_path("fortunes", path)?;
        }
        Ok(())
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::toml_config::{load_fortunes, FortuneFile};
pub use core::{app::HelloApp, clock::SystemClock, fortune::FortuneProvider};
pub use domain::model::{FortuneList, Report};
pub use utils::error::{HelloError, Result};

//! Process runtime shared by UMai binaries: layered configuration and
//! logging initialisation.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{default_logging_config, AppConfig, AppSection, CliArgs, LoggingConfig, Section};

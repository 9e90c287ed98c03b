//! Core settings shared by the scanner and the outline printer.

mod config;

pub use config::{Config, OutlineConfig, ScannerConfig, LOCAL_CONFIG_FILE};

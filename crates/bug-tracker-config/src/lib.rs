//! Configuration and file management for bug-tracker
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, API_URL_ENV};
pub use config_file::{load_config_file, LOCAL_CONFIG_FILE};
pub use paths::{app_config_path, cache_dir};

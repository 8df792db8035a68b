//! Configuration management for regrid.
//!
//! This module handles the layered configuration system with the following
//! precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::boundary::BoundaryMode;
use crate::error::{RegridError, Result};
use crate::sampler::Sampler;

/// Command-line arguments for the regrid tools
#[derive(Parser, Debug)]
#[command(name = "regrid")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Pipeline specification, e.g. "cressman:3:3,threshold:18:50"
    pub pipeline: Option<String>,

    /// List all registered samplers and filters, then exit
    #[arg(short, long)]
    pub list: bool,

    /// Path to JSON configuration file
    #[arg(short, long, env = "REGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "REGRID_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Remap configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemapConfig {
    /// Pipeline specification string
    #[serde(default = "default_pipeline")]
    pub pipeline: String,

    /// Boundary policy for the X axis (none, wrap, clamp)
    #[serde(default = "default_boundary")]
    pub boundary_x: String,

    /// Boundary policy for the Y axis (none, wrap, clamp)
    #[serde(default = "default_boundary")]
    pub boundary_y: String,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remap configuration
    #[serde(default)]
    pub remap: RemapConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Returns the merged configuration together with the parsed arguments,
    /// which carry the binary-only flags.
    pub fn load() -> Result<(Self, Args)> {
        let args = Args::parse();

        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(pipeline) = &args.pipeline {
            config.remap.pipeline = pipeline.clone();
        }
        config.log_level = args.log_level.clone();

        Ok((config, args))
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.remap = other.remap;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.remap.pipeline.trim().is_empty() {
            return Err(RegridError::Config {
                message: "Pipeline specification cannot be empty".to_string(),
            });
        }

        // Boundary modes must parse
        self.remap.boundary_x()?;
        self.remap.boundary_y()?;

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(RegridError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl RemapConfig {
    /// The configured X boundary mode
    pub fn boundary_x(&self) -> Result<BoundaryMode> {
        self.boundary_x.parse()
    }

    /// The configured Y boundary mode
    pub fn boundary_y(&self) -> Result<BoundaryMode> {
        self.boundary_y.parse()
    }

    /// Push the configured boundary modes into a sampling chain
    pub fn apply(&self, chain: &mut dyn Sampler) -> Result<()> {
        chain.set_boundary_x(self.boundary_x()?);
        chain.set_boundary_y(self.boundary_y()?);
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remap: RemapConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            pipeline: default_pipeline(),
            boundary_x: default_boundary(),
            boundary_y: default_boundary(),
        }
    }
}

// Default value functions for serde
fn default_pipeline() -> String {
    "nearest".to_string()
}

fn default_boundary() -> String {
    "none".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

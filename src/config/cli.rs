use crate::core::{ConfigProvider, OverflowPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pointcalc")]
#[command(about = "Adds integers and prints points")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(long, global = true, value_enum, help = "Overflow policy for additions")]
    pub overflow: Option<OverflowPolicy>,

    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Print a point as `Point: (x, y)`
    Point {
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },
    /// Run the built-in demo
    Demo,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn overflow_policy(&self) -> Option<OverflowPolicy> {
        self.overflow
    }

    fn log_level(&self) -> Option<&str> {
        self.verbose.then_some("debug")
    }

    fn log_json(&self) -> bool {
        false
    }
}

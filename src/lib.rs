pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::TomlConfig;
pub use core::adder::{add, add_with};
pub use core::printer::print_point;
pub use domain::model::{OverflowPolicy, Point, Sum};
pub use utils::error::{CalcError, Result};

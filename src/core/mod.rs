pub mod adder;
pub mod printer;

pub use crate::domain::model::{OverflowPolicy, Point, Sum};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;

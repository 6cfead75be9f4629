//! Build service interface.

#![warn(clippy::all)]

mod errors;
mod interface;
pub mod types;

pub use errors::{BuildError, Result};
pub use interface::BuildService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockBuildService;

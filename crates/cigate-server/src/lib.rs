//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod build;
pub mod constants;
mod events;
pub mod errors;
pub mod ghapi;
mod health;
mod metrics;
pub mod secrets;
pub mod server;

pub use errors::{Result, ServerError};

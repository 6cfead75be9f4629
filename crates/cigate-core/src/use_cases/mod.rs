pub mod builds;
pub mod events;
pub mod reports;
pub mod status;
pub mod webhook;

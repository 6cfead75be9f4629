//! Build service types.

mod build_state_change;
mod started_build;

pub use build_state_change::{
    BuildAdditionalInformation, BuildEnvironment, BuildLogs, BuildStateChangeDetail,
    BuildStateChangeEvent,
};
pub use started_build::StartedBuild;

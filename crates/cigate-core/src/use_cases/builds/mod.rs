pub(crate) mod dispatch_build;

pub use dispatch_build::{DispatchBuildInterface, DispatchOutcome, DispatchResult};
#[cfg(any(test, feature = "testkit"))]
pub use dispatch_build::MockDispatchBuildInterface;

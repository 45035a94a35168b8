//! Entities: value-typed snapshots with identity scoped to one planning
//! or sync cycle.

pub mod computer;
pub mod sync_plan;
pub mod sync_result;

pub use computer::Computer;
pub use sync_plan::SyncPlan;
pub use sync_result::{ComputerSyncResult, PlannedFileResult, SyncOperationResult, SyncStatus, SyncSummary};

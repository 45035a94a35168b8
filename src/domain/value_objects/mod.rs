//! Value objects: small, immutable, validated types shared across the
//! planning and execution pipeline.

pub mod issue;
pub mod path;
pub mod resolved_rule;
pub mod rule;

pub use issue::{IssueCategory, Severity, SyncPlanIssue};
pub use resolved_rule::{ResolvedFileRule, ResolvedTarget, TargetKind};
pub use rule::{ComputerGroup, SyncRule};

//! Application layer: stateful orchestration above the pure domain —
//! caching, planning, execution, controllers, and the top-level engine.

pub mod copy_executor;
pub mod engine;
pub mod events;
pub mod manual_controller;
pub mod plan_cache;
pub mod sync_operation;
pub mod sync_planner;
pub mod watch_controller;

pub use engine::{Engine, EngineConfig, EngineState};
pub use events::ControllerEvent;
pub use plan_cache::{GlobCache, PlanCache};
pub use sync_planner::SyncPlanner;

//! Session flows.
//!
//! This module exposes the flow orchestrator and the branch dispatcher it
//! uses for table-driven splits.

mod branch;
mod error;
pub mod orchestrator;

pub use branch::BranchDispatcher;
pub use error::FlowError;
pub use orchestrator::FlowOrchestrator;

//! screenflow Application Orchestration Layer
//!
//! This crate contains the view catalog, the branch dispatcher and the flow
//! orchestrator that drives one session's screens.

pub mod flows;
pub mod timings;
pub mod views;

pub use flows::{BranchDispatcher, FlowError, FlowOrchestrator};
pub use timings::Timings;
pub use views::ViewCatalog;

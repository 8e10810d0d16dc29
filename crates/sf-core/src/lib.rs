//! # sf-core
//!
//! Core domain models and flow state machine for screenflow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod flow;
pub mod ports;
pub mod progress;
pub mod view;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use flow::{
    BranchTable, ErrorSignal, FlowInput, FlowState, FlowStateMachine, SessionOutcome,
    TransitionError, UnhandledKeyError,
};
pub use progress::{Progress, ProgressToken};
pub use view::{ActionDescriptor, ActionKey, ActionStyle, ScreenSpec, View, ViewResult};

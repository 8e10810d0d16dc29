//! Flow domain module.
//!
//! This module defines the session flow state machine types.

mod branch;
mod signal;
mod state;
pub mod state_machine;

pub use branch::{BranchTable, UnhandledKeyError};
pub use signal::ErrorSignal;
pub use state::{FlowInput, FlowState, SessionOutcome};
pub use state_machine::{FlowStateMachine, TransitionError};

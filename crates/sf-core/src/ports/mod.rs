//! Port interfaces for the application layer
//!
//! Ports define the contract between the flow engine and the collaborators
//! the host supplies: a presentation surface, a progress store, a reload
//! action and simulation toggles. The core never touches I/O directly.
//!
//! Persistence and reload failures cross these boundaries as values
//! ([`ErrorSignal`](crate::flow::ErrorSignal), [`ProgressToken::Unreadable`](crate::progress::ProgressToken)),
//! never as panics.

mod presentation;
mod progress_store;
mod reload;
mod simulation;
mod style_surface;

pub use presentation::{PresentationError, PresentationPort};
pub use progress_store::ProgressStorePort;
pub use reload::ReloadPort;
pub use simulation::SimulationPort;
pub use style_surface::StyleSurfacePort;

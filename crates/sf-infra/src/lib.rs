//! Adapters behind the screenflow ports: file-backed progress storage,
//! a terminal presentation surface, style state and the simulation switches.

pub mod progress_store;
pub mod reload;
pub mod simulation;
pub mod style_surface;
pub mod terminal;

pub use progress_store::{FileProgressStore, DEFAULT_PROGRESS_FILE};
pub use reload::SessionReloader;
pub use simulation::{RuntimeSimulation, SimulatedProgressStore};
pub use style_surface::InMemoryStyleSurface;
pub use terminal::TerminalPresenter;

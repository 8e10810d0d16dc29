//! Screen definitions.
//!
//! Every view only describes a screen and reports what the user did. Views
//! never touch persistence and never decide which flow runs next.

mod catalog;
mod style_override;

pub use catalog::ViewCatalog;
pub use style_override::StyleOverride;

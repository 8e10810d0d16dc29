//! View domain models
//!
//! A view is one screen: what it shows, which actions it offers, and which
//! result it produces once the user acts.

mod action;
mod hooks;
mod name;
mod result;
mod screen;

pub use action::{ActionDescriptor, ActionKey, ActionStyle};
pub use hooks::{RestoreToken, ScreenHooks, StyleMap};
pub use name::{IntroStep, View};
pub use result::ViewResult;
pub use screen::{FeedbackTone, ImageRef, ScreenContent, ScreenLayout, ScreenScope, ScreenSpec};

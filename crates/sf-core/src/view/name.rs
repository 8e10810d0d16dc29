use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a screen in the introductory sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntroStep {
    Welcome,
    Promises,
    AwaitedViews,
    Interactive,
}

impl IntroStep {
    pub const ALL: [IntroStep; 4] = [
        IntroStep::Welcome,
        IntroStep::Promises,
        IntroStep::AwaitedViews,
        IntroStep::Interactive,
    ];

    pub fn number(&self) -> usize {
        match self {
            IntroStep::Welcome => 1,
            IntroStep::Promises => 2,
            IntroStep::AwaitedViews => 3,
            IntroStep::Interactive => 4,
        }
    }
}

/// Named screens of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Loading,
    Saving,
    Deleting,
    Intro(IntroStep),
    Main,
    Aside,
    Error { message: String },
    DeadEnd { reason: String },
}

impl View {
    pub fn name(&self) -> String {
        match self {
            View::Loading => "loading".to_string(),
            View::Saving => "saving".to_string(),
            View::Deleting => "deleting".to_string(),
            View::Intro(step) => format!("intro{}", step.number()),
            View::Main => "main".to_string(),
            View::Aside => "aside".to_string(),
            View::Error { .. } => "error".to_string(),
            View::DeadEnd { .. } => "dead-end".to_string(),
        }
    }

    /// Parse a view name. Error and dead-end views get an empty message.
    pub fn from_name(name: &str) -> Option<View> {
        let view = match name.trim() {
            "loading" => View::Loading,
            "saving" => View::Saving,
            "deleting" => View::Deleting,
            "intro1" => View::Intro(IntroStep::Welcome),
            "intro2" => View::Intro(IntroStep::Promises),
            "intro3" => View::Intro(IntroStep::AwaitedViews),
            "intro4" => View::Intro(IntroStep::Interactive),
            "main" => View::Main,
            "aside" => View::Aside,
            "error" => View::Error {
                message: String::new(),
            },
            "dead-end" => View::DeadEnd {
                reason: String::new(),
            },
            _ => return None,
        };
        Some(view)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

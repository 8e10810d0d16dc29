use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::{ActionDescriptor, ActionKey, RestoreToken, ScreenHooks};

/// Tone of a transient feedback screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Loading,
    Saving,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// Renderable content of a screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenContent {
    pub heading: Option<String>,
    pub paragraphs: Vec<String>,
    pub image: Option<ImageRef>,
}

impl ScreenContent {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            ..Self::default()
        }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    pub fn image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some(ImageRef {
            src: src.into(),
            alt: alt.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenLayout {
    /// Transient status screen; resolves void after `duration`.
    Feedback {
        text: String,
        tone: FeedbackTone,
        duration: Duration,
    },
    /// Screen with one or more actions, kept in declaration order.
    Interactive { actions: Vec<ActionDescriptor> },
    /// Final screen without actions; resolves void once rendered.
    Message,
}

/// Everything a presentation adapter needs to display one screen.
#[derive(Clone)]
pub struct ScreenSpec {
    pub name: String,
    pub content: ScreenContent,
    pub layout: ScreenLayout,
    /// Delay between the user's action and the result being returned.
    pub transition: Duration,
    pub hooks: Option<Arc<dyn ScreenHooks>>,
}

impl ScreenSpec {
    pub fn feedback(name: impl Into<String>, text: impl Into<String>, tone: FeedbackTone, duration: Duration) -> Self {
        Self {
            name: name.into(),
            content: ScreenContent::default(),
            layout: ScreenLayout::Feedback {
                text: text.into(),
                tone,
                duration,
            },
            transition: Duration::ZERO,
            hooks: None,
        }
    }

    pub fn interactive(
        name: impl Into<String>,
        content: ScreenContent,
        actions: Vec<ActionDescriptor>,
        transition: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            content,
            layout: ScreenLayout::Interactive { actions },
            transition,
            hooks: None,
        }
    }

    pub fn message(name: impl Into<String>, content: ScreenContent) -> Self {
        Self {
            name: name.into(),
            content,
            layout: ScreenLayout::Message,
            transition: Duration::ZERO,
            hooks: None,
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ScreenHooks>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Actions offered by the screen, in declaration order.
    pub fn actions(&self) -> &[ActionDescriptor] {
        match &self.layout {
            ScreenLayout::Interactive { actions } => actions,
            _ => &[],
        }
    }

    /// Keys the screen can emit, in declaration order.
    pub fn action_keys(&self) -> Vec<ActionKey> {
        self.actions().iter().map(|action| action.key).collect()
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.layout, ScreenLayout::Interactive { .. })
    }

    /// Run `on_enter` (if any) and return the scope that must be exited once
    /// the user has acted.
    pub fn enter(&self) -> ScreenScope {
        let entered = self
            .hooks
            .as_ref()
            .map(|hooks| (Arc::clone(hooks), hooks.on_enter()));
        ScreenScope { entered }
    }
}

impl fmt::Debug for ScreenSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenSpec")
            .field("name", &self.name)
            .field("content", &self.content)
            .field("layout", &self.layout)
            .field("transition", &self.transition)
            .field("hooks", &self.hooks.is_some())
            .finish()
    }
}

/// An entered screen whose side effect is still active.
#[must_use = "an entered screen must be exited to restore its side effect"]
pub struct ScreenScope {
    entered: Option<(Arc<dyn ScreenHooks>, RestoreToken)>,
}

impl ScreenScope {
    pub async fn exit(self) {
        if let Some((hooks, token)) = self.entered {
            hooks.on_exit(token).await;
        }
    }
}

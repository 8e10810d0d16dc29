use std::sync::Arc;

use sf_core::ports::{PresentationPort, StyleSurfacePort};
use sf_core::view::{
    ActionDescriptor, ActionKey, ActionStyle, FeedbackTone, IntroStep, ScreenContent, ScreenSpec,
    View, ViewResult,
};
use tracing::debug;

use super::StyleOverride;
use crate::flows::FlowError;
use crate::timings::Timings;

const ASIDE_IMAGE_SRC: &str = "https://assets.codepen.io/25387/kuu.jpeg";
const ASIDE_IMAGE_ALT: &str = "A photo of a tree I look at, sometimes. Trees branch off in every \
    direction, each branch with its own sub-branches and a flower at the tip of each one. \
    Family tree, decision tree, dependency tree, DOM tree: so many things take the shape of a tree.";

/// Named screen definitions over the presentation port.
pub struct ViewCatalog {
    presentation: Arc<dyn PresentationPort>,
    surface: Arc<dyn StyleSurfacePort>,
    timings: Timings,
}

impl ViewCatalog {
    pub fn new(
        presentation: Arc<dyn PresentationPort>,
        surface: Arc<dyn StyleSurfacePort>,
        timings: Timings,
    ) -> Self {
        Self {
            presentation,
            surface,
            timings,
        }
    }

    /// Introductory views, in the order they must be shown.
    pub fn intro_sequence(&self) -> Vec<View> {
        IntroStep::ALL.into_iter().map(View::Intro).collect()
    }

    /// Render `view` and wait for its result.
    pub async fn show(&self, view: View) -> Result<ViewResult, FlowError> {
        let spec = self.spec(&view);
        debug!(view = %view, interactive = spec.is_interactive(), "showing view");
        let result = self.presentation.show(spec).await?;
        debug!(view = %view, ?result, "view resolved");
        Ok(result)
    }

    pub fn spec(&self, view: &View) -> ScreenSpec {
        let name = view.name();
        match view {
            View::Loading => self.feedback(name, "loading", FeedbackTone::Loading),
            View::Saving => self.feedback(name, "saving", FeedbackTone::Saving),
            View::Deleting => self.feedback(name, "deleting", FeedbackTone::Deleting),
            View::Intro(step) => self.intro(name, *step),
            View::Main => self.interactive(
                name,
                ScreenContent::new("Continuity")
                    .paragraph(
                        "Now you have progress. If you refresh the browser, I will remember it.",
                    )
                    .paragraph("Alternatively:"),
                vec![
                    ActionDescriptor::new("Delete progress")
                        .styled(ActionStyle::Danger)
                        .keyed(ActionKey::DeleteProgress),
                    ActionDescriptor::new("Continue")
                        .styled(ActionStyle::Neutral)
                        .keyed(ActionKey::ContinueSomething),
                ],
            ),
            View::Aside => self.interactive(
                name,
                ScreenContent::default().image(ASIDE_IMAGE_SRC, ASIDE_IMAGE_ALT),
                vec![ActionDescriptor::new("Back").styled(ActionStyle::Different)],
            ),
            View::Error { message } => self
                .interactive(
                    name,
                    ScreenContent::new("Error").paragraph(message.clone()),
                    vec![ActionDescriptor::new("Reload the page").styled(ActionStyle::Absurd)],
                )
                .with_hooks(Arc::new(StyleOverride::scoped(
                    Arc::clone(&self.surface),
                    StyleOverride::from_pairs(&[
                        ("background", "linear-gradient(to bottom, violet, lightblue)"),
                        ("color", "black"),
                        ("transition", "all 0.5s"),
                    ]),
                    self.timings.exit_delay,
                ))),
            View::DeadEnd { reason } => ScreenSpec::message(
                name,
                ScreenContent::new("End of the line.").paragraph(reason.clone()),
            )
            .with_hooks(Arc::new(StyleOverride::persistent(
                Arc::clone(&self.surface),
                StyleOverride::from_pairs(&[
                    (
                        "background",
                        "linear-gradient(135deg, white -60%, transparent 30%), \
                         linear-gradient(135deg, #fd3 50%, black 300%)",
                    ),
                    ("color", "black"),
                    ("transition", "all 0.5s"),
                ]),
            ))),
        }
    }

    fn intro(&self, name: String, step: IntroStep) -> ScreenSpec {
        let (content, label) = match step {
            IntroStep::Welcome => (
                ScreenContent::new("Hello,").paragraph("You seem to be here for the first time."),
                "Let's begin!",
            ),
            IntroStep::Promises => (
                ScreenContent::new("Promises").paragraph(
                    "In this demo, awaited steps chain and transition between views.",
                ),
                "What else?",
            ),
            IntroStep::AwaitedViews => (
                ScreenContent::new("await View()")
                    .paragraph("Views are awaited to unlock the flow ahead.")
                    .paragraph("UI transitions are guaranteed between all screens."),
                "Go on",
            ),
            IntroStep::Interactive => (
                ScreenContent::new("Let's be interactive")
                    .paragraph("After this view, your progress will be saved.")
                    .paragraph("You will switch from this introduction to a continuation flow."),
                "Save it",
            ),
        };
        self.interactive(name, content, vec![ActionDescriptor::new(label)])
    }

    fn interactive(
        &self,
        name: String,
        content: ScreenContent,
        actions: Vec<ActionDescriptor>,
    ) -> ScreenSpec {
        ScreenSpec::interactive(name, content, actions, self.timings.transition)
    }

    fn feedback(&self, name: String, text: &str, tone: FeedbackTone) -> ScreenSpec {
        ScreenSpec::feedback(name, text, tone, self.timings.feedback)
    }
}

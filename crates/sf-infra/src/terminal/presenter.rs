use std::sync::Arc;

use async_trait::async_trait;
use sf_core::ports::{PresentationError, PresentationPort, StyleSurfacePort};
use sf_core::view::{ScreenLayout, ScreenScope, ScreenSpec, StyleMap, ViewResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, trace};

use super::render::{choice_prompt, render_screen};

struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn write(&mut self, text: &str) -> Result<(), PresentationError> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .map_err(render_error)?;
        self.writer.flush().await.map_err(render_error)
    }

    /// Read lines until one names an action. `None` means input is closed.
    async fn choose(&mut self, count: usize) -> Result<Option<usize>, PresentationError> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .await
                .map_err(render_error)?;
            if read == 0 {
                return Ok(None);
            }
            if let Some(index) = parse_choice(line.trim(), count) {
                return Ok(Some(index));
            }
            trace!(input = line.trim(), count, "choice rejected");
            self.write(&choice_prompt(count)).await?;
        }
    }
}

/// Presentation port over a line-oriented text terminal.
///
/// `show` calls are serialized: the surface holds a single screen at a time.
pub struct TerminalPresenter<R, W> {
    terminal: Mutex<Terminal<R, W>>,
    surface: Option<Arc<dyn StyleSurfacePort>>,
}

impl<R, W> TerminalPresenter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            terminal: Mutex::new(Terminal { reader, writer }),
            surface: None,
        }
    }

    /// Describe the surface's active style on every rendered screen.
    pub fn with_surface(mut self, surface: Arc<dyn StyleSurfacePort>) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn into_parts(self) -> (R, W) {
        let terminal = self.terminal.into_inner();
        (terminal.reader, terminal.writer)
    }

    fn style(&self) -> StyleMap {
        self.surface
            .as_ref()
            .map(|surface| surface.snapshot())
            .unwrap_or_default()
    }

    async fn display(
        &self,
        terminal: &mut Terminal<R, W>,
        screen: &ScreenSpec,
    ) -> Result<ViewResult, PresentationError> {
        terminal.write(&render_screen(screen, &self.style())).await?;

        match &screen.layout {
            ScreenLayout::Feedback { duration, .. } => {
                tokio::time::sleep(*duration).await;
                Ok(ViewResult::Void)
            }
            ScreenLayout::Message => Ok(ViewResult::Void),
            ScreenLayout::Interactive { actions } if actions.is_empty() => Err(
                PresentationError::Render(format!("screen `{}` offers no actions", screen.name)),
            ),
            ScreenLayout::Interactive { actions } => {
                let index = terminal
                    .choose(actions.len())
                    .await?
                    .ok_or(PresentationError::SurfaceClosed)?;
                Ok(ViewResult::keyed(actions[index].key))
            }
        }
    }
}

#[async_trait]
impl<R, W> PresentationPort for TerminalPresenter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn show(&self, screen: ScreenSpec) -> Result<ViewResult, PresentationError> {
        let mut terminal = self.terminal.lock().await;
        debug!(screen = %screen.name, "screen displayed");

        let scope: ScreenScope = screen.enter();
        let result = self.display(&mut terminal, &screen).await;
        scope.exit().await;

        let result = result?;
        if screen.is_interactive() && !screen.transition.is_zero() {
            tokio::time::sleep(screen.transition).await;
        }
        debug!(screen = %screen.name, ?result, "screen resolved");
        Ok(result)
    }
}

fn parse_choice(input: &str, count: usize) -> Option<usize> {
    if input.is_empty() {
        return (count == 1).then_some(0);
    }
    match input.parse::<usize>() {
        Ok(choice) if (1..=count).contains(&choice) => Some(choice - 1),
        _ => None,
    }
}

fn render_error(err: std::io::Error) -> PresentationError {
    PresentationError::Render(err.to_string())
}

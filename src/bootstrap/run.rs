//! Session loop.
//!
//! A successful reload starts a new session from entry. A dead end or the
//! terminal input closing ends the program.

use sf_app::{FlowError, FlowOrchestrator};
use sf_core::ports::PresentationError;
use sf_core::view::View;
use sf_core::SessionOutcome;
use tracing::{info, warn};

/// Why the host stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    DeadEnd { reason: String },
    InputClosed,
    Previewed { view: String },
}

/// Run sessions until one ends for good.
pub async fn run_sessions(orchestrator: &FlowOrchestrator) -> Result<ExitReason, FlowError> {
    let mut session = 0usize;
    loop {
        session += 1;
        info!(session, "session started");
        match orchestrator.run().await {
            Ok(SessionOutcome::Reloaded) => {
                info!(session, "session reloaded, starting over");
            }
            Ok(SessionOutcome::DeadEnd { reason }) => {
                warn!(session, %reason, "session reached a dead end");
                return Ok(ExitReason::DeadEnd {
                    reason: reason.to_string(),
                });
            }
            Err(FlowError::Presentation(PresentationError::SurfaceClosed)) => {
                info!(session, "input closed");
                return Ok(ExitReason::InputClosed);
            }
            Err(err) => return Err(err),
        }
    }
}

/// Show a single view by name instead of running the flow.
pub async fn preview(orchestrator: &FlowOrchestrator, name: &str) -> anyhow::Result<ExitReason> {
    let view = View::from_name(name).ok_or_else(|| anyhow::anyhow!("unknown view `{name}`"))?;
    info!(view = %view, "previewing view");
    match orchestrator.views().show(view).await {
        Ok(_) | Err(FlowError::Presentation(PresentationError::SurfaceClosed)) => {
            Ok(ExitReason::Previewed {
                view: name.trim().to_string(),
            })
        }
        Err(err) => Err(err.into()),
    }
}

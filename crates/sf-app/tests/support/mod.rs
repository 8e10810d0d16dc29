//! Shared fakes for flow tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use sf_app::{FlowOrchestrator, Timings, ViewCatalog};
use sf_core::ports::{
    PresentationError, PresentationPort, ProgressStorePort, ReloadPort, StyleSurfacePort,
};
use sf_core::view::{ActionKey, ScreenSpec, StyleMap, ViewResult};
use sf_core::{ErrorSignal, Progress, ProgressToken};

mock! {
    pub Reloader {}

    #[async_trait]
    impl ReloadPort for Reloader {
        async fn reload(&self) -> Result<(), ErrorSignal>;
    }
}

/// Presentation fake that answers interactive screens from a script and
/// records every screen it was asked to show.
///
/// Once the script runs out the surface reports itself closed.
#[derive(Default)]
pub struct ScriptedPresenter {
    script: Mutex<VecDeque<ViewResult>>,
    shown: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedPresenter {
    pub fn new(script: impl IntoIterator<Item = ViewResult>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into_iter().collect()),
            ..Self::default()
        })
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PresentationPort for ScriptedPresenter {
    async fn show(&self, screen: ScreenSpec) -> Result<ViewResult, PresentationError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.shown.lock().unwrap().push(screen.name.clone());

        let scope = screen.enter();
        tokio::task::yield_now().await;
        let result = if screen.is_interactive() {
            self.script.lock().unwrap().pop_front()
        } else {
            Some(ViewResult::Void)
        };
        scope.exit().await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result.ok_or(PresentationError::SurfaceClosed)
    }
}

/// In-memory progress store counting every access.
pub struct FakeStore {
    saved: Mutex<Option<Progress>>,
    unreadable: bool,
    fail_writes: bool,
    calls: AtomicUsize,
}

impl FakeStore {
    pub fn empty() -> Arc<Self> {
        Self::build(None, false, false)
    }

    pub fn with_progress() -> Arc<Self> {
        Self::build(Some(Progress::initial()), false, false)
    }

    pub fn unreadable() -> Arc<Self> {
        Self::build(None, true, false)
    }

    pub fn failing_writes() -> Arc<Self> {
        Self::build(None, false, true)
    }

    fn build(saved: Option<Progress>, unreadable: bool, fail_writes: bool) -> Arc<Self> {
        Arc::new(Self {
            saved: Mutex::new(saved),
            unreadable,
            fail_writes,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn saved(&self) -> Option<Progress> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressStorePort for FakeStore {
    async fn load(&self) -> ProgressToken {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreadable {
            return ProgressToken::Unreadable;
        }
        self.saved.lock().unwrap().clone().into()
    }

    async fn save(&self, progress: &Progress) -> Result<(), ErrorSignal> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(ErrorSignal::StorageUnreadable);
        }
        *self.saved.lock().unwrap() = Some(progress.clone());
        Ok(())
    }

    async fn delete(&self) -> Result<(), ErrorSignal> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(ErrorSignal::StorageUnreadable);
        }
        self.saved.lock().unwrap().take();
        Ok(())
    }
}

/// Style surface that remembers every state it went through.
#[derive(Default)]
pub struct RecordingSurface {
    style: Mutex<StyleMap>,
    history: Mutex<Vec<StyleMap>>,
}

impl RecordingSurface {
    pub fn history(&self) -> Vec<StyleMap> {
        self.history.lock().unwrap().clone()
    }
}

impl StyleSurfacePort for RecordingSurface {
    fn apply(&self, overrides: &StyleMap) -> StyleMap {
        let mut style = self.style.lock().unwrap();
        let previous = overrides
            .iter()
            .map(|(key, value)| {
                let old = style.insert(key.clone(), value.clone()).unwrap_or_default();
                (key.clone(), old)
            })
            .collect();
        self.history.lock().unwrap().push(style.clone());
        previous
    }

    fn restore(&self, previous: StyleMap) {
        let mut style = self.style.lock().unwrap();
        for (key, value) in previous {
            if value.is_empty() {
                style.remove(&key);
            } else {
                style.insert(key, value);
            }
        }
        self.history.lock().unwrap().push(style.clone());
    }

    fn snapshot(&self) -> StyleMap {
        self.style.lock().unwrap().clone()
    }
}

pub fn forward() -> ViewResult {
    ViewResult::keyed(ActionKey::Forward)
}

pub fn keyed(key: ActionKey) -> ViewResult {
    ViewResult::keyed(key)
}

pub fn catalog(presenter: Arc<ScriptedPresenter>, surface: Arc<RecordingSurface>) -> ViewCatalog {
    ViewCatalog::new(presenter, surface, Timings::immediate())
}

pub fn orchestrator(
    presenter: Arc<ScriptedPresenter>,
    store: Arc<FakeStore>,
    reloader: MockReloader,
) -> FlowOrchestrator {
    FlowOrchestrator::new(
        catalog(presenter, Arc::new(RecordingSurface::default())),
        store,
        Arc::new(reloader),
    )
    .expect("resume branches cover the main view")
}

/// Reloader that must never be called.
pub fn unused_reloader() -> MockReloader {
    let mut reloader = MockReloader::new();
    reloader.expect_reload().never();
    reloader
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

use std::sync::Mutex;

use sf_core::ports::StyleSurfacePort;
use sf_core::view::StyleMap;

/// Style state of a surface that has no styling of its own, such as a
/// terminal. The presenter reads it back to describe the active look.
#[derive(Debug, Default)]
pub struct InMemoryStyleSurface {
    style: Mutex<StyleMap>,
}

impl InMemoryStyleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_style<R>(&self, f: impl FnOnce(&mut StyleMap) -> R) -> R {
        let mut style = self
            .style
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut style)
    }
}

impl StyleSurfacePort for InMemoryStyleSurface {
    fn apply(&self, overrides: &StyleMap) -> StyleMap {
        self.with_style(|style| {
            overrides
                .iter()
                .map(|(property, value)| {
                    let previous = style
                        .insert(property.clone(), value.clone())
                        .unwrap_or_default();
                    (property.clone(), previous)
                })
                .collect()
        })
    }

    fn restore(&self, previous: StyleMap) {
        self.with_style(|style| {
            for (property, value) in previous {
                if value.is_empty() {
                    style.remove(&property);
                } else {
                    style.insert(property, value);
                }
            }
        })
    }

    fn snapshot(&self) -> StyleMap {
        self.with_style(|style| style.clone())
    }
}

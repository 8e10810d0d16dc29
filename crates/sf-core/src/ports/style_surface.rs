use crate::view::StyleMap;

/// Style state of the shared display surface.
pub trait StyleSurfacePort: Send + Sync {
    /// Apply `overrides` and return the previous values of the touched
    /// properties. Properties that were unset are reported with an empty value.
    fn apply(&self, overrides: &StyleMap) -> StyleMap;

    /// Put back values captured by [`StyleSurfacePort::apply`]; empty values
    /// unset the property.
    fn restore(&self, previous: StyleMap);

    fn snapshot(&self) -> StyleMap;
}

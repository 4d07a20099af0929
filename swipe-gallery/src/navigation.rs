/// Keys the gallery reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

impl NavKey {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(NavKey::Left),
            "ArrowRight" => Some(NavKey::Right),
            _ => None,
        }
    }
}

/// Whether the pointer or keyboard focus is on one gallery instance.
///
/// Keyboard events are delivered page-wide; an instance only acts on them
/// while it is in scope, so several galleries on one page never react to
/// the same key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerScope {
    pub hovered: bool,
    pub focused: bool,
}

impl PointerScope {
    pub fn is_active(&self) -> bool {
        self.hovered || self.focused
    }
}

use crate::action::Action;
use mazewalk_common::ViewMode;
use std::collections::HashMap;
use std::str::FromStr;

/// Physical keys the maze understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Digit1,
    Digit2,
    Digit3,
    F1,
    F2,
    F3,
    Escape,
}

/// Error for key names that do not correspond to a [`Key`].
#[derive(Debug, thiserror::Error)]
#[error("unknown key name: {0:?}")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim().to_ascii_lowercase().as_str() {
            "up" | "arrowup" => Key::ArrowUp,
            "down" | "arrowdown" => Key::ArrowDown,
            "left" | "arrowleft" => Key::ArrowLeft,
            "right" | "arrowright" => Key::ArrowRight,
            "1" => Key::Digit1,
            "2" => Key::Digit2,
            "3" => Key::Digit3,
            "f1" => Key::F1,
            "f2" => Key::F2,
            "f3" => Key::F3,
            "esc" | "escape" => Key::Escape,
            _ => return Err(UnknownKey(s.to_string())),
        };
        Ok(key)
    }
}

/// Binding table from keys to actions. Only key presses produce actions.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<Key, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let bindings = HashMap::from([
            (Key::ArrowUp, Action::Advance),
            (Key::ArrowLeft, Action::TurnLeft),
            (Key::ArrowRight, Action::TurnRight),
            (Key::Digit1, Action::SelectView(ViewMode::FirstPerson)),
            (Key::Digit2, Action::SelectView(ViewMode::ThirdPerson)),
            (Key::Digit3, Action::SelectView(ViewMode::Overhead)),
            (Key::F1, Action::SelectView(ViewMode::FirstPerson)),
            (Key::F2, Action::SelectView(ViewMode::ThirdPerson)),
            (Key::F3, Action::SelectView(ViewMode::Overhead)),
            (Key::Escape, Action::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyMap {
    /// A map with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key` to `action`, returning the previous binding.
    pub fn bind(&mut self, key: Key, action: Action) -> Option<Action> {
        self.bindings.insert(key, action)
    }

    pub fn unbind(&mut self, key: Key) -> Option<Action> {
        self.bindings.remove(&key)
    }

    /// Translate a key event. Releases and unbound keys yield `None`.
    pub fn map(&self, key: Key, pressed: bool) -> Option<Action> {
        if !pressed {
            return None;
        }
        let action = self.bindings.get(&key).copied();
        if action.is_none() {
            tracing::trace!(?key, "unbound key");
        }
        action
    }
}

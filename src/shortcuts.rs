/// Keyboard shortcuts
use crate::url_state::ALL_CATEGORY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `/`
    FocusSearch,
    /// `Escape`
    ClearSearch,
    /// Ctrl/Cmd+1
    ShowAll,
    /// Ctrl/Cmd+2
    ShowLatest,
}

impl Shortcut {
    /// Whether the browser's default action for the key should be suppressed
    pub fn prevents_default(self) -> bool {
        !matches!(self, Shortcut::ClearSearch)
    }

    /// Category the shortcut switches to, if any
    pub fn category(self, latest_category: &str) -> Option<&str> {
        match self {
            Shortcut::ShowAll => Some(ALL_CATEGORY),
            Shortcut::ShowLatest => Some(latest_category),
            Shortcut::FocusSearch | Shortcut::ClearSearch => None,
        }
    }
}

/// The parts of a key event shortcuts care about
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    /// Focus is inside a text input
    pub in_text_input: bool,
}

impl KeyPress {
    pub fn new(key: &str) -> Self {
        KeyPress {
            key: key.to_string(),
            ..KeyPress::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn in_text_input(mut self) -> Self {
        self.in_text_input = true;
        self
    }

    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Map a key press to a shortcut; typing into an input never triggers one
pub fn resolve(press: &KeyPress) -> Option<Shortcut> {
    if press.in_text_input {
        return None;
    }

    match press.key.as_str() {
        "/" => Some(Shortcut::FocusSearch),
        "Escape" => Some(Shortcut::ClearSearch),
        "1" if press.command() => Some(Shortcut::ShowAll),
        "2" if press.command() => Some(Shortcut::ShowLatest),
        _ => None,
    }
}

/// Tag names that count as text inputs
pub fn is_text_input_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

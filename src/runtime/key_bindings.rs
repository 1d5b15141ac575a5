use crate::runtime::intent::Intent;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::widgets::traits::TextAction;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

#[derive(Default)]
pub struct KeyBindings {
    bindings: HashMap<KeyBinding, Intent>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut bindings = Self::default();
        bindings.install_defaults();
        bindings
    }

    pub fn bind(&mut self, key: KeyBinding, intent: Intent) {
        self.bindings.insert(key, intent);
    }

    /// Keys without a binding fall through to the focused widget.
    pub fn resolve(&self, event: KeyEvent) -> Option<Intent> {
        self.bindings.get(&KeyBinding::from_event(event)).cloned()
    }

    fn install_defaults(&mut self) {
        self.bind(KeyBinding::ctrl(KeyCode::Char('c')), Intent::Exit);
        self.bind(KeyBinding::key(KeyCode::Esc), Intent::Exit);
        self.bind(KeyBinding::key(KeyCode::Tab), Intent::NextFocus);
        self.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Intent::PrevFocus,
        );
        self.bind(
            KeyBinding::ctrl(KeyCode::Backspace),
            Intent::TextAction(TextAction::DeleteWordLeft),
        );
        self.bind(
            KeyBinding::ctrl(KeyCode::Char('w')),
            Intent::TextAction(TextAction::DeleteWordLeft),
        );
        self.bind(
            KeyBinding::ctrl(KeyCode::Delete),
            Intent::TextAction(TextAction::DeleteWordRight),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::KeyBindings;
    use crate::runtime::intent::Intent;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn plain_characters_are_unbound() {
        let bindings = KeyBindings::new();
        assert!(bindings.resolve(KeyEvent::char('b')).is_none());
    }

    #[test]
    fn tab_cycles_focus_and_ctrl_c_exits() {
        let bindings = KeyBindings::new();
        assert!(matches!(
            bindings.resolve(KeyEvent::key(KeyCode::Tab)),
            Some(Intent::NextFocus)
        ));
        assert!(matches!(
            bindings.resolve(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }),
            Some(Intent::Exit)
        ));
    }
}

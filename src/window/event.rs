//! Platform-independent mouse and keyboard events, converted from winit.

/// Mouse button type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// The keys the sandbox responds to. Other keys are dropped at the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Spawn a circle.
    C,
    /// Spawn a box.
    B,
    Backspace,
    Delete,
    Escape,
}

impl Key {
    /// Convert from winit key. Letters match regardless of case.
    pub fn from_winit(key: &winit::keyboard::Key) -> Option<Self> {
        use winit::keyboard::{Key as WKey, NamedKey};

        match key {
            WKey::Character(c) => match c.chars().next()?.to_ascii_lowercase() {
                'c' => Some(Key::C),
                'b' => Some(Key::B),
                _ => None,
            },
            WKey::Named(NamedKey::Backspace) => Some(Key::Backspace),
            WKey::Named(NamedKey::Delete) => Some(Key::Delete),
            WKey::Named(NamedKey::Escape) => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Modifier key state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn from_winit(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

/// Input event.
#[derive(Debug, Clone)]
pub enum Event {
    MousePress {
        button: MouseButton,
        position: (f32, f32),
        modifiers: Modifiers,
        handled: bool,
    },

    MouseRelease {
        button: MouseButton,
        position: (f32, f32),
        modifiers: Modifiers,
        handled: bool,
    },

    /// Cursor moved. `position` is in physical pixels from the top-left.
    MouseMotion {
        delta: (f32, f32),
        position: (f32, f32),
        modifiers: Modifiers,
        handled: bool,
    },

    KeyPress {
        key: Key,
        modifiers: Modifiers,
        handled: bool,
    },

    /// The window stopped receiving input. A button held at that moment will
    /// never report its release.
    FocusLost { handled: bool },

    Resize { width: u32, height: u32 },
}

impl Event {
    /// Check if the event has been handled.
    pub fn is_handled(&self) -> bool {
        match self {
            Event::MousePress { handled, .. }
            | Event::MouseRelease { handled, .. }
            | Event::MouseMotion { handled, .. }
            | Event::KeyPress { handled, .. }
            | Event::FocusLost { handled } => *handled,
            Event::Resize { .. } => false,
        }
    }

    /// Mark the event as handled.
    pub fn set_handled(&mut self) {
        match self {
            Event::MousePress { handled, .. }
            | Event::MouseRelease { handled, .. }
            | Event::MouseMotion { handled, .. }
            | Event::KeyPress { handled, .. }
            | Event::FocusLost { handled } => *handled = true,
            Event::Resize { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{Key as WKey, ModifiersState, NamedKey, SmolStr};

    #[test]
    fn test_character_keys_ignore_case() {
        let lower = WKey::Character(SmolStr::new("c"));
        let upper = WKey::Character(SmolStr::new("B"));
        assert_eq!(Key::from_winit(&lower), Some(Key::C));
        assert_eq!(Key::from_winit(&upper), Some(Key::B));
        assert_eq!(Key::from_winit(&WKey::Character(SmolStr::new("x"))), None);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            Key::from_winit(&WKey::Named(NamedKey::Escape)),
            Some(Key::Escape)
        );
        assert_eq!(
            Key::from_winit(&WKey::Named(NamedKey::Backspace)),
            Some(Key::Backspace)
        );
        assert_eq!(
            Key::from_winit(&WKey::Named(NamedKey::Delete)),
            Some(Key::Delete)
        );
        assert_eq!(Key::from_winit(&WKey::Named(NamedKey::F1)), None);
    }

    #[test]
    fn test_modifiers_from_winit() {
        let m = Modifiers::from_winit(ModifiersState::SHIFT | ModifiersState::ALT);
        assert!(m.shift && m.alt && !m.ctrl);
        assert!(m.any());
        assert!(!Modifiers::from_winit(ModifiersState::empty()).any());
    }

    #[test]
    fn test_set_handled() {
        let mut lost = Event::FocusLost { handled: false };
        assert!(!lost.is_handled());
        lost.set_handled();
        assert!(lost.is_handled());

        let mut resize = Event::Resize {
            width: 10,
            height: 10,
        };
        resize.set_handled();
        assert!(!resize.is_handled());
    }
}

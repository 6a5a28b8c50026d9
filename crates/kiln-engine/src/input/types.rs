/// Keyboard key identifier.
///
/// Only the keys the harness can bind (the quit key) are named; everything else
/// maps to `Key::Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

const LETTERS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
];

impl Key {
    /// Parses a key name as written in configuration (`"q"`, `"Q"`, `"escape"`).
    pub fn from_name(name: &str) -> Option<Key> {
        let name = name.trim();
        match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => return Some(Key::Escape),
            "enter" | "return" => return Some(Key::Enter),
            "space" => return Some(Key::Space),
            _ => {}
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
                Some(LETTERS[index])
            }
            _ => None,
        }
    }
}

/// Events the frame loop reacts to.
///
/// The runtime translates window system events into these and queues them until
/// the next iteration drains the queue.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopEvent {
    /// The user asked to close the window.
    Quit,
    /// A key went down.
    KeyDown(Key),
}

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{Key, LoopEvent};

/// Translates a winit `WindowEvent` into a frame-loop event.
///
/// Only close requests and key presses are represented; everything else
/// returns `None`.
pub fn translate_window_event(event: &WindowEvent) -> Option<LoopEvent> {
    match event {
        WindowEvent::CloseRequested => Some(LoopEvent::Quit),

        WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
            Some(LoopEvent::KeyDown(map_key(event.physical_key)))
        }

        _ => None,
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    let code = match pk {
        PhysicalKey::Code(code) => code,
        // NativeKeyCode has no stable numeric form in winit 0.30.
        PhysicalKey::Unidentified(_) => return Key::Unknown(0),
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Space => Key::Space,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_request_is_quit() {
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested),
            Some(LoopEvent::Quit)
        );
    }

    #[test]
    fn unrelated_events_are_dropped() {
        assert_eq!(translate_window_event(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn letter_codes_map_to_letters() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyQ)), Key::Q);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn unmapped_codes_keep_the_platform_code() {
        let key = map_key(PhysicalKey::Code(KeyCode::F5));
        assert_eq!(key, Key::Unknown(KeyCode::F5 as u32));
    }
}

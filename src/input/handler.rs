use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::game::{Action, Direction};

/// What a play-mode input event means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(Action),
    Pause,
    Restart,
    Quit,
    None,
}

/// What a sketch-mode key means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchCommand {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    PenUp,
    PenDown,
    Clear,
    Quit,
    None,
}

/// Translates key and mouse events into game intents. Holds the pending
/// swipe origin between a mouse press and its release.
pub struct InputHandler {
    swipe_min_cells: u16,
    swipe_origin: Option<(u16, u16)>,
}

impl InputHandler {
    pub fn new(swipe_min_cells: u16) -> Self {
        Self {
            swipe_min_cells,
            swipe_origin: None,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Game(Action::Turn(Direction::Up)),
            KeyCode::Down => KeyAction::Game(Action::Turn(Direction::Down)),
            KeyCode::Left => KeyAction::Game(Action::Turn(Direction::Left)),
            KeyCode::Right => KeyAction::Game(Action::Turn(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Game(Action::Turn(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Game(Action::Turn(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Game(Action::Turn(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Game(Action::Turn(Direction::Right))
            }

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::Pause,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }

    /// Track left-button press/release pairs and resolve them into a swipe
    /// along the dominant displacement axis. Drags shorter than the
    /// threshold are ignored.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> KeyAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe_origin = Some((mouse.column, mouse.row));
                KeyAction::None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some((ox, oy)) = self.swipe_origin.take() else {
                    return KeyAction::None;
                };
                let dx = mouse.column as i32 - ox as i32;
                let dy = mouse.row as i32 - oy as i32;
                let min = self.swipe_min_cells as i32;

                let direction = if dx.abs() > dy.abs() {
                    if dx >= min {
                        Some(Direction::Right)
                    } else if dx <= -min {
                        Some(Direction::Left)
                    } else {
                        None
                    }
                } else if dy >= min {
                    Some(Direction::Down)
                } else if dy <= -min {
                    Some(Direction::Up)
                } else {
                    None
                };

                match direction {
                    Some(dir) => KeyAction::Game(Action::Turn(dir)),
                    None => KeyAction::None,
                }
            }
            _ => KeyAction::None,
        }
    }

}

/// Key mapping for sketch mode; stateless, unlike swipe tracking
pub fn sketch_command(key: KeyEvent) -> SketchCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return SketchCommand::Quit;
    }

    match key.code {
        KeyCode::Up => SketchCommand::Forward,
        KeyCode::Down => SketchCommand::Backward,
        KeyCode::Left => SketchCommand::TurnLeft,
        KeyCode::Right => SketchCommand::TurnRight,
        KeyCode::Char('u') | KeyCode::Char('U') => SketchCommand::PenUp,
        KeyCode::Char('d') | KeyCode::Char('D') => SketchCommand::PenDown,
        KeyCode::Char('c') | KeyCode::Char('C') => SketchCommand::Clear,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => SketchCommand::Quit,
        _ => SketchCommand::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> InputHandler {
        InputHandler::new(4)
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn release(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys() {
        let handler = handler();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(up),
            KeyAction::Game(Action::Turn(Direction::Up))
        );

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(left),
            KeyAction::Game(Action::Turn(Direction::Left))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = handler();

        for (ch, dir) in [
            ('w', Direction::Up),
            ('a', Direction::Left),
            ('s', Direction::Down),
            ('d', Direction::Right),
        ] {
            let key = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
            assert_eq!(
                handler.handle_key_event(key),
                KeyAction::Game(Action::Turn(dir))
            );
        }
    }

    #[test]
    fn test_pause_key() {
        let handler = handler();
        let p = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(p), KeyAction::Pause);
    }

    #[test]
    fn test_quit_keys() {
        let handler = handler();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), KeyAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_restart_key() {
        let handler = handler();
        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(r), KeyAction::Restart);
    }

    #[test]
    fn test_unknown_key() {
        let handler = handler();
        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), KeyAction::None);
    }

    #[test]
    fn test_horizontal_swipe() {
        let mut handler = handler();
        assert_eq!(handler.handle_mouse_event(press(10, 10)), KeyAction::None);
        assert_eq!(
            handler.handle_mouse_event(release(20, 11)),
            KeyAction::Game(Action::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_vertical_swipe() {
        let mut handler = handler();
        handler.handle_mouse_event(press(10, 20));
        assert_eq!(
            handler.handle_mouse_event(release(11, 10)),
            KeyAction::Game(Action::Turn(Direction::Up))
        );
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut handler = handler();
        handler.handle_mouse_event(press(10, 10));
        assert_eq!(handler.handle_mouse_event(release(12, 10)), KeyAction::None);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut handler = handler();
        assert_eq!(handler.handle_mouse_event(release(30, 30)), KeyAction::None);
    }

    #[test]
    fn test_swipe_origin_consumed_by_release() {
        let mut handler = handler();
        handler.handle_mouse_event(press(10, 10));
        handler.handle_mouse_event(release(20, 10));
        // A stray second release resolves nothing
        assert_eq!(handler.handle_mouse_event(release(40, 10)), KeyAction::None);
    }

    #[test]
    fn test_sketch_keys() {
        for (code, command) in [
            (KeyCode::Up, SketchCommand::Forward),
            (KeyCode::Down, SketchCommand::Backward),
            (KeyCode::Left, SketchCommand::TurnLeft),
            (KeyCode::Right, SketchCommand::TurnRight),
            (KeyCode::Char('u'), SketchCommand::PenUp),
            (KeyCode::Char('d'), SketchCommand::PenDown),
            (KeyCode::Char('c'), SketchCommand::Clear),
            (KeyCode::Char('q'), SketchCommand::Quit),
            (KeyCode::Char('x'), SketchCommand::None),
        ] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(sketch_command(key), command);
        }
    }
}

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use super::state::Side;
use crate::config::KeyBindings;

/// Discrete command for one paddle. Each maps 1:1 to a paddle operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddleCommand {
    MoveUp,
    MoveDown,
    AimUp,
    AimDown,
    ClearAim,
    Fire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    Rematch,
    Command(Side, PaddleCommand),
}

/// Key bindings resolved from config strings into crossterm key codes once,
/// at mode start.
pub struct KeyMap {
    entries: Vec<(KeyCode, InputAction)>,
}

impl KeyMap {
    pub fn from_bindings(keys: &KeyBindings) -> Self {
        use InputAction::{Command, Quit, Rematch};
        use PaddleCommand::*;

        let bindings = [
            (&keys.quit, Quit),
            (&keys.rematch, Rematch),
            (&keys.left_up, Command(Side::Left, MoveUp)),
            (&keys.left_down, Command(Side::Left, MoveDown)),
            (&keys.left_aim_up, Command(Side::Left, AimUp)),
            (&keys.left_aim_down, Command(Side::Left, AimDown)),
            (&keys.left_aim_clear, Command(Side::Left, ClearAim)),
            (&keys.left_fire, Command(Side::Left, Fire)),
            (&keys.right_up, Command(Side::Right, MoveUp)),
            (&keys.right_down, Command(Side::Right, MoveDown)),
            (&keys.right_aim_up, Command(Side::Right, AimUp)),
            (&keys.right_aim_down, Command(Side::Right, AimDown)),
            (&keys.right_aim_clear, Command(Side::Right, ClearAim)),
            (&keys.right_fire, Command(Side::Right, Fire)),
        ];

        let entries = bindings
            .iter()
            .filter_map(|(name, action)| parse_key(name.as_str()).map(|code| (code, *action)))
            .collect();

        Self { entries }
    }

    pub fn lookup(&self, code: KeyCode) -> Option<InputAction> {
        let code = normalize(code);
        self.entries
            .iter()
            .find(|(bound, _)| *bound == code)
            .map(|(_, action)| *action)
    }
}

/// Parse a config key name ("W", "Space", "Up", ...) into a key code.
/// Unknown names yield None and the binding is simply dead.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let code = match name.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        lower => {
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

// Bindings are stored lowercase; fold incoming chars the same way so 'W'
// and 'w' both match.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Drain all pending key presses into actions. Non-blocking: returns an
/// empty list when no input is waiting. Esc always quits, regardless of
/// bindings.
pub fn poll_input(keys: &KeyMap) -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Esc {
                actions.push(InputAction::Quit);
                continue;
            }
            if let Some(action) = keys.lookup(key.code) {
                actions.push(action);
            }
        }
    }

    Ok(actions)
}

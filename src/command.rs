use crate::options::{CellSize, Speed};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Space,
    Speed(Speed),
    Size(CellSize),
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (KeyModifiers::NONE, KeyCode::Char('1')) => Some(Command::Speed(Speed::Easy)),
            (KeyModifiers::NONE, KeyCode::Char('2')) => Some(Command::Speed(Speed::Medium)),
            (KeyModifiers::NONE, KeyCode::Char('3')) => Some(Command::Speed(Speed::Hard)),
            (KeyModifiers::NONE, KeyCode::Char('4')) => Some(Command::Size(CellSize::Small)),
            (KeyModifiers::NONE, KeyCode::Char('5')) => Some(Command::Size(CellSize::Normal)),
            (KeyModifiers::NONE, KeyCode::Char('6')) => Some(Command::Size(CellSize::Large)),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }
}

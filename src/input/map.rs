use crate::game::Move;
use crate::{Result, Twenty48Error};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt;
use std::str::FromStr;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Undo,
    Reset,
    RotateView,
    Quit,
}

/// Map a key press to a command. Releases and repeats are ignored.
///
/// Arrows move, `u` undoes, `s` starts over, `r` rotates the view, and
/// `q`, Esc or Ctrl-C quit.
pub fn map_key(event: KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Up => Some(Command::Move(Move::Up)),
        KeyCode::Down => Some(Command::Move(Move::Down)),
        KeyCode::Left => Some(Command::Move(Move::Left)),
        KeyCode::Right => Some(Command::Move(Move::Right)),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(Command::Undo),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Reset),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::RotateView),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

impl FromStr for Command {
    type Err = Twenty48Error;

    fn from_str(token: &str) -> Result<Self> {
        // Single letters are case-sensitive: `U D L R` move, lower-case letters act.
        let command = match token {
            "U" => Command::Move(Move::Up),
            "D" => Command::Move(Move::Down),
            "L" => Command::Move(Move::Left),
            "R" => Command::Move(Move::Right),
            "z" => Command::Undo,
            "n" => Command::Reset,
            "t" => Command::RotateView,
            "q" => Command::Quit,
            _ => match token.to_ascii_lowercase().as_str() {
                "up" => Command::Move(Move::Up),
                "down" => Command::Move(Move::Down),
                "left" => Command::Move(Move::Left),
                "right" => Command::Move(Move::Right),
                "undo" => Command::Undo,
                "reset" => Command::Reset,
                "rotate" => Command::RotateView,
                "quit" => Command::Quit,
                _ => return Err(Twenty48Error::Script(format!("unknown command '{}'", token))),
            },
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(direction) => write!(f, "{}", direction),
            Command::Undo => f.write_str("undo"),
            Command::Reset => f.write_str("reset"),
            Command::RotateView => f.write_str("rotate"),
            Command::Quit => f.write_str("quit"),
        }
    }
}

/// Parse a whitespace- or comma-separated list of commands.
///
/// ```
/// use twenty48::{parse_script, Command};
/// use twenty48::game::Move;
/// let commands = parse_script("down, L undo").unwrap();
/// assert_eq!(commands, vec![Command::Move(Move::Down), Command::Move(Move::Left), Command::Undo]);
/// ```
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

//! Parsing of the single-line commands typed at the option prompt.

use puzzler_core::{ClueKey, Direction};
use std::str::FromStr;
use thiserror::Error;

/// Commands understood by the session, paired with their help text.
pub const HELP_COMMANDS: &[(&str, &str)] = &[
    ("C n", "Display n of the current puzzle's down and across clues"),
    ("G i j A/D", "Make a guess for the clue starting at row i, column j"),
    ("R i j A/D", "Reveal the answer for the clue starting at row i, column j"),
    ("T i j A/D", "Gives a hint (first wrong letter) for the clue starting at row i, column j"),
    ("H", "Display the menu"),
    ("S", "Restart the game"),
    ("Q", "Quit the program"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List up to this many clues of each direction.
    Clues(usize),
    Guess(ClueKey),
    Reveal(ClueKey),
    Hint(ClueKey),
    Help,
    Restart,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid option/arguments. Type 'H' for help.")]
pub struct ParseCommandError;

impl Command {
    /// The clue a command targets, if any.
    pub fn key(&self) -> Option<ClueKey> {
        match self {
            Command::Guess(key) | Command::Reveal(key) | Command::Hint(key) => Some(*key),
            _ => None,
        }
    }
}

fn parse_key(row: &str, col: &str, direction: &str) -> Result<ClueKey, ParseCommandError> {
    let row = row.parse().map_err(|_| ParseCommandError)?;
    let col = col.parse().map_err(|_| ParseCommandError)?;
    let mut chars = direction.chars();
    let direction = match (chars.next(), chars.next()) {
        (Some(c), None) => Direction::from_code(c).ok_or(ParseCommandError)?,
        _ => return Err(ParseCommandError),
    };
    Ok(ClueKey::new(row, col, direction))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let Some((name, args)) = tokens.split_first() else {
            return Err(ParseCommandError);
        };

        match (name.to_ascii_uppercase().as_str(), args) {
            ("C", [n]) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Command::Clues(n)),
                _ => Err(ParseCommandError),
            },
            ("G", [row, col, dir]) => parse_key(row, col, dir).map(Command::Guess),
            ("R", [row, col, dir]) => parse_key(row, col, dir).map(Command::Reveal),
            ("T", [row, col, dir]) => parse_key(row, col, dir).map(Command::Hint),
            ("H", []) => Ok(Command::Help),
            ("S", []) => Ok(Command::Restart),
            ("Q", []) => Ok(Command::Quit),
            _ => Err(ParseCommandError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clue_commands() {
        assert_eq!(
            "G 0 2 D".parse::<Command>(),
            Ok(Command::Guess(ClueKey::new(0, 2, Direction::Down)))
        );
        assert_eq!(
            "r 4 2 a".parse::<Command>(),
            Ok(Command::Reveal(ClueKey::new(4, 2, Direction::Across)))
        );
        assert_eq!(
            "  T   1 0   D ".parse::<Command>(),
            Ok(Command::Hint(ClueKey::new(1, 0, Direction::Down)))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("C 3".parse::<Command>(), Ok(Command::Clues(3)));
        assert_eq!("H".parse::<Command>(), Ok(Command::Help));
        assert_eq!("s".parse::<Command>(), Ok(Command::Restart));
        assert_eq!("Q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_reject_malformed() {
        for input in [
            "", "   ", "C", "C 0", "C -1", "C x", "G 0 0", "G 0 0 X", "G 0 0 AD", "G a 0 A",
            "G -1 0 A", "Q now", "X", "H 1",
        ] {
            assert_eq!(input.parse::<Command>(), Err(ParseCommandError), "{:?}", input);
        }
    }

    #[test]
    fn test_key() {
        let key = ClueKey::new(2, 0, Direction::Across);
        assert_eq!(Command::Hint(key).key(), Some(key));
        assert_eq!(Command::Clues(2).key(), None);
    }
}

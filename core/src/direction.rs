use serde::{Deserialize, Serialize};
use std::fmt;

/// Placement of an answer in the grid.
///
/// The derived ordering puts `Across` before `Down`, which is the order clues are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// Row/column step between consecutive cells of an answer.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Single-letter code used in puzzle files and commands (`A` or `D`).
    pub fn code(self) -> char {
        match self {
            Direction::Across => 'A',
            Direction::Down => 'D',
        }
    }

    /// Parse a direction code, ignoring case.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'A' => Some(Direction::Across),
            'D' => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Across => "Across",
            Direction::Down => "Down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Direction::from_code('A'), Some(Direction::Across));
        assert_eq!(Direction::from_code('d'), Some(Direction::Down));
        assert_eq!(Direction::from_code('X'), None);
        for direction in Direction::ALL {
            assert_eq!(Direction::from_code(direction.code()), Some(direction));
        }
    }

    #[test]
    fn test_across_sorts_first() {
        assert!(Direction::Across < Direction::Down);
    }
}

use crate::Direction;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Identifies a clue within a puzzle: the position of its first cell plus its direction.
///
/// Orders the same way clues are listed: Across before Down, then by row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClueKey {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl ClueKey {
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }
}

impl fmt::Display for ClueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.row, self.col, self.direction)
    }
}

impl Ord for ClueKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.direction, self.row, self.col).cmp(&(other.direction, other.row, other.col))
    }
}

impl PartialOrd for ClueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single clue: where its answer starts, which way it runs, the answer and the clue text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub answer: String,
    pub text: String,
}

impl Clue {
    pub fn new(row: usize, col: usize, direction: Direction, answer: String, text: String) -> Self {
        Self {
            row,
            col,
            direction,
            answer,
            text,
        }
    }

    pub fn key(&self) -> ClueKey {
        ClueKey::new(self.row, self.col, self.direction)
    }

    /// Number of cells the answer occupies.
    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// Cells covered by the answer, in answer order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = self.direction.delta();
        (0..self.len()).map(move |i| (self.row + dr * i, self.col + dc * i))
    }

    /// Wraps the clue so that it displays together with its answer.
    ///
    /// Only meant for logs and debugging, players should see the plain [`Display`](fmt::Display) form.
    pub fn full(&self) -> FullClue<'_> {
        FullClue(self)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key(), self.text)
    }
}

impl Ord for Clue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key()
            .cmp(&other.key())
            .then_with(|| self.answer.cmp(&other.answer))
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Clue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// See [`Clue::full`].
pub struct FullClue<'a>(&'a Clue);

impl fmt::Display for FullClue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --- {}", self.0, self.0.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(row: usize, col: usize, direction: Direction, answer: &str) -> Clue {
        Clue::new(row, col, direction, answer.to_string(), "text".to_string())
    }

    #[test]
    fn test_display_hides_answer() {
        let clue = Clue::new(
            0,
            2,
            Direction::Down,
            "TEA".to_string(),
            "Afternoon drink".to_string(),
        );
        assert_eq!(clue.to_string(), "(0, 2) Down: Afternoon drink");
        assert_eq!(clue.full().to_string(), "(0, 2) Down: Afternoon drink --- TEA");
    }

    #[test]
    fn test_across_before_down() {
        let mut clues = vec![clue(1, 0, Direction::Down, "OW"), clue(0, 0, Direction::Across, "CAT")];
        clues.sort();
        assert_eq!(clues[0].direction, Direction::Across);
        assert_eq!(clues[1].direction, Direction::Down);
    }

    #[test]
    fn test_sorted_by_row_then_column() {
        let mut clues = vec![
            clue(2, 0, Direction::Across, "WRAP"),
            clue(0, 3, Direction::Down, "X"),
            clue(0, 2, Direction::Across, "TO"),
            clue(0, 1, Direction::Down, "Y"),
            clue(0, 0, Direction::Across, "CA"),
        ];
        clues.sort();
        let keys: Vec<_> = clues.iter().map(|c| (c.direction.code(), c.row, c.col)).collect();
        assert_eq!(
            keys,
            vec![('A', 0, 0), ('A', 0, 2), ('A', 2, 0), ('D', 0, 1), ('D', 0, 3)]
        );
    }

    #[test]
    fn test_positions() {
        let across: Vec<_> = clue(1, 1, Direction::Across, "ABC").positions().collect();
        assert_eq!(across, vec![(1, 1), (1, 2), (1, 3)]);
        let down: Vec<_> = clue(1, 1, Direction::Down, "AB").positions().collect();
        assert_eq!(down, vec![(1, 1), (2, 1)]);
    }
}

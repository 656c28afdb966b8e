use crate::ClueKey;
use thiserror::Error;

/// Why a guess was rejected. A rejected guess never touches the grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Guess length does not match the length of the clue.")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Guess contains invalid characters.")]
    InvalidCharacter(char),

    #[error("Clue at {0} is not part of this puzzle.")]
    UnknownClue(ClueKey),
}

/// Why a set of clues could not be turned into a puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Puzzle has no clues")]
    EmptyPuzzle,

    #[error("Clue at {0} has an empty answer")]
    EmptyAnswer(ClueKey),

    #[error("Clue at {key} has invalid character {found:?} in its answer")]
    InvalidAnswer { key: ClueKey, found: char },

    #[error("Clue at {key} extends beyond the {size}x{size} grid")]
    OutOfBounds { key: ClueKey, size: usize },

    #[error("Duplicate clue at {0}")]
    DuplicateClue(ClueKey),

    #[error("Letter conflict at ({row}, {col}): {existing} vs {incoming}")]
    ConflictingCrossing {
        row: usize,
        col: usize,
        existing: char,
        incoming: char,
    },
}

pub mod clue;
pub mod crossword;
pub mod direction;
pub mod error;
pub mod grid;

pub use clue::{Clue, ClueKey};
pub use crossword::Crossword;
pub use direction::Direction;
pub use error::{GuessError, PuzzleError};
pub use grid::{Cell, Grid, BLANK, DIMENSION};

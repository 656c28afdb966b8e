use crate::{
    grid::{is_guess_char, DIMENSION},
    Clue, ClueKey, Direction, Grid, GuessError, PuzzleError,
};
use std::{collections::BTreeMap, fmt};

/// A puzzle being played: the clue catalog plus the player's grid.
///
/// The grid is only ever changed through [`Crossword::set_guess`] and [`Crossword::reveal_answer`].
#[derive(Debug, Clone)]
pub struct Crossword {
    grid: Grid,
    clues: BTreeMap<ClueKey, Clue>,
}

impl Crossword {
    /// Build a [`DIMENSION`]-sized puzzle from its clues.
    pub fn new(clues: impl IntoIterator<Item = Clue>) -> Result<Self, PuzzleError> {
        Self::with_size(DIMENSION, clues)
    }

    /// Build a puzzle on a `size`x`size` grid.
    ///
    /// Every cell covered by an answer starts out empty, every other cell is blocked.
    /// Fails if a clue does not fit on the grid or crossing answers disagree on a letter.
    pub fn with_size(size: usize, clues: impl IntoIterator<Item = Clue>) -> Result<Self, PuzzleError> {
        let mut grid = Grid::new(size);
        let mut solution: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
        let mut catalog = BTreeMap::new();

        for clue in clues {
            let key = clue.key();
            Self::validate_clue(&clue, size)?;
            if catalog.contains_key(&key) {
                return Err(PuzzleError::DuplicateClue(key));
            }

            for ((row, col), letter) in clue.positions().zip(clue.answer.chars()) {
                match solution[row][col] {
                    Some(existing) if existing != letter => {
                        return Err(PuzzleError::ConflictingCrossing {
                            row,
                            col,
                            existing,
                            incoming: letter,
                        });
                    }
                    _ => solution[row][col] = Some(letter),
                }
                grid.open_cell(row, col);
            }

            log::trace!("registered clue {}", clue.full());
            catalog.insert(key, clue);
        }

        if catalog.is_empty() {
            return Err(PuzzleError::EmptyPuzzle);
        }

        log::debug!("built {}x{} crossword with {} clues", size, size, catalog.len());
        Ok(Self {
            grid,
            clues: catalog,
        })
    }

    fn validate_clue(clue: &Clue, size: usize) -> Result<(), PuzzleError> {
        let key = clue.key();
        if clue.is_empty() {
            return Err(PuzzleError::EmptyAnswer(key));
        }
        if let Some(found) = clue.answer.chars().find(|c| !is_guess_char(*c)) {
            return Err(PuzzleError::InvalidAnswer { key, found });
        }
        if clue.positions().any(|(row, col)| row >= size || col >= size) {
            return Err(PuzzleError::OutOfBounds { key, size });
        }
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn clue(&self, key: &ClueKey) -> Option<&Clue> {
        self.clues.get(key)
    }

    /// All clues, Across first, each direction ordered by row then column.
    pub fn clues(&self) -> impl Iterator<Item = &Clue> {
        self.clues.values()
    }

    pub fn clues_by_direction(&self, direction: Direction) -> Vec<&Clue> {
        self.clues()
            .filter(|clue| clue.direction == direction)
            .collect()
    }

    /// Write the player's guess for `clue` into the grid.
    ///
    /// The guess must be exactly as long as the answer and consist only of `A`-`Z` and `_`.
    /// Input is not upper-cased here. A rejected guess leaves the grid untouched.
    pub fn set_guess(&mut self, clue: &Clue, guess: &str) -> Result<(), GuessError> {
        let key = clue.key();
        let clue = match self.clues.get(&key) {
            Some(known) if known == clue => known,
            _ => return Err(GuessError::UnknownClue(key)),
        };

        let actual = guess.chars().count();
        if actual != clue.len() {
            return Err(GuessError::LengthMismatch {
                expected: clue.len(),
                actual,
            });
        }
        if let Some(c) = guess.chars().find(|c| !is_guess_char(*c)) {
            return Err(GuessError::InvalidCharacter(c));
        }

        log::trace!("guess {:?} for {}", guess, key);
        Self::fill(&mut self.grid, clue, guess);
        Ok(())
    }

    /// Overwrite the cells of the clue at `clue.key()` with its answer.
    ///
    /// Clues that are not part of this puzzle are ignored.
    pub fn reveal_answer(&mut self, clue: &Clue) {
        let key = clue.key();
        match self.clues.get(&key) {
            Some(known) => {
                log::trace!("reveal {}", key);
                Self::fill(&mut self.grid, known, &known.answer);
            }
            None => log::warn!("cannot reveal {}, not in this puzzle", key),
        }
    }

    fn fill(grid: &mut Grid, clue: &Clue, letters: &str) {
        for ((row, col), c) in clue.positions().zip(letters.chars()) {
            grid.set_value(row, col, c);
        }
    }

    /// Index within the answer of the first cell that does not hold the right letter.
    ///
    /// `None` means the whole answer is filled in correctly.
    pub fn find_first_wrong_letter(&self, clue: &Clue) -> Option<usize> {
        clue.positions()
            .zip(clue.answer.chars())
            .position(|((row, col), letter)| self.grid.value(row, col) != Some(letter))
    }

    pub fn is_solved(&self) -> bool {
        self.clues
            .values()
            .all(|clue| self.find_first_wrong_letter(clue).is_none())
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

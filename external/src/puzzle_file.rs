use crate::error::ExternalError;
use puzzler_core::{Clue, Crossword, Direction};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};

/// One row of a puzzle CSV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleRecord {
    #[serde(rename = "Row Index")]
    pub row: usize,
    #[serde(rename = "Column Index")]
    pub col: usize,
    #[serde(rename = "Down/Across")]
    pub direction: String,
    #[serde(rename = "Answer")]
    pub answer: String,
    #[serde(rename = "Clue")]
    pub clue: String,
}

impl TryFrom<PuzzleRecord> for Clue {
    type Error = ExternalError;

    fn try_from(record: PuzzleRecord) -> Result<Self, Self::Error> {
        let code = record.direction.trim();
        let direction = match code.chars().collect::<Vec<_>>().as_slice() {
            [c] => Direction::from_code(*c),
            _ => None,
        }
        .ok_or_else(|| ExternalError::InvalidFormat {
            expected: "A or D".to_string(),
            actual: code.to_string(),
        })?;

        Ok(Clue::new(
            record.row,
            record.col,
            direction,
            record.answer.trim().to_uppercase(),
            record.clue,
        ))
    }
}

/// Clues read from a puzzle file, ready to become a [`Crossword`].
#[derive(Debug, Clone)]
pub struct PuzzleFile {
    pub name: String,
    pub clues: Vec<Clue>,
}

impl PuzzleFile {
    /// Load a puzzle from a CSV file with the header
    /// `Row Index,Column Index,Down/Across,Answer,Clue`.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, ExternalError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ExternalError::FileNotFound(path.display().to_string()),
            _ => ExternalError::Io(e),
        })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Unknown")
            .to_string();

        let mut puzzle = Self::from_reader(file)?;
        puzzle.name = name;
        log::debug!("loaded {} clues from {}", puzzle.clues.len(), path.display());
        Ok(puzzle)
    }

    /// Parse puzzle CSV data from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ExternalError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut clues = Vec::new();

        for result in reader.deserialize() {
            let record: PuzzleRecord = result?;
            clues.push(Clue::try_from(record)?);
        }

        Ok(Self {
            name: "Unknown".to_string(),
            clues,
        })
    }

    pub fn into_crossword(self) -> Result<Crossword, ExternalError> {
        Ok(Crossword::new(self.clues)?)
    }
}

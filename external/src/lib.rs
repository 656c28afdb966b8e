mod error;
pub use error::ExternalError;

mod puzzle_file;
pub use puzzle_file::{PuzzleFile, PuzzleRecord};

use crate::{
    command::{Command, ParseCommandError, HELP_COMMANDS},
    preferences::Preferences,
};
use color_eyre::eyre::Result;
use puzzler_core::{Clue, Crossword, Direction, BLANK};
use puzzler_external::{ExternalError, PuzzleFile};
use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
    path::PathBuf,
};

const OPTION_PROMPT: &str = "\nEnter option: ";
const PUZZLE_PROMPT: &str = "Enter the filename of the puzzle you want to play: ";
const PUZZLE_FILE_ERROR: &str = "No puzzle found with that filename. Try Again.\n";
const GUESS_PROMPT: &str = "Enter your guess (use _ for blanks): ";
const ALREADY_CORRECT: &str = "This clue is already correct!";
const SOLVED: &str = "\nPuzzle solved! Congratulations!";

/// Render the help menu from the command table.
pub fn help_menu() -> String {
    let mut menu = String::from("\nCrossword Puzzler -- Press H at any time to bring up this menu");
    for (usage, description) in HELP_COMMANDS {
        menu.push_str(&format!("\n{} - {}", usage, description));
    }
    menu
}

/// One interactive game: reads commands from `input` and writes everything to `output`.
///
/// A session plays one puzzle at a time; restarting swaps in a freshly loaded [`Crossword`].
pub struct Session<R, W> {
    input: R,
    output: W,
    preferences: Preferences,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, preferences: Preferences) -> Self {
        Self {
            input,
            output,
            preferences,
        }
    }

    /// Preferences as updated by this session (e.g. the last puzzle opened).
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Play until the puzzle is solved, the player quits, or input runs out.
    ///
    /// `puzzle` is tried before asking for a filename.
    pub fn run(&mut self, puzzle: Option<PathBuf>) -> Result<()> {
        let Some(mut crossword) = self.open_puzzle(puzzle)? else {
            return Ok(());
        };
        self.show_start(&crossword)?;

        loop {
            let Some(line) = self.prompt(OPTION_PROMPT)? else {
                break;
            };
            if self.execute(&mut crossword, &line)?.is_break() {
                break;
            }
            if crossword.is_solved() {
                writeln!(self.output, "{}", SOLVED)?;
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Write `prompt` and read one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("end of input");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for puzzle files until one loads.
    fn open_puzzle(&mut self, mut candidate: Option<PathBuf>) -> Result<Option<Crossword>> {
        loop {
            let path = match candidate.take() {
                Some(path) => path,
                None => {
                    let Some(line) = self.prompt(PUZZLE_PROMPT)? else {
                        return Ok(None);
                    };
                    match line.trim() {
                        "" => self.preferences.last_puzzle.clone().unwrap_or_default(),
                        name => PathBuf::from(name),
                    }
                }
            };

            match PuzzleFile::from_csv(&path).and_then(PuzzleFile::into_crossword) {
                Ok(crossword) => {
                    log::info!("opened puzzle {}", path.display());
                    self.preferences.last_puzzle = Some(path);
                    return Ok(Some(crossword));
                }
                Err(ExternalError::FileNotFound(_)) => {
                    writeln!(self.output, "{}", PUZZLE_FILE_ERROR)?;
                }
                Err(e) => {
                    log::warn!("could not load {}: {}", path.display(), e);
                    writeln!(self.output, "{}\n", e)?;
                }
            }
        }
    }

    fn show_start(&mut self, crossword: &Crossword) -> Result<()> {
        writeln!(self.output)?;
        self.display_clues(crossword, usize::MAX)?;
        writeln!(self.output, "{}", crossword)?;
        writeln!(self.output, "{}", help_menu())?;
        Ok(())
    }

    fn display_clues(&mut self, crossword: &Crossword, limit: usize) -> Result<()> {
        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(self.output)?;
            }
            writeln!(self.output, "{}", direction)?;
            for clue in crossword.clues_by_direction(direction).into_iter().take(limit) {
                writeln!(self.output, "{}", clue)?;
            }
        }
        Ok(())
    }

    fn invalid(&mut self) -> Result<ControlFlow<()>> {
        writeln!(self.output, "{}", ParseCommandError)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Run one command line against the puzzle.
    fn execute(&mut self, crossword: &mut Crossword, line: &str) -> Result<ControlFlow<()>> {
        let Ok(command) = line.parse::<Command>() else {
            return self.invalid();
        };
        let clue = match command.key() {
            Some(key) => match crossword.clue(&key) {
                Some(clue) => Some(clue.clone()),
                None => return self.invalid(),
            },
            None => None,
        };

        match (command, clue) {
            (Command::Clues(n), _) => self.display_clues(crossword, n)?,
            (Command::Guess(_), Some(clue)) => return self.guess(crossword, &clue),
            (Command::Reveal(_), Some(clue)) => {
                crossword.reveal_answer(&clue);
                writeln!(self.output, "{}", crossword)?;
            }
            (Command::Hint(_), Some(clue)) => self.hint(crossword, &clue)?,
            (Command::Help, _) => writeln!(self.output, "{}", help_menu())?,
            (Command::Restart, _) => match self.open_puzzle(None)? {
                Some(fresh) => {
                    *crossword = fresh;
                    self.show_start(crossword)?;
                }
                None => return Ok(ControlFlow::Break(())),
            },
            (Command::Quit, _) => return Ok(ControlFlow::Break(())),
            // clue commands always resolve a clue above
            (Command::Guess(_) | Command::Reveal(_) | Command::Hint(_), None) => return self.invalid(),
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Keep asking for a guess until the puzzle accepts one.
    fn guess(&mut self, crossword: &mut Crossword, clue: &Clue) -> Result<ControlFlow<()>> {
        loop {
            let Some(raw) = self.prompt(GUESS_PROMPT)? else {
                return Ok(ControlFlow::Break(()));
            };
            match crossword.set_guess(clue, &raw.trim().to_uppercase()) {
                Ok(()) => break,
                Err(e) => {
                    log::debug!("rejected guess {:?} for {}: {:?}", raw, clue.key(), e);
                    writeln!(self.output, "{}\n", e)?;
                }
            }
        }
        writeln!(self.output, "{}", crossword)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Point out the first wrong letter of `clue`, numbered by its grid row or column.
    fn hint(&mut self, crossword: &Crossword, clue: &Clue) -> Result<()> {
        match crossword.find_first_wrong_letter(clue) {
            Some(index) => {
                let start = match clue.direction {
                    Direction::Across => clue.col,
                    Direction::Down => clue.row,
                };
                let letter = clue.answer.chars().nth(index).unwrap_or(BLANK);
                writeln!(
                    self.output,
                    "Letter {} is wrong, it should be {}",
                    start + index,
                    letter
                )?;
            }
            None => writeln!(self.output, "{}", ALREADY_CORRECT)?,
        }
        Ok(())
    }
}

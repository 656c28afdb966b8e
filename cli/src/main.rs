use clap::Parser;
use color_eyre::eyre::Result;
use puzzler::{
    preferences::{self, Preferences},
    Session,
};
use std::path::PathBuf;

/// Play a 5x5 crossword puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle CSV file to open (asked for interactively when omitted).
    #[arg(value_name = "PUZZLE")]
    puzzle: Option<PathBuf>,

    /// Neither read nor write the preferences file.
    #[arg(long)]
    no_preferences: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();
    let prefs = if args.no_preferences {
        Preferences::default()
    } else {
        preferences::load_preferences()
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), prefs);
    session.run(args.puzzle)?;

    if !args.no_preferences {
        if let Err(e) = preferences::save_preferences(session.preferences()) {
            log::warn!("could not save preferences: {}", e);
        }
    }

    Ok(())
}

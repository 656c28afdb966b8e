pub mod command;
pub mod preferences;

mod session;
pub use session::{help_menu, Session};

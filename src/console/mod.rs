//! Text console front-end.
//!
//! A blocking menu loop: read a line, hand it to the session, print the
//! result. Bad input is re-prompted; `q`/`quit`/`exit` aborts the current
//! round, or exits when typed at the menu.

pub mod prompt;
pub mod input;
pub mod app;

pub use prompt::{advice, is_quit, parse_menu, parse_number, parse_yes_no, MenuChoice, Reply};
pub use input::{EditorInput, LineSource, ScriptedInput};
pub use app::{Console, ConsoleError};

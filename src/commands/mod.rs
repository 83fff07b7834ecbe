//! Commands Module
//!
//! The REPL surface: parsing of input lines into commands, and the
//! application object that executes them.

mod app;
mod parse;

pub use app::App;
pub use parse::{Command, HELP_TEXT};

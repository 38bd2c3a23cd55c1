//! Query responder - answers chat commands from the current roster state

mod command;
mod report;

pub use command::{Command, HELP_MESSAGE};
pub use report::{render, NOBODY_OBSERVED_MESSAGE, UNIDENTIFIED_PRESENT_MESSAGE};

//! Terminal front end: logging setup, output formatting and the interactive reviewer.

pub mod logging;
pub mod print;
pub mod reviewer;

//! Output formatting module
//!
//! Buffers command output and writes it as plain text or JSON.

mod printer;
mod users;

pub use printer::{Line, PlainRender, Printer};

//! Line printer with separate success and error streams
//!
//! Commands push lines while they run; nothing reaches the terminal until
//! `flush`, so a command's output is written in one piece after any spinner
//! has been cleared.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Rendering of a structured item as human-readable text
pub trait PlainRender {
    fn render_plain(&self) -> String;
}

/// One line on the success stream
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Free text message
    Text(String),
    /// Structured item, kept in both renderings
    Item {
        plain: String,
        json: serde_json::Value,
    },
}

impl Line {
    /// The text of a `Text` line
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Line::Text(text) => Some(text),
            Line::Item { .. } => None,
        }
    }

    /// The JSON value of an `Item` line
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Line::Text(_) => None,
            Line::Item { json, .. } => Some(json),
        }
    }
}

/// Buffered output for one command
#[derive(Debug, Default)]
pub struct Printer {
    format: OutputFormat,
    lines: Vec<Line>,
    error_lines: Vec<String>,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            lines: Vec::new(),
            error_lines: Vec::new(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Add a text line to the success stream
    pub fn print_line(&mut self, text: impl Into<String>) {
        self.lines.push(Line::Text(text.into()));
    }

    /// Add a structured item to the success stream
    pub fn print_item<T>(&mut self, item: &T) -> Result<()>
    where
        T: Serialize + PlainRender,
    {
        self.lines.push(Line::Item {
            plain: item.render_plain(),
            json: serde_json::to_value(item)?,
        });
        Ok(())
    }

    /// Add a line to the error stream
    pub fn print_error(&mut self, text: impl Into<String>) {
        self.error_lines.push(text.into());
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn error_lines(&self) -> &[String] {
        &self.error_lines
    }

    /// Write buffered lines to `out` and error lines to `err`, in order
    pub fn write_to<O, E>(&self, out: &mut O, err: &mut E) -> io::Result<()>
    where
        O: Write,
        E: Write,
    {
        match self.format {
            OutputFormat::Plain => {
                for line in &self.lines {
                    match line {
                        Line::Text(text) => writeln!(out, "{}", text)?,
                        Line::Item { plain, .. } => writeln!(out, "{}", plain)?,
                    }
                }
            }
            OutputFormat::Json => {
                if !self.lines.is_empty() {
                    let values: Vec<serde_json::Value> = self
                        .lines
                        .iter()
                        .map(|line| match line {
                            Line::Text(text) => serde_json::Value::String(text.clone()),
                            Line::Item { json, .. } => json.clone(),
                        })
                        .collect();
                    let rendered = serde_json::to_string_pretty(&values)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    writeln!(out, "{}", rendered)?;
                }
            }
        }

        for line in &self.error_lines {
            writeln!(err, "{}", line)?;
        }

        Ok(())
    }

    /// Write everything to stdout/stderr and clear the buffers
    pub fn flush(&mut self) -> io::Result<()> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.write_to(&mut stdout.lock(), &mut stderr.lock())?;
        self.lines.clear();
        self.error_lines.clear();
        Ok(())
    }
}

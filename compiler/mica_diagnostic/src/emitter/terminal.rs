//! Human-readable diagnostic output with optional ANSI colors.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether the output is a TTY.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` flag value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Writes diagnostics as `error[CODE]: message` followed by a source
/// snippet per label when the source text is attached.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<(String, LineOffsetTable)>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text so labels render as `path:line:col` with a snippet.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some((source.to_owned(), LineOffsetTable::build(source)));
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: &str) -> Self {
        self.file_path = Some(path.to_owned());
        self
    }

    /// Give back the writer, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    fn write_label(&mut self, label: &Label) {
        let color = colors::ERROR;
        let path = self.file_path.as_deref().unwrap_or("<input>").to_owned();

        let Some((source, table)) = &self.source else {
            let _ = write!(self.writer, "  --> {path} {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = table.offset_to_line_col(source, label.span.start);
        let text = table.line_text(source, line).unwrap_or("").to_owned();
        let gutter = " ".repeat(line.to_string().len());
        let width = label
            .span
            .to_range()
            .len()
            .clamp(1, text.chars().count().saturating_sub(col as usize - 1).max(1));

        let _ = writeln!(self.writer, "{gutter}--> {path}:{line}:{col}");
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line} | {text}");
        let _ = write!(self.writer, "{gutter} | {}", " ".repeat(col as usize - 1));
        self.write_colored(&"^".repeat(width), color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);
        for label in &diagnostic.labels {
            self.write_label(label);
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Emitter for stderr, coloring when stderr is a terminal and `mode` allows it.
    pub fn stderr(mode: ColorMode) -> Self {
        let is_tty = io::IsTerminal::is_terminal(&io::stderr());
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

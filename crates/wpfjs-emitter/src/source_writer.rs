//! Append-only writer over the caller's output sink.
//!
//! Two kinds of text go through here:
//! - generated code, which the writer places on lines it indents itself
//!   (`open_line`), and
//! - verbatim trivia copied from the source, which is written untouched.
//!
//! The writer remembers where it stands (line start, last character, inside a
//! `//` marker comment) so emitters can ask instead of tracking it themselves.

use std::fmt;

use wpfjs_common::{IndentStyle, NewLineKind};

use crate::error::EmitError;

pub struct SourceWriter<'w> {
    out: &'w mut dyn fmt::Write,
    indent: IndentStyle,
    new_line: NewLineKind,
    at_line_start: bool,
    last_char: Option<char>,
    in_line_comment: bool,
}

impl<'w> SourceWriter<'w> {
    pub fn new(out: &'w mut dyn fmt::Write, indent: IndentStyle, new_line: NewLineKind) -> Self {
        SourceWriter {
            out,
            indent,
            new_line,
            at_line_start: true,
            last_char: None,
            in_line_comment: false,
        }
    }

    /// True when the next token can be written without a separating space.
    pub fn ends_with_separator(&self) -> bool {
        match self.last_char {
            None => true,
            Some(ch) => ch.is_whitespace() || ch == '(',
        }
    }

    fn write_raw(&mut self, text: &str) -> Result<(), EmitError> {
        let Some(last) = text.chars().next_back() else {
            return Ok(());
        };
        self.out.write_str(text)?;
        if text.contains(['\n', '\r']) {
            self.in_line_comment = false;
        }
        self.at_line_start = last == '\n' || last == '\r';
        self.last_char = Some(last);
        Ok(())
    }

    /// Write generated code on the current line.
    ///
    /// If a marker comment is still open on this line the code is moved to a
    /// new line first, so it is never swallowed by the comment.
    pub fn write(&mut self, text: &str) -> Result<(), EmitError> {
        if self.in_line_comment && !text.is_empty() {
            self.write_line()?;
        }
        self.write_raw(text)
    }

    /// Write source trivia exactly as given.
    pub fn write_trivia(&mut self, text: &str) -> Result<(), EmitError> {
        self.write_raw(text)
    }

    /// Write a statement terminator.
    ///
    /// Allowed inside an open marker comment: a terminator after a commented
    /// out expression carries no code.
    pub fn write_terminator(&mut self) -> Result<(), EmitError> {
        self.write_raw(";")
    }

    /// Write a line terminator.
    pub fn write_line(&mut self) -> Result<(), EmitError> {
        let new_line = self.new_line.as_str();
        self.write_raw(new_line)
    }

    /// Finish the current line unless already at a line start.
    pub fn end_line(&mut self) -> Result<(), EmitError> {
        if !self.at_line_start {
            self.write_line()?;
        }
        Ok(())
    }

    /// Finish the current line, then write an empty one.
    pub fn blank_line(&mut self) -> Result<(), EmitError> {
        self.end_line()?;
        self.write_line()
    }

    /// Start a generated line indented `depth` levels.
    pub fn open_line(&mut self, depth: u32) -> Result<(), EmitError> {
        self.end_line()?;
        let indent = self.indent.indent(depth);
        self.write_raw(&indent)
    }

    /// Record that a `//` comment was just opened on the current line.
    pub fn mark_line_comment(&mut self) {
        self.in_line_comment = true;
    }
}

// ArmScript - A single-pass compiler for robot arm command scripts
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Error types for the ArmScript compiler.
//!
//! This module defines the diagnostics produced by the pipeline:
//! lexical, syntax and semantic errors, plus a catch-all internal error
//! for faults that escape the analyzer.

use std::fmt;
use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// The error taxonomy of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A token contains a character outside the allowed set.
    Lexical,
    /// A statement has the wrong shape.
    Syntax,
    /// A well-formed statement breaks a language rule.
    Semantic,
    /// An unexpected fault inside the analyzer.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Lexical => "lexical",
            ErrorKind::Syntax => "syntax",
            ErrorKind::Semantic => "semantic",
            ErrorKind::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Error codes for the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E001)
    InvalidToken,

    // Syntax errors (E100-E108)
    IncompleteStatement,
    MissingIdentifier,
    InvalidIdentifier,
    InvalidCommandTarget,
    ExpectedAssignment,
    ExpectedOpenBrace,
    UnmatchedBrace,
    EmptySource,
    IncompleteBlockStatement,

    // Semantic errors (E200-E232)
    RobotAlreadyDeclared,
    RobotNotDeclared,
    UnknownCommand,
    RepeatWithoutBlock,
    NegationNotAllowed,
    InvalidNumber,
    ValueOutOfRange,
    RepeatCountOutOfRange,
    NestedLoop,
    ForeignRobotInBlock,
    EmptyBlock,

    // Internal errors (E900)
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            // Lexical errors
            ErrorCode::InvalidToken => "E001",

            // Syntax errors
            ErrorCode::IncompleteStatement => "E100",
            ErrorCode::MissingIdentifier => "E101",
            ErrorCode::InvalidIdentifier => "E102",
            ErrorCode::InvalidCommandTarget => "E103",
            ErrorCode::ExpectedAssignment => "E104",
            ErrorCode::ExpectedOpenBrace => "E105",
            ErrorCode::UnmatchedBrace => "E106",
            ErrorCode::EmptySource => "E107",
            ErrorCode::IncompleteBlockStatement => "E108",

            // Semantic errors
            ErrorCode::RobotAlreadyDeclared => "E200",
            ErrorCode::RobotNotDeclared => "E201",
            ErrorCode::UnknownCommand => "E210",
            ErrorCode::RepeatWithoutBlock => "E211",
            ErrorCode::NegationNotAllowed => "E212",
            ErrorCode::InvalidNumber => "E220",
            ErrorCode::ValueOutOfRange => "E221",
            ErrorCode::RepeatCountOutOfRange => "E222",
            ErrorCode::NestedLoop => "E230",
            ErrorCode::ForeignRobotInBlock => "E231",
            ErrorCode::EmptyBlock => "E232",

            // Internal errors
            ErrorCode::InternalError => "E900",
        }
    }

    /// Get the taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::InvalidToken => ErrorKind::Lexical,
            ErrorCode::IncompleteStatement
            | ErrorCode::MissingIdentifier
            | ErrorCode::InvalidIdentifier
            | ErrorCode::InvalidCommandTarget
            | ErrorCode::ExpectedAssignment
            | ErrorCode::ExpectedOpenBrace
            | ErrorCode::UnmatchedBrace
            | ErrorCode::EmptySource
            | ErrorCode::IncompleteBlockStatement => ErrorKind::Syntax,
            ErrorCode::RobotAlreadyDeclared
            | ErrorCode::RobotNotDeclared
            | ErrorCode::UnknownCommand
            | ErrorCode::RepeatWithoutBlock
            | ErrorCode::NegationNotAllowed
            | ErrorCode::InvalidNumber
            | ErrorCode::ValueOutOfRange
            | ErrorCode::RepeatCountOutOfRange
            | ErrorCode::NestedLoop
            | ErrorCode::ForeignRobotInBlock
            | ErrorCode::EmptyBlock => ErrorKind::Semantic,
            ErrorCode::InternalError => ErrorKind::Internal,
        }
    }
}

/// A compiler error with source location.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} error [{code}]: {message}", kind = .code.kind())]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new compile error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Create an internal error for a fault that escaped the pipeline.
    pub fn internal(detail: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InternalError,
            format!("Unexpected error: {}", detail),
            Span::default(),
        )
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the taxonomy class.
    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Format an error with source context.
///
/// Colors are disabled so the output is stable in logs and tests.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    let filename = filename.unwrap_or("<input>");
    let start = error.span.start.min(source.len());
    let end = error.span.end.clamp(start, source.len());

    let mut report = Report::build(ReportKind::Error, filename, start)
        .with_code(error.code_str())
        .with_message(format!("{} error: {}", error.kind(), error.message))
        .with_config(Config::default().with_color(false));

    if !source.trim().is_empty() {
        report = report.with_label(
            Label::new((filename, start..end.max(start + 1).min(source.len())))
                .with_message(error.message.clone()),
        );
    }

    if let Some(hint) = &error.hint {
        report = report.with_help(hint);
    }

    let mut output = Vec::new();
    if report
        .finish()
        .write((filename, Source::from(source)), &mut output)
        .is_err()
    {
        // Fall back to the one-line form if rendering fails.
        return format!("{}\n", error);
    }

    String::from_utf8_lossy(&output).into_owned()
}

/// The diagnostics collector of a single analysis run.
///
/// The pipeline is fail-fast: once an error is recorded the collector is
/// halted and further errors are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    errors: Vec<CompileError>,
}

impl Diagnostics {
    /// Create a new empty error collection.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record an error. Only the first one is kept.
    pub fn record(&mut self, error: CompileError) {
        if self.errors.is_empty() {
            self.errors.push(error);
        } else {
            log::warn!("ignoring diagnostic after halt: {}", error);
        }
    }

    /// Check if the collector has stopped the analysis.
    pub fn is_halted(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the first (and only) error.
    pub fn first(&self) -> Option<&CompileError> {
        self.errors.first()
    }

    /// View the errors as a slice.
    pub fn as_slice(&self) -> &[CompileError] {
        &self.errors
    }

}

impl From<CompileError> for Diagnostics {
    fn from(error: CompileError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_creation() {
        let span = Span::new(10, 20);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_merge() {
        let span1 = Span::new(5, 10);
        let span2 = Span::new(15, 20);
        let merged = span1.merge(&span2);
        assert_eq!(merged.start, 5);
        assert_eq!(merged.end, 20);
    }

    #[test]
    fn test_error_code() {
        assert_eq!(ErrorCode::InvalidToken.code(), "E001");
        assert_eq!(ErrorCode::IncompleteStatement.code(), "E100");
        assert_eq!(ErrorCode::RobotAlreadyDeclared.code(), "E200");
        assert_eq!(ErrorCode::InternalError.code(), "E900");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(ErrorCode::InvalidToken.kind(), ErrorKind::Lexical);
        assert_eq!(ErrorCode::UnmatchedBrace.kind(), ErrorKind::Syntax);
        assert_eq!(ErrorCode::EmptyBlock.kind(), ErrorKind::Semantic);
        assert_eq!(ErrorCode::InternalError.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_compile_error_display() {
        let error = CompileError::new(
            ErrorCode::RobotNotDeclared,
            "Robot not declared: 'R2'",
            Span::new(0, 2),
        )
        .with_hint("Declare it first with 'Robot R2'");

        assert_eq!(error.code_str(), "E201");
        assert!(error.hint.is_some());
        assert_eq!(
            error.to_string(),
            "semantic error [E201]: Robot not declared: 'R2'"
        );
    }

    #[test]
    fn test_diagnostics_keep_first_error_only() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.is_halted());

        diagnostics.record(CompileError::new(
            ErrorCode::InvalidToken,
            "first",
            Span::default(),
        ));
        diagnostics.record(CompileError::new(
            ErrorCode::EmptyBlock,
            "second",
            Span::default(),
        ));

        assert!(diagnostics.is_halted());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.first().unwrap().message, "first");
    }

    #[test]
    fn test_format_error_mentions_code_and_file() {
        let source = "Robot R1 R1.base = 500";
        let error = CompileError::new(
            ErrorCode::ValueOutOfRange,
            "Value out of range for base: 500 (range: 0-360)",
            Span::new(19, 22),
        );
        let text = format_error(&error, source, Some("arm.robot"));
        assert!(text.contains("E221"));
        assert!(text.contains("arm.robot"));
        assert!(text.contains("500"));
    }

    #[test]
    fn test_format_error_empty_source() {
        let error = CompileError::new(ErrorCode::EmptySource, "Empty source", Span::new(0, 0));
        let text = format_error(&error, "", None);
        assert!(text.contains("E107"));
    }
}

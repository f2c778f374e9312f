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

//! Statement parsing for the parser.
//!
//! This module provides statement parsing functionality:
//! - Dispatch on the current token
//! - Robot declarations (`Robot R1`)
//! - Command assignments (`R1.base = 90`, `R1.codo.negativo = 45`)

use super::blocks::BlockParser;
use super::helpers::ParserHelpers;
use super::Parser;
use crate::analyzer::StatementAnalyzer;
use crate::ast::{Assignment, CommandTarget, RobotDecl};
use crate::error::{CompileError, ErrorCode, Result};
use crate::lexer::{is_valid_identifier, Token, NEGATIVE_SUFFIX};

/// Extension trait for statement parsing.
///
/// Every handler returns the cursor position after the statement.
pub trait StatementParser {
    /// Parse the statement at the cursor.
    fn parse_statement(&mut self) -> Result<usize>;

    /// Check if the cursor is at `ID.repetir = N {`.
    fn is_repeat_block_start(&self) -> bool;

    /// Parse `Robot <ID>`.
    fn parse_robot_decl(&mut self) -> Result<usize>;

    /// Parse `ID.command[.negativo] = value`.
    fn parse_command_statement(&mut self) -> Result<usize>;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_statement(&mut self) -> Result<usize> {
        let Some(token) = self.peek() else {
            return Err(self.error(
                ErrorCode::IncompleteStatement,
                "Incomplete or invalid expression",
            ));
        };

        if token.is_robot_keyword() {
            return self.parse_robot_decl();
        }

        if token.has_dot() && self.remaining() > 2 {
            if self.is_repeat_block_start() {
                return self.parse_repeat_block();
            }
            return self.parse_command_statement();
        }

        Err(self
            .error(
                ErrorCode::IncompleteStatement,
                format!("Incomplete or invalid expression at '{}'", token),
            )
            .with_hint("Statements are 'Robot ID' or 'ID.command = value'"))
    }

    fn is_repeat_block_start(&self) -> bool {
        self.peek().is_some_and(Token::ends_with_repeat)
            && self.peek_ahead(1).is_some_and(Token::is_assign)
            && self.peek_ahead(3).is_some_and(Token::is_open_brace)
    }

    fn parse_robot_decl(&mut self) -> Result<usize> {
        let keyword_span = self.current_span();
        let Some(id) = self.peek_ahead(1) else {
            return Err(CompileError::new(
                ErrorCode::MissingIdentifier,
                "Missing robot identifier after 'Robot'",
                keyword_span,
            )
            .with_hint("Write 'Robot R1'"));
        };

        if !is_valid_identifier(&id.text) {
            return Err(CompileError::new(
                ErrorCode::InvalidIdentifier,
                format!("Invalid robot identifier: '{}'", id.text),
                id.span,
            )
            .with_hint("Identifiers are letters optionally followed by digits, like 'R1'"));
        }

        self.context.declare_robot(&RobotDecl {
            id: id.text.clone(),
            span: id.span,
        })?;

        Ok(self.position + 2)
    }

    fn parse_command_statement(&mut self) -> Result<usize> {
        let Some(window) = self.window(3) else {
            return Err(self.error(
                ErrorCode::IncompleteStatement,
                "Incomplete or invalid expression",
            ));
        };

        let assignment = parse_assignment(window)?;
        self.context.analyze_assignment(&assignment, None)?;

        Ok(self.position + 3)
    }
}

/// Split an assignment target into robot, command, and sign.
pub fn parse_command_target(token: &Token) -> Result<CommandTarget> {
    let invalid = || {
        CompileError::new(
            ErrorCode::InvalidCommandTarget,
            format!("Invalid command target: '{}'", token.text),
            token.span,
        )
        .with_hint("Write 'ID.command' or 'ID.command.negativo'")
    };

    let parts: Vec<&str> = token.text.split('.').collect();
    let (robot, command, negated) = match parts.as_slice() {
        [robot, command] => (*robot, *command, false),
        [robot, command, suffix] if suffix.eq_ignore_ascii_case(NEGATIVE_SUFFIX) => {
            (*robot, *command, true)
        }
        _ => return Err(invalid()),
    };

    if robot.is_empty() || command.is_empty() {
        return Err(invalid());
    }

    Ok(CommandTarget {
        robot: robot.to_string(),
        command: command.to_string(),
        negated,
        span: token.span,
    })
}

/// Parse a three-token assignment window.
pub fn parse_assignment(window: &[Token]) -> Result<Assignment> {
    let [target, operator, value] = window else {
        return Err(CompileError::new(
            ErrorCode::IncompleteStatement,
            "Incomplete or invalid expression",
            window.first().map(|t| t.span).unwrap_or_default(),
        ));
    };

    let target = parse_command_target(target)?;

    if !operator.is_assign() {
        return Err(CompileError::new(
            ErrorCode::ExpectedAssignment,
            format!(
                "Expected '=' after '{}', found '{}'",
                target.display_name(),
                operator.text
            ),
            operator.span,
        ));
    }

    Ok(Assignment {
        target,
        value: value.text.clone(),
        value_span: value.span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Span;
    use crate::lexer::tokenize;

    fn word(text: &str) -> Token {
        Token::new(text, 0, Span::new(0, text.len()))
    }

    #[test]
    fn test_plain_target() {
        let target = parse_command_target(&word("R1.base")).unwrap();
        assert_eq!(target.robot, "R1");
        assert_eq!(target.command, "base");
        assert!(!target.negated);
    }

    #[test]
    fn test_negated_target_any_case() {
        let target = parse_command_target(&word("R1.codo.NEGATIVO")).unwrap();
        assert_eq!(target.command, "codo");
        assert!(target.negated);
    }

    #[test]
    fn test_malformed_targets() {
        for text in ["R1.base.extra", "R1.a.b.c", ".base", "R1.", "R1..negativo"] {
            let err = parse_command_target(&word(text)).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidCommandTarget, "{}", text);
        }
    }

    #[test]
    fn test_assignment_requires_equals() {
        let tokens = tokenize("R1.base == 90").unwrap();
        let err = parse_assignment(&tokens).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExpectedAssignment);
        assert!(err.message.contains("'=='"));
    }

    #[test]
    fn test_assignment_fields() {
        let tokens = tokenize("R1.garra = 40").unwrap();
        let assignment = parse_assignment(&tokens).unwrap();
        assert_eq!(assignment.target.command, "garra");
        assert_eq!(assignment.value, "40");
        assert_eq!(assignment.value_span, Span::new(11, 13));
    }

    #[test]
    fn test_short_window() {
        let tokens = tokenize("R1.base =").unwrap();
        let err = parse_assignment(&tokens).unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteStatement);
    }
}

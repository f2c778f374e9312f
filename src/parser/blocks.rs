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

//! Repeat block parsing for the parser.
//!
//! This module provides repeat block parsing functionality:
//! - The `ID.repetir = N {` header
//! - Brace matching
//! - Block bodies made of three-token assignments

use super::helpers::ParserHelpers;
use super::statements::parse_assignment;
use super::Parser;
use crate::analyzer::{ControlFlowAnalyzer, StatementAnalyzer};
use crate::ast::{Assignment, RepeatHeader};
use crate::error::{CompileError, ErrorCode, Result};
use crate::lexer::{is_valid_identifier, Token, REPEAT_COMMAND};

/// Extension trait for repeat block parsing.
pub trait BlockParser {
    /// Parse a whole `repetir` block and return the cursor after its `}`.
    fn parse_repeat_block(&mut self) -> Result<usize>;

    /// Parse the four-token header at the cursor.
    fn parse_repeat_header(&self) -> Result<RepeatHeader>;

    /// Find the `}` matching the `{` at `open`.
    fn find_block_end(&self, open: usize) -> Result<usize>;
}

impl<'a> BlockParser for Parser<'a> {
    fn parse_repeat_block(&mut self) -> Result<usize> {
        let header = self.parse_repeat_header()?;
        let count = self.context.check_repeat_header(&header)?;

        let open = self.position + 3;
        let close = self.find_block_end(open)?;
        let tokens = self.tokens;
        let body = &tokens[open + 1..close];

        let has_statement = body.chunks(3).next().is_some_and(is_block_statement);
        if !has_statement {
            return Err(CompileError::new(
                ErrorCode::EmptyBlock,
                format!("Empty repeat block for robot '{}'", header.robot),
                tokens[open].span.merge(&tokens[close].span),
            )
            .with_hint("A repeat block needs at least one command"));
        }

        let frame = self.context.open_loop(&header, count);
        for chunk in body.chunks(3) {
            let assignment = parse_block_statement(chunk)?;
            self.context.analyze_assignment(&assignment, Some(&frame))?;
        }
        self.context.close_loop(&frame);

        Ok(close + 1)
    }

    fn parse_repeat_header(&self) -> Result<RepeatHeader> {
        let Some([target, operator, count, brace]) = self.window(4) else {
            return Err(self.error(
                ErrorCode::IncompleteStatement,
                "Incomplete or invalid expression",
            ));
        };

        let robot = target
            .text
            .split_once('.')
            .filter(|(robot, command)| {
                is_valid_identifier(robot) && command.eq_ignore_ascii_case(REPEAT_COMMAND)
            })
            .map(|(robot, _)| robot.to_string())
            .ok_or_else(|| {
                CompileError::new(
                    ErrorCode::InvalidCommandTarget,
                    format!("Invalid command target: '{}'", target.text),
                    target.span,
                )
                .with_hint("A repeat block starts with 'ID.repetir = N {'")
            })?;

        if !operator.is_assign() {
            return Err(CompileError::new(
                ErrorCode::ExpectedAssignment,
                format!(
                    "Expected '=' after '{}', found '{}'",
                    target.text, operator.text
                ),
                operator.span,
            ));
        }

        if !brace.is_open_brace() {
            return Err(CompileError::new(
                ErrorCode::ExpectedOpenBrace,
                format!("Expected '{{' after repeat count, found '{}'", brace.text),
                brace.span,
            ));
        }

        Ok(RepeatHeader {
            robot,
            count: count.text.clone(),
            span: target.span,
            count_span: count.span,
        })
    }

    fn find_block_end(&self, open: usize) -> Result<usize> {
        let mut depth = 0usize;
        for (index, token) in self.tokens.iter().enumerate().skip(open) {
            if token.is_open_brace() {
                depth += 1;
            } else if token.is_close_brace() {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(index);
                }
            }
        }

        let span = self
            .tokens
            .get(open)
            .map_or_else(|| self.current_span(), |t| t.span);
        Err(
            CompileError::new(ErrorCode::UnmatchedBrace, "Unmatched '{'", span)
                .with_hint("Close the repeat block with '}'"),
        )
    }
}

/// Whether a body chunk has the `ID.command = value` shape.
fn is_block_statement(chunk: &[Token]) -> bool {
    chunk.len() == 3 && chunk[0].has_dot()
}

/// Parse one statement of a block body.
fn parse_block_statement(chunk: &[Token]) -> Result<Assignment> {
    if !is_block_statement(chunk) {
        let text: Vec<&str> = chunk.iter().map(|t| t.text.as_str()).collect();
        let span = match (chunk.first(), chunk.last()) {
            (Some(first), Some(last)) => first.span.merge(&last.span),
            _ => Default::default(),
        };
        return Err(CompileError::new(
            ErrorCode::IncompleteBlockStatement,
            format!("Incomplete statement in block: '{}'", text.join(" ")),
            span,
        )
        .with_hint("Block statements have the form 'ID.command = value'"));
    }

    parse_assignment(chunk)
}

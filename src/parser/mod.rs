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

//! Parser module for the ArmScript compiler.
//!
//! The parser is the statement dispatcher of the single-pass pipeline. It
//! walks the token stream with a small fixed lookahead, recognizes each
//! statement shape, and hands the statement straight to the analyzer.
//!
//! # Module Structure
//!
//! - `blocks` - Repeat block parsing (BlockParser trait)
//! - `helpers` - Token stream navigation and error handling (ParserHelpers trait)
//! - `statements` - Dispatch, declarations and assignments (StatementParser trait)

// Submodules
pub mod blocks;
pub mod helpers;
pub mod statements;

// Internal imports from submodules
use helpers::ParserHelpers;
use statements::StatementParser;

pub use statements::{parse_assignment, parse_command_target};

use crate::analyzer::{AnalysisContext, ControlState};
use crate::lexer::Token;

/// The parser state.
pub struct Parser<'a> {
    /// The token stream to parse.
    pub(crate) tokens: &'a [Token],
    /// Current position in the token stream.
    pub(crate) position: usize,
    /// The analysis run that receives every statement.
    pub(crate) context: &'a mut AnalysisContext,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given token stream.
    pub fn new(tokens: &'a [Token], context: &'a mut AnalysisContext) -> Self {
        Self {
            tokens,
            position: 0,
            context,
        }
    }

    /// Current position in the token stream.
    pub fn position(&self) -> usize {
        self.position
    }

    // ========================================
    // Dispatch Loop
    // ========================================

    /// Consume the token stream.
    ///
    /// Stops at the first error, which is recorded in the context.
    pub fn run(&mut self) {
        self.context.transition(ControlState::InStatement);

        while !self.is_at_end() {
            match self.parse_statement() {
                Ok(next) => self.position = next,
                Err(error) => {
                    self.context.fail(error);
                    return;
                }
            }
        }

        self.context.transition(ControlState::Done);
    }
}

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

//! Lexer module for the ArmScript compiler.
//!
//! This module splits source code into whitespace-delimited words and
//! validates that every word only uses the characters `[A-Za-z0-9.={}]`.
//! Tokenizing stops at the first offending word.

mod tokens;

pub use tokens::{
    is_unsigned_literal, is_valid_identifier, Token, ASSIGN, CLOSE_BRACE, NEGATIVE_SUFFIX,
    OPEN_BRACE, REPEAT_COMMAND, ROBOT_KEYWORD,
};

use logos::Logos;
use tokens::RawToken;

use crate::error::{CompileError, ErrorCode, Span};

/// The lexer state for tokenizing source code.
pub struct Lexer<'source> {
    /// The generated lexer over the source.
    inner: logos::Lexer<'source, RawToken>,
    /// Number of tokens produced so far.
    index: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: RawToken::lexer(source),
            index: 0,
        }
    }

    /// Get the next token from the source.
    pub fn next_token(&mut self) -> Result<Option<Token>, CompileError> {
        let Some(raw) = self.inner.next() else {
            return Ok(None);
        };

        let slice = self.inner.slice();
        let span = Span::from(self.inner.span());

        match raw {
            Ok(RawToken::Word) => {
                let token = Token::new(slice, self.index, span);
                self.index += 1;
                Ok(Some(token))
            }
            Ok(RawToken::Invalid) | Err(()) => Err(CompileError::new(
                ErrorCode::InvalidToken,
                format!("Invalid token: '{}'", slice),
                span,
            )
            .with_hint("Only letters, digits and the characters . = { } are allowed")),
        }
    }
}

/// Tokenize source code into a vector of tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    log::trace!("tokenized {} words", tokens.len());

    Ok(tokens)
}

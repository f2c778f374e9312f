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

//! Token definitions for the ArmScript language.

use std::fmt;

use logos::Logos;

use crate::error::Span;

/// `Robot` - robot declaration keyword.
pub const ROBOT_KEYWORD: &str = "robot";

/// `negativo` - sign inversion suffix.
pub const NEGATIVE_SUFFIX: &str = "negativo";

/// `repetir` - repeat block command.
pub const REPEAT_COMMAND: &str = "repetir";

/// `=` - assignment operator.
pub const ASSIGN: &str = "=";

/// `{` - block opener.
pub const OPEN_BRACE: &str = "{";

/// `}` - block closer.
pub const CLOSE_BRACE: &str = "}";

/// Raw lexeme classes recognized by the generated lexer.
///
/// Every whitespace-separated run of characters is either a well-formed
/// `Word` or an `Invalid` token. `Word` wins ties on equal-length matches.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub(crate) enum RawToken {
    /// A run of characters from `[A-Za-z0-9.={}]`.
    #[regex(r"[A-Za-z0-9.={}]+", priority = 3)]
    Word,

    /// Any other run of non-whitespace characters.
    #[regex(r"[^\s]+", priority = 1)]
    Invalid,
}

/// A token in the ArmScript language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word as written in the source.
    pub text: String,
    /// Position of the token in the token stream.
    pub index: usize,
    /// Byte range of the token in the source.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, index: usize, span: Span) -> Self {
        Self {
            text: text.into(),
            index,
            span,
        }
    }

    /// Check if this token is the `robot` keyword (any letter case).
    pub fn is_robot_keyword(&self) -> bool {
        self.text.eq_ignore_ascii_case(ROBOT_KEYWORD)
    }

    /// Check if this token is exactly `=`.
    pub fn is_assign(&self) -> bool {
        self.text == ASSIGN
    }

    /// Check if this token is exactly `{`.
    pub fn is_open_brace(&self) -> bool {
        self.text == OPEN_BRACE
    }

    /// Check if this token is exactly `}`.
    pub fn is_close_brace(&self) -> bool {
        self.text == CLOSE_BRACE
    }

    /// Check if this token has a member access like `R1.base`.
    pub fn has_dot(&self) -> bool {
        self.text.contains('.')
    }

    /// Check if this token targets the repeat command (`R1.repetir`).
    pub fn ends_with_repeat(&self) -> bool {
        let suffix_len = REPEAT_COMMAND.len() + 1;
        self.text.len() >= suffix_len
            && self
                .text
                .get(self.text.len() - suffix_len..)
                .is_some_and(|tail| tail.eq_ignore_ascii_case(".repetir"))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Check whether a word is a valid robot identifier (`^[A-Za-z]+[0-9]*$`).
pub fn is_valid_identifier(word: &str) -> bool {
    let letters = word.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    letters > 0 && word[letters..].chars().all(|c| c.is_ascii_digit())
}

/// Check whether a word is an unsigned decimal literal (`^\d+$`).
pub fn is_unsigned_literal(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

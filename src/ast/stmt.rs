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

//! Statement nodes for the ArmScript compiler.
//!
//! The parser recognizes the shape of a statement and hands one of these
//! records to the analyzer, which checks its meaning and emits code for it.

use crate::error::Span;

/// `Robot <ID>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotDecl {
    /// The robot identifier as written.
    pub id: String,
    /// Span of the identifier.
    pub span: Span,
}

/// The left-hand side of an assignment: `ID.command` or `ID.command.negativo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTarget {
    /// The robot identifier as written.
    pub robot: String,
    /// The command name as written, without the sign suffix.
    pub command: String,
    /// Whether the `.negativo` suffix was present.
    pub negated: bool,
    /// Span of the whole target word.
    pub span: Span,
}

impl CommandTarget {
    /// The target as it appears in source form.
    pub fn display_name(&self) -> String {
        if self.negated {
            format!("{}.{}.negativo", self.robot, self.command)
        } else {
            format!("{}.{}", self.robot, self.command)
        }
    }

    /// The command with its suffix, used in diagnostics.
    pub fn command_name(&self) -> String {
        if self.negated {
            format!("{}.negativo", self.command.to_ascii_lowercase())
        } else {
            self.command.to_ascii_lowercase()
        }
    }
}

/// `ID.command[.negativo] = value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// The assigned command.
    pub target: CommandTarget,
    /// The value literal as written.
    pub value: String,
    /// Span of the value literal.
    pub value_span: Span,
}

/// `ID.repetir = N {`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatHeader {
    /// The robot that owns the block.
    pub robot: String,
    /// The repetition count literal as written.
    pub count: String,
    /// Span of the target word.
    pub span: Span,
    /// Span of the count literal.
    pub count_span: Span,
}

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

//! Symbol definitions for the semantic analyzer.
//!
//! A symbol records the last validated value of one command for one robot.
//! The declaration itself is stored as the `robot` command with value 0.

use serde::Serialize;

/// Command name under which robot declarations are stored.
pub const ROBOT_METHOD: &str = "robot";

/// Symbol table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// The robot identifier as written in the statement.
    pub robot_id: String,
    /// The lowercase command name.
    pub command: String,
    /// 0 for a declaration, 1 for an assigned command.
    pub parameter_flag: u8,
    /// The signed value.
    pub value: i64,
}

impl Symbol {
    /// Create the declaration symbol for a robot.
    pub fn robot(robot_id: impl Into<String>) -> Self {
        Self {
            robot_id: robot_id.into(),
            command: ROBOT_METHOD.to_string(),
            parameter_flag: 0,
            value: 0,
        }
    }

    /// Create the symbol for an assigned command.
    pub fn assigned(robot_id: impl Into<String>, command: impl Into<String>, value: i64) -> Self {
        Self {
            robot_id: robot_id.into(),
            command: command.into().to_ascii_lowercase(),
            parameter_flag: 1,
            value,
        }
    }

    /// The case-insensitive key of this symbol.
    pub fn key(&self) -> SymbolKey {
        SymbolKey::new(&self.robot_id, &self.command)
    }
}

/// Case-insensitive `(robot, command)` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolKey {
    robot: String,
    command: String,
}

impl SymbolKey {
    /// Create a key, folding both parts to lowercase.
    pub fn new(robot: &str, command: &str) -> Self {
        Self {
            robot: robot.to_ascii_lowercase(),
            command: command.to_ascii_lowercase(),
        }
    }
}

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

//! Symbol table for the semantic analyzer.
//!
//! The table is flat: one entry per `(robot, command)` pair, listed in the
//! order the entries were last written.

use indexmap::IndexMap;

use super::symbol::{Symbol, SymbolKey, ROBOT_METHOD};

/// The symbol table for semantic analysis.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    entries: IndexMap<SymbolKey, Symbol>,
}

impl SymbolTable {
    /// Create an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the declaration of a robot.
    ///
    /// Returns the existing declaration if the robot (any case) is already
    /// declared.
    pub fn declare_robot(&mut self, robot_id: &str) -> Result<(), &Symbol> {
        let key = SymbolKey::new(robot_id, ROBOT_METHOD);
        if self.entries.contains_key(&key) {
            return Err(&self.entries[&key]);
        }
        self.entries.insert(key, Symbol::robot(robot_id));
        Ok(())
    }

    /// Check if a robot (any case) has been declared.
    pub fn is_robot_declared(&self, robot_id: &str) -> bool {
        self.entries
            .contains_key(&SymbolKey::new(robot_id, ROBOT_METHOD))
    }

    /// Look up a symbol.
    pub fn lookup(&self, robot_id: &str, command: &str) -> Option<&Symbol> {
        self.entries.get(&SymbolKey::new(robot_id, command))
    }

    /// Replace or add a symbol.
    ///
    /// A replaced entry moves to the end of the listing order.
    pub fn upsert(&mut self, symbol: Symbol) {
        let key = symbol.key();
        self.entries.shift_remove(&key);
        self.entries.insert(key, symbol);
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the symbols in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.entries.values()
    }

    /// Consume the table and return the symbols in listing order.
    pub fn into_vec(self) -> Vec<Symbol> {
        self.entries.into_values().collect()
    }
}

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

//! Code generation module for the ArmScript compiler.
//!
//! This module produces the quadruple intermediate representation consumed
//! by a motion executor. It handles:
//! - The operator vocabulary and quadruple layout
//! - Append-only emission (the position of a quadruple is its address)
//! - Loop framing with per-run loop identifiers

mod emit;
mod labels;

pub use emit::EmitHelpers;
pub use labels::{LabelManager, LoopFrame, LOOP_LABEL_PREFIX};

use std::fmt;

use serde::Serialize;

/// Placeholder for an unused operand.
pub const EMPTY_OPERAND: &str = "—";

/// Operand naming the object class created by `CREATE`.
pub const ROBOT_CLASS: &str = "Robot";

/// Quadruple operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    /// `CREATE(class, —, id)`
    Create,
    /// `SET_SPEED(robot, seconds, command)`
    SetSpeed,
    /// `MOVE(robot, value, command)`
    Move,
    /// `MOVE_NEG(robot, value, command)` with a negative or zero value.
    MoveNeg,
    /// `BEGIN_LOOP(count, —, loop_id)`
    BeginLoop,
    /// `END_LOOP(loop_id, count, —)`
    EndLoop,
}

impl Operator {
    /// The mnemonic as printed in reports.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Operator::Create => "CREATE",
            Operator::SetSpeed => "SET_SPEED",
            Operator::Move => "MOVE",
            Operator::MoveNeg => "MOVE_NEG",
            Operator::BeginLoop => "BEGIN_LOOP",
            Operator::EndLoop => "END_LOOP",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A single IR instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quadruple {
    pub operator: Operator,
    pub operand1: String,
    pub operand2: String,
    pub result: String,
}

impl Quadruple {
    /// Create a new quadruple.
    pub fn new(
        operator: Operator,
        operand1: impl Into<String>,
        operand2: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            operator,
            operand1: operand1.into(),
            operand2: operand2.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for Quadruple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.operator, self.operand1, self.operand2, self.result
        )
    }
}

/// Render a delay the way it appears in `SET_SPEED` operands.
pub fn format_delay(seconds: f64) -> String {
    format!("{:.1}", seconds)
}

/// The quadruple emitter.
///
/// One emitter is created per analysis run, so loop identifiers restart at
/// `loop0` for every script.
#[derive(Debug, Default)]
pub struct Emitter {
    /// Emitted quadruples in program order.
    quadruples: Vec<Quadruple>,
    /// Counter for loop identifiers.
    loop_counter: usize,
}

impl Emitter {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The quadruples emitted so far.
    pub fn quadruples(&self) -> &[Quadruple] {
        &self.quadruples
    }

    /// Consume the emitter and return the program.
    pub fn into_quadruples(self) -> Vec<Quadruple> {
        self.quadruples
    }
}

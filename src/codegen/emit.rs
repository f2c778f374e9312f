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

//! Emit helper methods for code generation.
//!
//! This module provides the per-statement emission utilities:
//! - Robot creation
//! - Speed changes
//! - Joint movements, signed or plain

use super::{format_delay, Emitter, Operator, Quadruple, EMPTY_OPERAND, ROBOT_CLASS};

/// Extension trait for quadruple emission.
///
/// This trait is implemented for `Emitter` and keeps the operand layout of
/// every operator in one place.
pub trait EmitHelpers {
    /// Append a quadruple and return its address.
    fn emit(&mut self, quad: Quadruple) -> usize;

    /// Emit `CREATE(Robot, —, id)`.
    fn emit_create(&mut self, robot: &str) -> usize;

    /// Emit `SET_SPEED(robot, seconds, command)`.
    fn emit_set_speed(&mut self, robot: &str, seconds: f64, command: &str) -> usize;

    /// Emit `MOVE` for a non-negated value or `MOVE_NEG` for a negated one.
    fn emit_move(&mut self, robot: &str, value: i64, command: &str, negated: bool) -> usize;
}

impl EmitHelpers for Emitter {
    fn emit(&mut self, quad: Quadruple) -> usize {
        let address = self.quadruples.len();
        log::debug!("emit [{}] {}", address, quad);
        self.quadruples.push(quad);
        address
    }

    fn emit_create(&mut self, robot: &str) -> usize {
        self.emit(Quadruple::new(
            Operator::Create,
            ROBOT_CLASS,
            EMPTY_OPERAND,
            robot,
        ))
    }

    fn emit_set_speed(&mut self, robot: &str, seconds: f64, command: &str) -> usize {
        self.emit(Quadruple::new(
            Operator::SetSpeed,
            robot,
            format_delay(seconds),
            command,
        ))
    }

    fn emit_move(&mut self, robot: &str, value: i64, command: &str, negated: bool) -> usize {
        let operator = if negated {
            Operator::MoveNeg
        } else {
            Operator::Move
        };
        self.emit(Quadruple::new(operator, robot, value.to_string(), command))
    }
}

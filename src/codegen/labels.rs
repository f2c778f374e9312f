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

//! Loop label management for code generation.
//!
//! This module handles:
//! - Loop identifiers (`loop0`, `loop1`, ...)
//! - The frame of the loop currently being emitted
//! - LabelManager trait for opening and closing loop frames

use super::{EmitHelpers, Emitter, Operator, Quadruple, EMPTY_OPERAND};

/// Prefix of generated loop identifiers.
pub const LOOP_LABEL_PREFIX: &str = "loop";

/// An open `repetir` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopFrame {
    /// Loop identifier shared by `BEGIN_LOOP` and `END_LOOP`.
    pub id: String,
    /// The robot that owns the block.
    pub robot: String,
    /// Number of repetitions.
    pub count: i64,
}

impl LoopFrame {
    /// Check whether a robot id (any case) owns this block.
    pub fn is_owned_by(&self, robot: &str) -> bool {
        self.robot.eq_ignore_ascii_case(robot)
    }
}

/// Extension trait for loop label management.
pub trait LabelManager {
    /// Generate a unique label with the given prefix.
    fn make_label(&mut self, prefix: &str) -> String;

    /// Emit `BEGIN_LOOP(count, —, id)` and return the open frame.
    fn begin_loop(&mut self, robot: &str, count: i64) -> LoopFrame;

    /// Emit `END_LOOP(id, count, —)` for a frame.
    fn end_loop(&mut self, frame: &LoopFrame) -> usize;
}

impl LabelManager for Emitter {
    fn make_label(&mut self, prefix: &str) -> String {
        let label = format!("{}{}", prefix, self.loop_counter);
        self.loop_counter += 1;
        label
    }

    fn begin_loop(&mut self, robot: &str, count: i64) -> LoopFrame {
        let id = self.make_label(LOOP_LABEL_PREFIX);
        self.emit(Quadruple::new(
            Operator::BeginLoop,
            count.to_string(),
            EMPTY_OPERAND,
            id.as_str(),
        ));
        LoopFrame {
            id,
            robot: robot.to_string(),
            count,
        }
    }

    fn end_loop(&mut self, frame: &LoopFrame) -> usize {
        self.emit(Quadruple::new(
            Operator::EndLoop,
            frame.id.as_str(),
            frame.count.to_string(),
            EMPTY_OPERAND,
        ))
    }
}

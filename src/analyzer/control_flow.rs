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

//! Control flow analysis for the semantic analyzer.
//!
//! This module validates `repetir` headers and frames the block body with
//! loop quadruples.

use super::command::Command;
use super::context::{AnalysisContext, ControlState};
use super::symbol::Symbol;
use crate::ast::RepeatHeader;
use crate::codegen::{LabelManager, LoopFrame};
use crate::error::{CompileError, ErrorCode, Result};
use crate::lexer::is_unsigned_literal;

/// Extension trait for control flow analysis.
pub trait ControlFlowAnalyzer {
    /// Validate a repeat header and return the repetition count.
    fn check_repeat_header(&self, header: &RepeatHeader) -> Result<i64>;

    /// Emit `BEGIN_LOOP` and enter the block.
    fn open_loop(&mut self, header: &RepeatHeader, count: i64) -> LoopFrame;

    /// Emit `END_LOOP`, record the count, and leave the block.
    fn close_loop(&mut self, frame: &LoopFrame);
}

impl ControlFlowAnalyzer for AnalysisContext {
    fn check_repeat_header(&self, header: &RepeatHeader) -> Result<i64> {
        if !self.symbols.is_robot_declared(&header.robot) {
            return Err(CompileError::new(
                ErrorCode::RobotNotDeclared,
                format!("Robot not declared: '{}'", header.robot),
                header.span,
            )
            .with_hint(format!("Declare it first with 'Robot {}'", header.robot)));
        }

        if !is_unsigned_literal(&header.count) {
            return Err(CompileError::new(
                ErrorCode::InvalidNumber,
                format!("Invalid number: '{}'", header.count),
                header.count_span,
            ));
        }

        let bounds = Command::Repetir.bounds(self.config.gripper_mode);
        let out_of_range = || {
            CompileError::new(
                ErrorCode::RepeatCountOutOfRange,
                format!(
                    "Repeat count out of range: {} (range: {})",
                    header.count, bounds
                ),
                header.count_span,
            )
        };

        let count: i64 = header.count.parse().map_err(|_| out_of_range())?;
        if !bounds.contains(count) {
            return Err(out_of_range());
        }

        Ok(count)
    }

    fn open_loop(&mut self, header: &RepeatHeader, count: i64) -> LoopFrame {
        let frame = self.emitter.begin_loop(&header.robot, count);
        log::debug!("open {} for {} x{}", frame.id, frame.robot, count);
        self.transition(ControlState::InBlock);
        frame
    }

    fn close_loop(&mut self, frame: &LoopFrame) {
        self.emitter.end_loop(frame);
        self.symbols.upsert(Symbol::assigned(
            frame.robot.as_str(),
            Command::Repetir.name(),
            frame.count,
        ));
        log::debug!("close {}", frame.id);
        self.transition(ControlState::InStatement);
    }
}

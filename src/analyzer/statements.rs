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

//! Statement analysis for the semantic analyzer.
//!
//! This module provides statement analysis functionality:
//! - Robot declarations
//! - Command assignments, at top level or inside a repeat block
//! - Value parsing and range checks

use super::command::Command;
use super::context::AnalysisContext;
use super::symbol::Symbol;
use crate::ast::{Assignment, CommandTarget, RobotDecl};
use crate::codegen::{EmitHelpers, LoopFrame};
use crate::error::{CompileError, ErrorCode, Result};
use crate::lexer::is_unsigned_literal;

/// Extension trait for statement analysis.
pub trait StatementAnalyzer {
    /// Analyze a robot declaration.
    fn declare_robot(&mut self, decl: &RobotDecl) -> Result<()>;

    /// Analyze a command assignment.
    ///
    /// `scope` is the enclosing repeat block, if any.
    fn analyze_assignment(&mut self, assignment: &Assignment, scope: Option<&LoopFrame>)
        -> Result<()>;

    /// Resolve the command named by an assignment target.
    fn resolve_command(&self, target: &CommandTarget, scope: Option<&LoopFrame>) -> Result<Command>;

    /// Parse and range-check the value of an assignment, returning the signed value.
    fn checked_value(&self, assignment: &Assignment, command: Command) -> Result<i64>;
}

impl StatementAnalyzer for AnalysisContext {
    fn declare_robot(&mut self, decl: &RobotDecl) -> Result<()> {
        if let Err(existing) = self.symbols.declare_robot(&decl.id) {
            return Err(CompileError::new(
                ErrorCode::RobotAlreadyDeclared,
                format!("Robot already declared: '{}'", decl.id),
                decl.span,
            )
            .with_hint(format!("'{}' was declared earlier", existing.robot_id)));
        }

        self.velocity.register(&decl.id);
        self.emitter.emit_create(&decl.id);
        log::debug!("declared robot {}", decl.id);
        Ok(())
    }

    fn analyze_assignment(
        &mut self,
        assignment: &Assignment,
        scope: Option<&LoopFrame>,
    ) -> Result<()> {
        let target = &assignment.target;
        let command = self.resolve_command(target, scope)?;
        let value = self.checked_value(assignment, command)?;

        if command == Command::Velocidad {
            let seconds = value as f64;
            self.velocity.set(&target.robot, seconds);
            self.emitter
                .emit_set_speed(&target.robot, seconds, command.name());
        } else {
            let seconds = self.velocity.delay(&target.robot);
            self.emitter
                .emit_set_speed(&target.robot, seconds, command.name());
            self.emitter
                .emit_move(&target.robot, value, command.name(), target.negated);
        }

        self.symbols
            .upsert(Symbol::assigned(target.robot.as_str(), command.name(), value));
        log::debug!("{} = {}", target.display_name(), value);
        Ok(())
    }

    fn resolve_command(&self, target: &CommandTarget, scope: Option<&LoopFrame>) -> Result<Command> {
        if let Some(frame) = scope {
            if !frame.is_owned_by(&target.robot) {
                return Err(CompileError::new(
                    ErrorCode::ForeignRobotInBlock,
                    format!(
                        "Robot '{}' used in block of robot '{}'",
                        target.robot, frame.robot
                    ),
                    target.span,
                )
                .with_hint("A repeat block may only command its own robot"));
            }
        }

        if !self.symbols.is_robot_declared(&target.robot) {
            return Err(CompileError::new(
                ErrorCode::RobotNotDeclared,
                format!("Robot not declared: '{}'", target.robot),
                target.span,
            )
            .with_hint(format!("Declare it first with 'Robot {}'", target.robot)));
        }

        let command = Command::from_name(&target.command).ok_or_else(|| {
            CompileError::new(
                ErrorCode::UnknownCommand,
                format!("Unknown command: '{}'", target.command),
                target.span,
            )
            .with_hint("Valid commands are base, hombro, codo, garra, velocidad and repetir")
        })?;

        if command == Command::Repetir {
            return Err(match scope {
                Some(_) => CompileError::new(
                    ErrorCode::NestedLoop,
                    "Nested repetir blocks are not allowed",
                    target.span,
                ),
                None => CompileError::new(
                    ErrorCode::RepeatWithoutBlock,
                    format!("'{}' requires a block", target.display_name()),
                    target.span,
                )
                .with_hint(format!("Write '{}.repetir = N {{ ... }}'", target.robot)),
            });
        }

        if target.negated && !command.is_joint() {
            return Err(CompileError::new(
                ErrorCode::NegationNotAllowed,
                format!("Negation is not allowed for {}", command),
                target.span,
            )
            .with_hint("Only base, hombro, codo and garra accept '.negativo'"));
        }

        Ok(command)
    }

    fn checked_value(&self, assignment: &Assignment, command: Command) -> Result<i64> {
        let target = &assignment.target;
        let literal = assignment.value.as_str();

        if !is_unsigned_literal(literal) {
            return Err(CompileError::new(
                ErrorCode::InvalidNumber,
                format!("Invalid number: '{}'", literal),
                assignment.value_span,
            )
            .with_hint("Values are unsigned integers; use '.negativo' for negative angles"));
        }

        let bounds = command.bounds(self.config.gripper_mode);
        let out_of_range = || {
            CompileError::new(
                ErrorCode::ValueOutOfRange,
                format!(
                    "Value out of range for {}: {} (range: {})",
                    target.command_name(),
                    literal,
                    bounds
                ),
                assignment.value_span,
            )
        };

        let magnitude: i64 = literal.parse().map_err(|_| out_of_range())?;
        let (value, allowed) = if target.negated {
            (-magnitude, bounds.negated())
        } else {
            (magnitude, bounds)
        };

        if !allowed.contains(value) {
            return Err(out_of_range());
        }

        Ok(value)
    }
}

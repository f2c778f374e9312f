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

//! Analysis context for the semantic analyzer.
//!
//! This module defines the mutable state of one analysis run: the symbol
//! table, the velocity registry, the emitter, the diagnostics, and the
//! control state of the dispatcher.

use super::symbol_table::SymbolTable;
use super::velocity::VelocityRegistry;
use super::AnalysisResult;
use crate::codegen::Emitter;
use crate::config::AnalyzerConfig;
use crate::error::{CompileError, Diagnostics};

/// Where the dispatcher currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    /// No token consumed yet.
    #[default]
    Start,
    /// Between or inside top-level statements.
    InStatement,
    /// Inside a `repetir` block body.
    InBlock,
    /// The token stream was consumed without errors.
    Done,
    /// A diagnostic was recorded. Terminal.
    Error,
}

impl ControlState {
    /// Check if no further tokens may be consumed.
    pub fn is_terminal(self) -> bool {
        matches!(self, ControlState::Done | ControlState::Error)
    }
}

/// Context for one analysis run.
///
/// A context is created per call and dropped when the result is built, so no
/// state carries over between scripts.
#[derive(Debug)]
pub struct AnalysisContext {
    /// Settings for this run.
    pub config: AnalyzerConfig,
    /// Declared robots and last command values.
    pub symbols: SymbolTable,
    /// Delay in effect per robot.
    pub velocity: VelocityRegistry,
    /// Quadruple output.
    pub emitter: Emitter,
    /// Recorded failures.
    pub diagnostics: Diagnostics,
    /// Dispatcher state.
    state: ControlState,
}

impl AnalysisContext {
    /// Create a fresh context.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            symbols: SymbolTable::new(),
            velocity: VelocityRegistry::new(config.default_delay_seconds),
            emitter: Emitter::new(),
            diagnostics: Diagnostics::new(),
            state: ControlState::Start,
        }
    }

    /// The current control state.
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Move to another state.
    ///
    /// Leaving a terminal state is ignored.
    pub fn transition(&mut self, next: ControlState) {
        if self.state.is_terminal() {
            return;
        }
        if self.state != next {
            log::trace!("state {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    /// Record a failure and halt.
    pub fn fail(&mut self, error: CompileError) {
        log::debug!("analysis failed: {}", error);
        self.diagnostics.record(error);
        self.state = ControlState::Error;
    }

    /// Check if analysis has halted on an error.
    pub fn is_halted(&self) -> bool {
        self.state == ControlState::Error || self.diagnostics.is_halted()
    }

    /// Build the result of this run.
    pub fn finish(mut self) -> AnalysisResult {
        if self.is_halted() {
            return AnalysisResult::Failure {
                diagnostics: self.diagnostics,
            };
        }
        self.transition(ControlState::Done);
        AnalysisResult::Success {
            symbols: self.symbols.into_vec(),
            quadruples: self.emitter.into_quadruples(),
        }
    }
}

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

//! Runner module for executing quadruples and watching script files.
//!
//! This module provides functionality to:
//! - Execute a quadruple program against a motion driver
//! - Simulate a robot arm and record its motion trace
//! - Watch script files for changes

mod executor;
mod watcher;

pub use executor::{ExecutionSummary, Executor, Motion, MotionDriver, SimulatedDriver};
pub use watcher::ScriptWatcher;

use thiserror::Error;

/// Errors that can occur during runner operations.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The quadruple program cannot be executed.
    #[error("Malformed program at quadruple {address}: {reason}")]
    MalformedProgram { address: usize, reason: String },

    /// The motion driver rejected a command.
    #[error("Driver error: {0}")]
    Driver(String),

    /// Error watching files.
    #[error("File watch error: {0}")]
    WatchError(String),
}

impl RunnerError {
    pub(crate) fn malformed(address: usize, reason: impl Into<String>) -> Self {
        RunnerError::MalformedProgram {
            address,
            reason: reason.into(),
        }
    }
}

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

//! Semantic analyzer module for the ArmScript compiler.
//!
//! This module runs the single-pass pipeline over a script:
//! - Lexical validation
//! - Statement dispatch and semantic checks
//! - Symbol table and velocity bookkeeping
//! - Quadruple generation
//!
//! The analysis stops at the first error.

mod command;
mod context;
mod control_flow;
mod statements;
mod symbol;
mod symbol_table;
mod velocity;

pub use command::{Command, ValueRange};
pub use context::{AnalysisContext, ControlState};
pub use control_flow::ControlFlowAnalyzer;
pub use statements::StatementAnalyzer;
pub use symbol::{Symbol, SymbolKey, ROBOT_METHOD};
pub use symbol_table::SymbolTable;
pub use velocity::VelocityRegistry;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::codegen::Quadruple;
use crate::config::AnalyzerConfig;
use crate::error::{CompileError, Diagnostics, ErrorCode, Span};
use crate::lexer::tokenize;
use crate::parser::Parser;

/// The outcome of analyzing one script.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    /// The whole script is valid.
    Success {
        symbols: Vec<Symbol>,
        quadruples: Vec<Quadruple>,
    },
    /// Analysis stopped at the first error.
    Failure { diagnostics: Diagnostics },
}

impl AnalysisResult {
    /// Build a failure from a single error.
    pub fn failure(error: CompileError) -> Self {
        AnalysisResult::Failure {
            diagnostics: Diagnostics::from(error),
        }
    }

    /// Check if the script was accepted.
    pub fn success(&self) -> bool {
        matches!(self, AnalysisResult::Success { .. })
    }

    /// The symbol table. Empty on failure.
    pub fn symbols(&self) -> &[Symbol] {
        match self {
            AnalysisResult::Success { symbols, .. } => symbols,
            AnalysisResult::Failure { .. } => &[],
        }
    }

    /// The quadruples. Empty on failure.
    pub fn quadruples(&self) -> &[Quadruple] {
        match self {
            AnalysisResult::Success { quadruples, .. } => quadruples,
            AnalysisResult::Failure { .. } => &[],
        }
    }

    /// The structured errors. Empty on success.
    pub fn diagnostics(&self) -> &[CompileError] {
        match self {
            AnalysisResult::Success { .. } => &[],
            AnalysisResult::Failure { diagnostics } => diagnostics.as_slice(),
        }
    }

    /// The error messages. Empty on success.
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics().iter().map(|e| e.to_string()).collect()
    }
}

/// The semantic analyzer.
///
/// Holds only configuration; every call to [`Analyzer::analyze`] works on a
/// fresh [`AnalysisContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a script.
    pub fn analyze(&self, source: &str) -> AnalysisResult {
        match panic::catch_unwind(AssertUnwindSafe(|| self.run(source))) {
            Ok(result) => result,
            Err(payload) => {
                let detail = panic_detail(payload.as_ref());
                log::warn!("analyzer panicked: {}", detail);
                AnalysisResult::failure(CompileError::internal(detail))
            }
        }
    }

    fn run(&self, source: &str) -> AnalysisResult {
        let mut ctx = AnalysisContext::new(self.config);

        if source.trim().is_empty() {
            ctx.fail(
                CompileError::new(ErrorCode::EmptySource, "Empty source", Span::default())
                    .with_hint("Start with a declaration like 'Robot R1'"),
            );
            return ctx.finish();
        }

        match tokenize(source) {
            Ok(tokens) => Parser::new(&tokens, &mut ctx).run(),
            Err(error) => ctx.fail(error),
        }

        ctx.finish()
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Analyze a script with the default configuration.
pub fn analyze(source: &str) -> AnalysisResult {
    Analyzer::new().analyze(source)
}

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

//! ArmScript Compiler Library
//!
//! This library compiles robot arm command scripts into a symbol table and a
//! quadruple program for a motion executor.
//!
//! ```text
//! Robot R1
//! R1.velocidad = 2
//! R1.base = 90
//! R1.repetir = 3 {
//!     R1.codo = 45
//!     R1.codo.negativo = 45
//! }
//! ```
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`lexer`] - Tokenization of source code
//! - [`parser`] - Statement dispatch over the token stream
//! - [`ast`] - Statement record definitions
//! - [`analyzer`] - Semantic checks, symbol table and velocity registry
//! - [`codegen`] - Quadruple generation
//! - [`config`] - Analyzer configuration
//! - [`output`] - Text and JSON reports
//! - [`runner`] - Quadruple execution and file watching
//!
//! # Example
//!
//! ```
//! let result = armscript::analyze("Robot R1 R1.base = 90");
//! assert!(result.success());
//!
//! for quad in result.quadruples() {
//!     println!("{}", quad);
//! }
//! ```

pub mod analyzer;
pub mod ast;
pub mod codegen;
pub mod config;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod runner;

// Re-export commonly used types
pub use analyzer::{analyze, AnalysisResult, Analyzer, Symbol};
pub use codegen::{Operator, Quadruple};
pub use config::{AnalyzerConfig, GripperMode};
pub use error::{format_error, CompileError, ErrorCode, ErrorKind, Result, Span};
pub use lexer::Token;

/// The version of the ArmScript compiler.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the compiler.
pub const NAME: &str = "ArmScript";

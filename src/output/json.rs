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

//! JSON report.

use serde::Serialize;

use crate::analyzer::{AnalysisResult, Symbol};
use crate::codegen::Quadruple;

#[derive(Serialize)]
struct Report<'a> {
    success: bool,
    symbols: &'a [Symbol],
    quadruples: &'a [Quadruple],
    errors: Vec<String>,
    diagnostics: Vec<DiagnosticEntry<'a>>,
}

#[derive(Serialize)]
struct DiagnosticEntry<'a> {
    code: &'static str,
    kind: String,
    message: &'a str,
    start: usize,
    end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'a str>,
}

/// Render a result as a pretty-printed JSON document.
pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    let report = Report {
        success: result.success(),
        symbols: result.symbols(),
        quadruples: result.quadruples(),
        errors: result.errors(),
        diagnostics: result
            .diagnostics()
            .iter()
            .map(|e| DiagnosticEntry {
                code: e.code_str(),
                kind: e.kind().to_string(),
                message: &e.message,
                start: e.span.start,
                end: e.span.end,
                hint: e.hint.as_deref(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

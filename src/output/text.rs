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

//! Plain text report.

use std::fmt::Write;

use crate::analyzer::AnalysisResult;

/// Render a result as text tables.
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();

    if !result.success() {
        out.push_str("Errors:\n");
        for error in result.errors() {
            let _ = writeln!(out, "  {}", error);
        }
        return out;
    }

    out.push_str("Symbol table:\n");
    let rows: Vec<[String; 4]> = result
        .symbols()
        .iter()
        .map(|s| {
            [
                s.robot_id.clone(),
                s.command.clone(),
                s.parameter_flag.to_string(),
                s.value.to_string(),
            ]
        })
        .collect();
    write_table(&mut out, ["ID", "COMMAND", "PARAMETER", "VALUE"], &rows);

    out.push_str("\nQuadruples:\n");
    let rows: Vec<[String; 4]> = result
        .quadruples()
        .iter()
        .map(|q| {
            [
                q.operator.to_string(),
                q.operand1.clone(),
                q.operand2.clone(),
                q.result.clone(),
            ]
        })
        .collect();
    let rows: Vec<[String; 5]> = rows
        .into_iter()
        .enumerate()
        .map(|(i, [op, a, b, r])| [i.to_string(), op, a, b, r])
        .collect();
    write_table(&mut out, ["#", "OPERATOR", "OPERAND 1", "OPERAND 2", "RESULT"], &rows);

    out
}

fn write_table<const N: usize>(out: &mut String, header: [&str; N], rows: &[[String; N]]) {
    let mut widths = header.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = header.map(str::to_string);
    for row in std::iter::once(&header).chain(rows) {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        let _ = writeln!(out, "  {}", line.join("  ").trim_end());
    }
}

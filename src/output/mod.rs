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

//! Output module for the ArmScript compiler.
//!
//! This module renders analysis results as reports:
//! - Plain text tables
//! - JSON documents
//!
//! Symbols and quadruples are only rendered for successful results.

mod json;
mod text;

pub use json::render_json;
pub use text::render_text;

use std::fs;
use std::io;
use std::path::Path;

use crate::analyzer::AnalysisResult;

/// Determine the output format from a file extension.
pub fn format_from_extension(path: &Path) -> Option<OutputFormat> {
    match path.extension()?.to_str()?.to_lowercase().as_str() {
        "txt" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

/// The report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Render a result in the specified format.
pub fn render(result: &AnalysisResult, format: OutputFormat) -> io::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => Ok(render_json(result)?),
    }
}

/// Write a rendered result to a file in the specified format.
pub fn write_output(result: &AnalysisResult, path: &Path, format: OutputFormat) -> io::Result<()> {
    let report = render(result, format)?;
    fs::write(path, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use tempfile::TempDir;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            format_from_extension(Path::new("report.txt")),
            Some(OutputFormat::Text)
        );
        assert_eq!(
            format_from_extension(Path::new("report.json")),
            Some(OutputFormat::Json)
        );
        assert_eq!(
            format_from_extension(Path::new("report.JSON")),
            Some(OutputFormat::Json)
        );
        assert_eq!(format_from_extension(Path::new("report.prg")), None);
        assert_eq!(format_from_extension(Path::new("report")), None);
    }

    #[test]
    fn test_write_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        let result = analyze("Robot R1");
        write_output(&result, &path, OutputFormat::Json).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"success\": true"));
    }
}

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

//! Snapshot tests for the ArmScript compiler.
//!
//! These tests use the `insta` crate to capture the token stream, the
//! quadruple listing and both report formats.

use armscript::output::{render_json, render_text};
use armscript::{analyze, lexer, AnalysisResult};

const ARM_SCRIPT: &str = "Robot R1
R1.velocidad = 2
R1.base = 90
R1.repetir = 3 {
    R1.codo = 45
    R1.codo.negativo = 45
}
";

/// Format quadruples one per line.
fn listing(result: &AnalysisResult) -> String {
    assert!(result.success(), "{:?}", result.errors());
    result
        .quadruples()
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{:02} {}\n", i, q))
        .collect()
}

// ============================================================================
// Lexer Snapshots
// ============================================================================

#[test]
fn test_lexer_snapshot() {
    let tokens = lexer::tokenize("Robot R1\nR1.base = 90").unwrap();
    let output: String = tokens
        .iter()
        .map(|t| format!("{} {:?} @ {}..{}\n", t.index, t.text, t.span.start, t.span.end))
        .collect();
    insta::assert_snapshot!(output, @r#"
    0 "Robot" @ 0..5
    1 "R1" @ 6..8
    2 "R1.base" @ 9..16
    3 "=" @ 17..18
    4 "90" @ 19..21
    "#);
}

// ============================================================================
// Quadruple Snapshots
// ============================================================================

#[test]
fn test_quadruples_arm_script() {
    insta::assert_snapshot!(listing(&analyze(ARM_SCRIPT)), @r"
    00 CREATE(Robot, —, R1)
    01 SET_SPEED(R1, 2.0, velocidad)
    02 SET_SPEED(R1, 2.0, base)
    03 MOVE(R1, 90, base)
    04 BEGIN_LOOP(3, —, loop0)
    05 SET_SPEED(R1, 2.0, codo)
    06 MOVE(R1, 45, codo)
    07 SET_SPEED(R1, 2.0, codo)
    08 MOVE_NEG(R1, -45, codo)
    09 END_LOOP(loop0, 3, —)
    ");
}

#[test]
fn test_quadruples_two_robots() {
    let source = "Robot A Robot B A.velocidad = 1 B.garra = 30 A.garra.negativo = 30";
    insta::assert_snapshot!(listing(&analyze(source)), @r"
    00 CREATE(Robot, —, A)
    01 CREATE(Robot, —, B)
    02 SET_SPEED(A, 1.0, velocidad)
    03 SET_SPEED(B, 5.0, garra)
    04 MOVE(B, 30, garra)
    05 SET_SPEED(A, 1.0, garra)
    06 MOVE_NEG(A, -30, garra)
    ");
}

#[test]
fn test_quadruples_consecutive_loops() {
    let source = "Robot R1 R1.repetir = 2 { R1.base = 10 } R1.repetir = 4 { R1.hombro = 20 }";
    insta::assert_snapshot!(listing(&analyze(source)), @r"
    00 CREATE(Robot, —, R1)
    01 BEGIN_LOOP(2, —, loop0)
    02 SET_SPEED(R1, 5.0, base)
    03 MOVE(R1, 10, base)
    04 END_LOOP(loop0, 2, —)
    05 BEGIN_LOOP(4, —, loop1)
    06 SET_SPEED(R1, 5.0, hombro)
    07 MOVE(R1, 20, hombro)
    08 END_LOOP(loop1, 4, —)
    ");
}

#[test]
fn test_quadruples_velocity_inside_loop() {
    let source = "Robot R1 R1.repetir = 2 { R1.velocidad = 3 R1.codo = 90 }";
    insta::assert_snapshot!(listing(&analyze(source)), @r"
    00 CREATE(Robot, —, R1)
    01 BEGIN_LOOP(2, —, loop0)
    02 SET_SPEED(R1, 3.0, velocidad)
    03 SET_SPEED(R1, 3.0, codo)
    04 MOVE(R1, 90, codo)
    05 END_LOOP(loop0, 2, —)
    ");
}

// ============================================================================
// Report Snapshots
// ============================================================================

#[test]
fn test_text_report_arm_script() {
    insta::assert_snapshot!(render_text(&analyze(ARM_SCRIPT)), @r"
Symbol table:
  ID  COMMAND    PARAMETER  VALUE
  R1  robot      0          0
  R1  velocidad  1          2
  R1  base       1          90
  R1  codo       1          -45
  R1  repetir    1          3

Quadruples:
  #  OPERATOR    OPERAND 1  OPERAND 2  RESULT
  0  CREATE      Robot      —          R1
  1  SET_SPEED   R1         2.0        velocidad
  2  SET_SPEED   R1         2.0        base
  3  MOVE        R1         90         base
  4  BEGIN_LOOP  3          —          loop0
  5  SET_SPEED   R1         2.0        codo
  6  MOVE        R1         45         codo
  7  SET_SPEED   R1         2.0        codo
  8  MOVE_NEG    R1         -45        codo
  9  END_LOOP    loop0      3          —
");
}

#[test]
fn test_text_report_failure() {
    insta::assert_snapshot!(render_text(&analyze("Robot R1 R1.base = 500")), @r"
Errors:
  semantic error [E221]: Value out of range for base: 500 (range: 0-360)
");
}

#[test]
fn test_json_report_minimal() {
    let json = render_json(&analyze("Robot R1 R1.base = 90")).unwrap();
    insta::assert_snapshot!(json, @r#"
{
  "success": true,
  "symbols": [
    {
      "robot_id": "R1",
      "command": "robot",
      "parameter_flag": 0,
      "value": 0
    },
    {
      "robot_id": "R1",
      "command": "base",
      "parameter_flag": 1,
      "value": 90
    }
  ],
  "quadruples": [
    {
      "operator": "CREATE",
      "operand1": "Robot",
      "operand2": "—",
      "result": "R1"
    },
    {
      "operator": "SET_SPEED",
      "operand1": "R1",
      "operand2": "5.0",
      "result": "base"
    },
    {
      "operator": "MOVE",
      "operand1": "R1",
      "operand2": "90",
      "result": "base"
    }
  ],
  "errors": [],
  "diagnostics": []
}
"#);
}

#[test]
fn test_json_report_failure() {
    let json = render_json(&analyze("Robot R1 R2.base = 90")).unwrap();
    insta::assert_snapshot!(json, @r#"
{
  "success": false,
  "symbols": [],
  "quadruples": [],
  "errors": [
    "semantic error [E201]: Robot not declared: 'R2'"
  ],
  "diagnostics": [
    {
      "code": "E201",
      "kind": "semantic",
      "message": "Robot not declared: 'R2'",
      "start": 9,
      "end": 16,
      "hint": "Declare it first with 'Robot R2'"
    }
  ]
}
"#);
}

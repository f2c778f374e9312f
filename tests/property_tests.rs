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

//! Property-based tests for the ArmScript analyzer.
//!
//! These tests verify invariants that hold for all inputs, using proptest
//! for random input generation.

use armscript::runner::{Executor, SimulatedDriver};
use armscript::{analyze, lexer, Operator};
use proptest::prelude::*;

/// Joint commands with their upper bound in rotation mode.
const JOINTS: [(&str, i64); 4] = [("base", 360), ("hombro", 180), ("codo", 180), ("garra", 360)];

fn joint() -> impl Strategy<Value = (&'static str, i64)> {
    prop::sample::select(JOINTS.to_vec())
}

// ============================================================================
// Lexer Properties
// ============================================================================

proptest! {
    /// Property: Token spans are in bounds, ordered, and slice to the token text.
    #[test]
    fn prop_lexer_spans_match_text(source in "[A-Za-z0-9.={} \\n\\t]{0,200}") {
        let tokens = lexer::tokenize(&source).unwrap();
        let mut last_end = 0;
        for (index, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.index, index);
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end <= source.len());
            prop_assert_eq!(&source[token.span.start..token.span.end], token.text.as_str());
            last_end = token.span.end;
        }
    }

    /// Property: Tokenizing matches a whitespace split for allowed characters.
    #[test]
    fn prop_lexer_is_whitespace_split(source in "[A-Za-z0-9.={} \\n\\t]{0,200}") {
        let tokens = lexer::tokenize(&source).unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let expected: Vec<&str> = source.split_whitespace().collect();
        prop_assert_eq!(texts, expected);
    }

    /// Property: Any character outside the allowed set fails tokenizing.
    #[test]
    fn prop_lexer_rejects_foreign_characters(
        prefix in "[A-Za-z0-9]{0,10}",
        bad in "[!-/:-<>-@\\[-`|~]",
    ) {
        let source = format!("Robot R1 {}{}", prefix, bad);
        let bad_is_allowed = bad == "." || bad == "=";
        prop_assert_eq!(lexer::tokenize(&source).is_err(), !bad_is_allowed);
    }
}

// ============================================================================
// Value Properties
// ============================================================================

proptest! {
    /// Property: A negated assignment stores and emits exactly the negated magnitude.
    #[test]
    fn prop_negation_inverts_value((command, max) in joint(), raw in 0i64..=360) {
        let magnitude = raw.min(max);
        let source = format!("Robot R1 R1.{}.negativo = {}", command, magnitude);
        let result = analyze(&source);
        prop_assert!(result.success(), "{:?}", result.errors());

        let symbol = result.symbols().last().unwrap();
        prop_assert_eq!(symbol.value, -magnitude);

        let quad = result.quadruples().last().unwrap();
        prop_assert_eq!(quad.operator, Operator::MoveNeg);
        prop_assert_eq!(quad.operand2.clone(), (-magnitude).to_string());
    }

    /// Property: Acceptance of a joint value matches its range.
    #[test]
    fn prop_range_check_matches_bounds((command, max) in joint(), value in 0i64..1000) {
        let source = format!("Robot R1 R1.{} = {}", command, value);
        prop_assert_eq!(analyze(&source).success(), value <= max);
    }

    /// Property: The velocity delay is the last velocidad value before a move.
    #[test]
    fn prop_move_uses_current_velocity(speeds in prop::collection::vec(1i64..=100, 1..5)) {
        let mut source = String::from("Robot R1");
        for speed in &speeds {
            source.push_str(&format!(" R1.velocidad = {}", speed));
        }
        source.push_str(" R1.base = 10");

        let result = analyze(&source);
        prop_assert!(result.success());
        let quads = result.quadruples();
        let speed = &quads[quads.len() - 2];
        prop_assert_eq!(speed.operator, Operator::SetSpeed);
        prop_assert_eq!(speed.operand2.clone(), format!("{:.1}", *speeds.last().unwrap() as f64));
    }
}

// ============================================================================
// Symbol Table Properties
// ============================================================================

proptest! {
    /// Property: One symbol per distinct robot and command, holding the last value.
    #[test]
    fn prop_symbol_table_keeps_last_value(values in prop::collection::vec((0usize..4, 0i64..=180), 1..20)) {
        let mut source = String::from("Robot R1");
        for (joint, value) in &values {
            source.push_str(&format!(" R1.{} = {}", JOINTS[*joint].0, value));
        }

        let result = analyze(&source);
        prop_assert!(result.success(), "{:?}", result.errors());

        for (joint, _) in &values {
            let name = JOINTS[*joint].0;
            let expected = values.iter().rev().find(|(j, _)| *j == *joint).map(|(_, v)| *v);
            let stored: Vec<_> = result.symbols().iter().filter(|s| s.command == name).collect();
            prop_assert_eq!(stored.len(), 1);
            prop_assert_eq!(Some(stored[0].value), expected);
        }
    }

    /// Property: Every declared robot has exactly one CREATE, in declaration order.
    #[test]
    fn prop_create_per_robot(count in 1usize..10) {
        let source: Vec<String> = (0..count).map(|i| format!("Robot R{}", i)).collect();
        let result = analyze(&source.join(" "));
        prop_assert!(result.success());

        let created: Vec<&str> = result
            .quadruples()
            .iter()
            .filter(|q| q.operator == Operator::Create)
            .map(|q| q.result.as_str())
            .collect();
        let expected: Vec<String> = (0..count).map(|i| format!("R{}", i)).collect();
        prop_assert_eq!(created, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

// ============================================================================
// Loop Properties
// ============================================================================

proptest! {
    /// Property: Loop framing is balanced and ids are unique.
    #[test]
    fn prop_loops_are_balanced(counts in prop::collection::vec(1i64..=100, 0..6)) {
        let mut source = String::from("Robot R1");
        for count in &counts {
            source.push_str(&format!(" R1.repetir = {} {{ R1.base = 1 }}", count));
        }

        let result = analyze(&source);
        prop_assert!(result.success(), "{:?}", result.errors());

        let begins: Vec<_> = result.quadruples().iter().filter(|q| q.operator == Operator::BeginLoop).collect();
        let ends: Vec<_> = result.quadruples().iter().filter(|q| q.operator == Operator::EndLoop).collect();
        prop_assert_eq!(begins.len(), counts.len());
        prop_assert_eq!(ends.len(), counts.len());

        for (begin, end) in begins.iter().zip(&ends) {
            prop_assert_eq!(&begin.result, &end.operand1);
            prop_assert_eq!(&begin.operand1, &end.operand2);
        }

        let mut ids: Vec<&str> = begins.iter().map(|q| q.result.as_str()).collect();
        ids.dedup();
        prop_assert_eq!(ids.len(), counts.len());
    }

    /// Property: Executing a loop repeats its body exactly `count` times.
    #[test]
    fn prop_execution_repeats_body(count in 1i64..=100, body in 1usize..4) {
        let mut source = format!("Robot R1 R1.repetir = {} {{", count);
        for i in 0..body {
            source.push_str(&format!(" R1.codo = {}", i));
        }
        source.push_str(" }");

        let result = analyze(&source);
        prop_assert!(result.success());

        let mut driver = SimulatedDriver::new();
        let summary = Executor::default().execute(result.quadruples(), &mut driver).unwrap();
        prop_assert_eq!(summary.motions, count as usize * body);
    }
}

// ============================================================================
// Determinism
// ============================================================================

proptest! {
    /// Property: Analysis is deterministic and independent between runs.
    #[test]
    fn prop_analysis_is_deterministic(source in "(Robot R1 |R1\\.base = [0-9]{1,3} |R1\\.repetir = [0-9]{1,2} \\{ R1\\.codo = 5 \\} ){0,8}") {
        let first = analyze(&source);
        let second = analyze(&source);
        prop_assert_eq!(first, second);
    }
}

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

//! Runtime tests for compiled scripts.
//!
//! These tests analyze a script, execute the quadruples on a simulated
//! arm and check the resulting motion trace.

use armscript::runner::{Executor, Motion, MotionDriver, RunnerError, SimulatedDriver};
use armscript::{analyze, Analyzer, AnalyzerConfig};

/// Analyze and execute a script, returning the simulated arm.
fn simulate(source: &str) -> SimulatedDriver {
    let result = analyze(source);
    assert!(result.success(), "{:?}", result.errors());
    let mut driver = SimulatedDriver::new();
    Executor::default()
        .execute(result.quadruples(), &mut driver)
        .expect("execution failed");
    driver
}

fn moves(driver: &SimulatedDriver) -> Vec<(String, i64)> {
    driver
        .trace()
        .iter()
        .map(|m| (m.command.clone(), m.value))
        .collect()
}

// ============================================================================
// Straight-Line Scripts
// ============================================================================

#[test]
fn test_runtime_single_move() {
    let driver = simulate("Robot R1 R1.base = 90");
    assert_eq!(driver.robots(), &["R1".to_string()]);
    assert_eq!(moves(&driver), vec![("base".to_string(), 90)]);
    assert_eq!(driver.trace()[0].delay_seconds, 5.0);
}

#[test]
fn test_runtime_negated_move_is_negative() {
    let driver = simulate("Robot R1 R1.codo.negativo = 30");
    assert_eq!(moves(&driver), vec![("codo".to_string(), -30)]);
}

#[test]
fn test_runtime_velocity_applies_to_later_moves() {
    let driver = simulate("Robot R1 R1.base = 10 R1.velocidad = 2 R1.base = 20");
    let delays: Vec<f64> = driver.trace().iter().map(|m| m.delay_seconds).collect();
    assert_eq!(delays, vec![5.0, 2.0]);
    assert_eq!(driver.elapsed_seconds(), 7.0);
}

#[test]
fn test_runtime_configured_default_delay() {
    let config = AnalyzerConfig {
        default_delay_seconds: 1.5,
        ..AnalyzerConfig::default()
    };
    let result = Analyzer::with_config(config).analyze("Robot R1 R1.hombro = 45");
    let mut driver = SimulatedDriver::new();
    Executor::new(config.default_delay_seconds)
        .execute(result.quadruples(), &mut driver)
        .unwrap();
    assert_eq!(driver.trace()[0].delay_seconds, 1.5);
}

// ============================================================================
// Repeat Blocks
// ============================================================================

#[test]
fn test_runtime_loop_body_runs_count_times() {
    let driver = simulate("Robot R1 R1.repetir = 3 { R1.base = 0 R1.base = 180 }");
    let values: Vec<i64> = driver.trace().iter().map(|m| m.value).collect();
    assert_eq!(values, vec![0, 180, 0, 180, 0, 180]);
}

#[test]
fn test_runtime_code_after_loop_runs_once() {
    let driver = simulate("Robot R1 R1.repetir = 2 { R1.codo = 10 } R1.garra = 5");
    assert_eq!(
        moves(&driver),
        vec![
            ("codo".to_string(), 10),
            ("codo".to_string(), 10),
            ("garra".to_string(), 5),
        ]
    );
}

#[test]
fn test_runtime_loop_of_one() {
    let driver = simulate("Robot R1 R1.repetir = 1 { R1.codo = 10 }");
    assert_eq!(driver.trace().len(), 1);
}

#[test]
fn test_runtime_max_repeat_count() {
    let driver = simulate("Robot R1 R1.repetir = 100 { R1.garra = 1 R1.garra.negativo = 1 }");
    assert_eq!(driver.trace().len(), 200);
    assert_eq!(driver.trace()[199].value, -1);
}

#[test]
fn test_runtime_consecutive_loops() {
    let driver = simulate(
        "Robot A Robot B A.repetir = 2 { A.base = 1 } B.repetir = 3 { B.base = 2 }",
    );
    let robots: Vec<&str> = driver.trace().iter().map(|m| m.robot.as_str()).collect();
    assert_eq!(robots, vec!["A", "A", "B", "B", "B"]);
}

#[test]
fn test_runtime_velocity_change_inside_loop() {
    let driver = simulate("Robot R1 R1.repetir = 2 { R1.base = 1 R1.velocidad = 1 }");
    let delays: Vec<f64> = driver.trace().iter().map(|m| m.delay_seconds).collect();
    // SET_SPEED before each move carries the delay computed at analysis time.
    assert_eq!(delays, vec![5.0, 5.0]);
}

// ============================================================================
// Driver Contract
// ============================================================================

/// A driver that fails after a number of motions.
struct FailingDriver {
    budget: usize,
}

impl MotionDriver for FailingDriver {
    fn create(&mut self, _robot: &str) -> Result<(), RunnerError> {
        Ok(())
    }

    fn set_speed(&mut self, _robot: &str, _seconds: f64) -> Result<(), RunnerError> {
        Ok(())
    }

    fn move_joint(&mut self, motion: &Motion) -> Result<(), RunnerError> {
        if self.budget == 0 {
            return Err(RunnerError::Driver(format!("{} stalled", motion.command)));
        }
        self.budget -= 1;
        Ok(())
    }
}

#[test]
fn test_runtime_driver_error_stops_execution() {
    let result = analyze("Robot R1 R1.repetir = 5 { R1.base = 10 }");
    let mut driver = FailingDriver { budget: 2 };
    let err = Executor::default()
        .execute(result.quadruples(), &mut driver)
        .unwrap_err();
    assert_eq!(err.to_string(), "Driver error: base stalled");
}

#[test]
fn test_runtime_summary_counts() {
    let result = analyze("Robot R1 R1.repetir = 2 { R1.base = 10 }");
    let mut driver = SimulatedDriver::new();
    let summary = Executor::default()
        .execute(result.quadruples(), &mut driver)
        .unwrap();
    assert_eq!(summary.motions, 2);
    // CREATE, BEGIN_LOOP, 2 x (SET_SPEED, MOVE, END_LOOP)
    assert_eq!(summary.steps, 8);
}

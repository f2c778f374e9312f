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

//! Quadruple execution.
//!
//! The executor walks a program in address order. `SET_SPEED` changes the
//! active delay of a robot, `MOVE` and `MOVE_NEG` issue a motion with that
//! delay, and a `BEGIN_LOOP`/`END_LOOP` pair runs the slice between them
//! `count` times. Loop bounds are found from the loop id alone.

use std::collections::HashMap;

use super::RunnerError;
use crate::codegen::{Operator, Quadruple};
use crate::config::DEFAULT_DELAY_SECONDS;

/// A single joint movement.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    /// The robot that moves.
    pub robot: String,
    /// The joint command.
    pub command: String,
    /// The signed target value.
    pub value: i64,
    /// Seconds the movement takes.
    pub delay_seconds: f64,
}

/// A robot arm backend.
pub trait MotionDriver {
    /// Bring a robot online.
    fn create(&mut self, robot: &str) -> Result<(), RunnerError>;

    /// Change the speed of a robot.
    fn set_speed(&mut self, robot: &str, seconds: f64) -> Result<(), RunnerError>;

    /// Perform a movement.
    fn move_joint(&mut self, motion: &Motion) -> Result<(), RunnerError>;
}

/// Counters of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionSummary {
    /// Quadruples executed, counting repetitions.
    pub steps: usize,
    /// Movements issued.
    pub motions: usize,
}

#[derive(Debug)]
struct ActiveLoop {
    id: String,
    body_start: usize,
    remaining: u64,
}

/// Executes quadruple programs.
#[derive(Debug)]
pub struct Executor {
    default_delay: f64,
    delays: HashMap<String, f64>,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_SECONDS)
    }
}

impl Executor {
    /// Create an executor with a delay for robots that never set one.
    pub fn new(default_delay: f64) -> Self {
        Self {
            default_delay,
            delays: HashMap::new(),
        }
    }

    /// The delay currently active for a robot.
    pub fn delay(&self, robot: &str) -> f64 {
        self.delays
            .get(&robot.to_ascii_lowercase())
            .copied()
            .unwrap_or(self.default_delay)
    }

    /// Run a program to completion.
    pub fn execute<D: MotionDriver>(
        &mut self,
        program: &[Quadruple],
        driver: &mut D,
    ) -> Result<ExecutionSummary, RunnerError> {
        let mut summary = ExecutionSummary::default();
        let mut loops: Vec<ActiveLoop> = Vec::new();
        let mut pc = 0;

        while let Some(quad) = program.get(pc) {
            summary.steps += 1;
            let mut next = pc + 1;

            match quad.operator {
                Operator::Create => {
                    self.delays
                        .insert(quad.result.to_ascii_lowercase(), self.default_delay);
                    driver.create(&quad.result)?;
                }
                Operator::SetSpeed => {
                    let seconds: f64 = quad.operand2.parse().map_err(|_| {
                        RunnerError::malformed(pc, format!("invalid delay '{}'", quad.operand2))
                    })?;
                    self.delays
                        .insert(quad.operand1.to_ascii_lowercase(), seconds);
                    driver.set_speed(&quad.operand1, seconds)?;
                }
                Operator::Move | Operator::MoveNeg => {
                    let value: i64 = quad.operand2.parse().map_err(|_| {
                        RunnerError::malformed(pc, format!("invalid value '{}'", quad.operand2))
                    })?;
                    let motion = Motion {
                        robot: quad.operand1.clone(),
                        command: quad.result.clone(),
                        value,
                        delay_seconds: self.delay(&quad.operand1),
                    };
                    driver.move_joint(&motion)?;
                    summary.motions += 1;
                }
                Operator::BeginLoop => {
                    let count: u64 = quad.operand1.parse().map_err(|_| {
                        RunnerError::malformed(pc, format!("invalid count '{}'", quad.operand1))
                    })?;
                    let end = find_loop_end(program, pc, &quad.result)?;
                    if count == 0 {
                        next = end + 1;
                    } else {
                        loops.push(ActiveLoop {
                            id: quad.result.clone(),
                            body_start: pc + 1,
                            remaining: count,
                        });
                    }
                }
                Operator::EndLoop => {
                    let Some(active) = loops.last_mut() else {
                        return Err(RunnerError::malformed(pc, "END_LOOP without BEGIN_LOOP"));
                    };
                    if active.id != quad.operand1 {
                        return Err(RunnerError::malformed(
                            pc,
                            format!("END_LOOP for '{}' inside '{}'", quad.operand1, active.id),
                        ));
                    }
                    active.remaining -= 1;
                    if active.remaining > 0 {
                        next = active.body_start;
                    } else {
                        loops.pop();
                    }
                }
            }

            pc = next;
        }

        if let Some(open) = loops.last() {
            return Err(RunnerError::malformed(
                program.len(),
                format!("loop '{}' is never closed", open.id),
            ));
        }

        Ok(summary)
    }
}

fn find_loop_end(program: &[Quadruple], begin: usize, id: &str) -> Result<usize, RunnerError> {
    program
        .iter()
        .enumerate()
        .skip(begin + 1)
        .find(|(_, q)| q.operator == Operator::EndLoop && q.operand1 == id)
        .map(|(index, _)| index)
        .ok_or_else(|| RunnerError::malformed(begin, format!("no END_LOOP for '{}'", id)))
}

/// A driver that records motions instead of moving hardware.
#[derive(Debug, Default)]
pub struct SimulatedDriver {
    robots: Vec<String>,
    trace: Vec<Motion>,
    elapsed_seconds: f64,
}

impl SimulatedDriver {
    /// Create an idle simulated arm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Robots created so far.
    pub fn robots(&self) -> &[String] {
        &self.robots
    }

    /// Every motion in execution order.
    pub fn trace(&self) -> &[Motion] {
        &self.trace
    }

    /// Total simulated movement time.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }
}

impl MotionDriver for SimulatedDriver {
    fn create(&mut self, robot: &str) -> Result<(), RunnerError> {
        log::info!("robot {} online", robot);
        self.robots.push(robot.to_string());
        Ok(())
    }

    fn set_speed(&mut self, robot: &str, seconds: f64) -> Result<(), RunnerError> {
        log::debug!("robot {} speed {:.1}s", robot, seconds);
        Ok(())
    }

    fn move_joint(&mut self, motion: &Motion) -> Result<(), RunnerError> {
        if !self
            .robots
            .iter()
            .any(|r| r.eq_ignore_ascii_case(&motion.robot))
        {
            return Err(RunnerError::Driver(format!(
                "robot '{}' is not online",
                motion.robot
            )));
        }
        log::info!(
            "{}.{} -> {} ({:.1}s)",
            motion.robot,
            motion.command,
            motion.value,
            motion.delay_seconds
        );
        self.elapsed_seconds += motion.delay_seconds;
        self.trace.push(motion.clone());
        Ok(())
    }
}

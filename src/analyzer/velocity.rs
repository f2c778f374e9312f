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

//! Per-robot movement delay.

use std::collections::HashMap;

/// Seconds per movement currently in effect for each robot.
#[derive(Debug, Clone)]
pub struct VelocityRegistry {
    /// Delay given to a robot at declaration.
    default_delay: f64,
    /// Delays keyed by lowercase robot id.
    delays: HashMap<String, f64>,
}

impl VelocityRegistry {
    /// Create an empty registry.
    pub fn new(default_delay: f64) -> Self {
        Self {
            default_delay,
            delays: HashMap::new(),
        }
    }

    /// Start tracking a robot at the default delay.
    pub fn register(&mut self, robot_id: &str) {
        self.delays
            .insert(robot_id.to_ascii_lowercase(), self.default_delay);
    }

    /// Change the delay of a robot.
    pub fn set(&mut self, robot_id: &str, seconds: f64) {
        self.delays.insert(robot_id.to_ascii_lowercase(), seconds);
    }

    /// The delay currently in effect for a robot.
    pub fn delay(&self, robot_id: &str) -> f64 {
        self.delays
            .get(&robot_id.to_ascii_lowercase())
            .copied()
            .unwrap_or(self.default_delay)
    }
}

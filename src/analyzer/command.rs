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

//! The fixed command vocabulary and its value ranges.

use std::fmt;

use crate::config::GripperMode;

/// A command a robot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Base rotation.
    Base,
    /// Shoulder joint.
    Hombro,
    /// Elbow joint.
    Codo,
    /// Gripper, either rotation or opening.
    Garra,
    /// Seconds per movement.
    Velocidad,
    /// Repeat block header.
    Repetir,
}

impl Command {
    /// Every command, in declaration order.
    pub const ALL: [Command; 6] = [
        Command::Base,
        Command::Hombro,
        Command::Codo,
        Command::Garra,
        Command::Velocidad,
        Command::Repetir,
    ];

    /// Look up a command by name (any letter case).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(name))
    }

    /// The canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Command::Base => "base",
            Command::Hombro => "hombro",
            Command::Codo => "codo",
            Command::Garra => "garra",
            Command::Velocidad => "velocidad",
            Command::Repetir => "repetir",
        }
    }

    /// Check if this command moves a joint.
    pub fn is_joint(self) -> bool {
        matches!(
            self,
            Command::Base | Command::Hombro | Command::Codo | Command::Garra
        )
    }

    /// The accepted magnitude range.
    pub fn bounds(self, gripper: GripperMode) -> ValueRange {
        match self {
            Command::Base => ValueRange::new(0, 360),
            Command::Hombro | Command::Codo => ValueRange::new(0, 180),
            Command::Garra => match gripper {
                GripperMode::Rotation => ValueRange::new(0, 360),
                GripperMode::Opening => ValueRange::new(0, 85),
            },
            Command::Velocidad | Command::Repetir => ValueRange::new(1, 100),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    /// Create a new range.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check if a value lies within the range.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// The mirrored range `[-max, -min]`.
    pub fn negated(&self) -> Self {
        Self::new(-self.max, -self.min)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

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

//! Structured fuzz target that builds scripts from statement shapes.
//!
//! Successful scripts are executed on the simulated arm.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_statements

#![no_main]

use arbitrary::Arbitrary;
use armscript::runner::{Executor, SimulatedDriver};
use libfuzzer_sys::fuzz_target;

const COMMANDS: [&str; 7] = [
    "base", "hombro", "codo", "garra", "velocidad", "repetir", "muneca",
];

#[derive(Debug, Arbitrary)]
enum Statement {
    Declare(u8),
    Assign { robot: u8, command: u8, negated: bool, value: u16 },
    Repeat { robot: u8, count: u8, body: Vec<(u8, u16)> },
}

fn robot(id: u8) -> String {
    format!("R{}", id % 4)
}

fn render(statements: &[Statement]) -> String {
    let mut source = String::new();
    for statement in statements {
        match statement {
            Statement::Declare(id) => source.push_str(&format!("Robot {}\n", robot(*id))),
            Statement::Assign { robot: id, command, negated, value } => {
                let command = COMMANDS[*command as usize % COMMANDS.len()];
                let suffix = if *negated { ".negativo" } else { "" };
                source.push_str(&format!("{}.{}{} = {}\n", robot(*id), command, suffix, value));
            }
            Statement::Repeat { robot: id, count, body } => {
                source.push_str(&format!("{}.repetir = {} {{\n", robot(*id), count));
                for (command, value) in body {
                    let command = COMMANDS[*command as usize % COMMANDS.len()];
                    source.push_str(&format!("    {}.{} = {}\n", robot(*id), command, value));
                }
                source.push_str("}\n");
            }
        }
    }
    source
}

fuzz_target!(|statements: Vec<Statement>| {
    let source = render(&statements);
    let result = armscript::analyze(&source);
    if result.success() {
        let mut driver = SimulatedDriver::new();
        Executor::default()
            .execute(result.quadruples(), &mut driver)
            .expect("accepted scripts must execute");
    }
});

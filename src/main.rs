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

//! ArmScript Compiler CLI
//!
//! Analyzes robot arm scripts and prints their symbol table and quadruples.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use armscript::config::{AnalyzerConfig, GripperMode};
use armscript::error::format_error;
use armscript::output::{format_from_extension, render_text, write_output, OutputFormat};
use armscript::runner::{Executor, ScriptWatcher, SimulatedDriver};
use armscript::{AnalysisResult, Analyzer};

/// ArmScript - A single-pass compiler for robot arm command scripts
#[derive(Parser, Debug)]
#[command(name = "armscript")]
#[command(author = "Marcel Joachim Kloubert")]
#[command(version)]
#[command(about = "A single-pass compiler for robot arm command scripts")]
#[command(long_about = r#"
ArmScript checks robot arm scripts and compiles them into a symbol table
and a quadruple program for a motion executor.

The report can be either:
  - Text (.txt, or stdout when -o is not given)
  - JSON (.json)

Example usage:
  armscript arm.robot
  armscript arm.robot -o report.json
  armscript arm.robot --gripper opening

Simulate the program:
  armscript arm.robot --run

Watch mode:
  armscript arm.robot --watch
"#)]
struct Cli {
    /// Script files to analyze (concatenated in order)
    #[arg(required = true)]
    source_files: Vec<PathBuf>,

    /// Report file (.txt or .json). Prints a text report when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Gripper interpretation, overrides the configuration file
    #[arg(long, value_enum)]
    gripper: Option<GripperMode>,

    /// Execute the quadruples on a simulated arm after analysis
    #[arg(short, long)]
    run: bool,

    /// Re-analyze whenever a script changes
    #[arg(short, long)]
    watch: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let format = match &cli.output {
        Some(path) => match format_from_extension(path) {
            Some(format) => Some(format),
            None => {
                eprintln!("Error: Unknown report format. Use .txt or .json extension.");
                return ExitCode::from(2);
            }
        },
        None => None,
    };

    let mut config = match &cli.config {
        Some(path) => match AnalyzerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
        None => AnalyzerConfig::default(),
    };
    if let Some(mode) = cli.gripper {
        config = config.with_gripper_mode(mode);
    }

    if cli.verbose {
        println!("ArmScript Compiler v{}", armscript::VERSION);
        println!("Gripper mode: {:?}", config.gripper_mode);
        println!("Source files:");
        for file in &cli.source_files {
            println!("  - {}", file.display());
        }
        println!();
    }

    let analyzer = Analyzer::with_config(config);
    let status = analyze_once(&cli, &analyzer, format);

    if cli.watch {
        return run_watch_loop(&cli, &analyzer, format);
    }

    ExitCode::from(status)
}

/// Read the scripts, analyze them, and report. Returns the exit status.
fn analyze_once(cli: &Cli, analyzer: &Analyzer, format: Option<OutputFormat>) -> u8 {
    let source = match read_sources(&cli.source_files) {
        Ok(source) => source,
        Err(status) => return status,
    };

    let result = analyzer.analyze(&source);
    let filename = primary_filename(&cli.source_files);

    if !result.success() {
        for error in result.diagnostics() {
            eprint!("{}", format_error(error, &source, Some(filename)));
        }
    }

    let reported = match (&cli.output, format) {
        (Some(path), Some(format)) => {
            if let Err(e) = write_output(&result, path, format) {
                eprintln!("Error: Cannot write {}: {}", path.display(), e);
                return 1;
            }
            if cli.verbose {
                println!("Wrote {}", path.display());
            }
            true
        }
        _ => false,
    };

    if !result.success() {
        return 1;
    }

    if !reported {
        print!("{}", render_text(&result));
    }

    if cli.run {
        return simulate(&result, analyzer.config());
    }

    0
}

/// Execute a successful result on a simulated arm and print its trace.
fn simulate(result: &AnalysisResult, config: &AnalyzerConfig) -> u8 {
    let mut driver = SimulatedDriver::new();
    let mut executor = Executor::new(config.default_delay_seconds);

    match executor.execute(result.quadruples(), &mut driver) {
        Ok(summary) => {
            println!();
            println!("Motion trace:");
            for (step, motion) in driver.trace().iter().enumerate() {
                println!(
                    "  {:>3}  {}.{} = {} ({:.1}s)",
                    step, motion.robot, motion.command, motion.value, motion.delay_seconds
                );
            }
            println!(
                "{} motions, {} steps, {:.1}s simulated",
                summary.motions,
                summary.steps,
                driver.elapsed_seconds()
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            5
        }
    }
}

/// Re-run the analysis whenever a script changes.
fn run_watch_loop(cli: &Cli, analyzer: &Analyzer, format: Option<OutputFormat>) -> ExitCode {
    let watcher = match ScriptWatcher::new(&cli.source_files) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: Failed to create file watcher: {}", e);
            return ExitCode::from(6);
        }
    };

    println!();
    println!("Watching for changes... (Press Ctrl+C to stop)");

    loop {
        match watcher.next_change() {
            Ok(changed) => {
                println!();
                if cli.verbose {
                    for path in &changed {
                        println!("Changed: {}", path.display());
                    }
                }
                println!("Re-analyzing...");
                if analyze_once(cli, analyzer, format) != 0 {
                    println!("Fix errors and save to retry.");
                }
            }
            Err(e) => {
                eprintln!("Watch error: {}", e);
                return ExitCode::from(6);
            }
        }
    }
}

/// Read and concatenate the script files.
fn read_sources(paths: &[PathBuf]) -> Result<String, u8> {
    let mut source = String::new();
    for path in paths {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("read {} ({} bytes)", path.display(), content.len());
                source.push_str(&content);
                source.push('\n');
            }
            Err(e) => {
                eprintln!("Error: Cannot read {}: {}", path.display(), e);
                return Err(3);
            }
        }
    }
    Ok(source)
}

/// The file name used in diagnostics.
fn primary_filename(paths: &[PathBuf]) -> &str {
    paths
        .first()
        .map(PathBuf::as_path)
        .and_then(Path::file_name)
        .and_then(|s| s.to_str())
        .unwrap_or("<input>")
}

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

//! Script watching for the `--watch` mode.
//!
//! Editors that save atomically replace the file instead of writing it, so
//! the watcher observes the parent directories and matches events against
//! the script paths.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use super::RunnerError;

/// Events closer together than this are reported as one change.
const SETTLE_TIME: Duration = Duration::from_millis(100);

/// Watches script files for changes.
///
/// ```no_run
/// use std::path::PathBuf;
/// use armscript::runner::ScriptWatcher;
///
/// let watcher = ScriptWatcher::new(&[PathBuf::from("arm.robot")]).unwrap();
/// let changed = watcher.next_change().unwrap();
/// println!("changed: {:?}", changed);
/// ```
pub struct ScriptWatcher {
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
    scripts: Vec<PathBuf>,
}

impl ScriptWatcher {
    /// Start watching the given scripts.
    pub fn new(scripts: &[PathBuf]) -> Result<Self, RunnerError> {
        let (tx, events) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)
            .map_err(|e| RunnerError::WatchError(format!("Failed to create watcher: {}", e)))?;

        let scripts = scripts
            .iter()
            .map(|path| {
                path.canonicalize().map_err(|e| {
                    RunnerError::WatchError(format!("Cannot resolve {}: {}", path.display(), e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let directories: BTreeSet<&Path> = scripts.iter().filter_map(|p| p.parent()).collect();
        for directory in directories {
            watcher
                .watch(directory, RecursiveMode::NonRecursive)
                .map_err(|e| {
                    RunnerError::WatchError(format!("Failed to watch {}: {}", directory.display(), e))
                })?;
            log::debug!("watching {}", directory.display());
        }

        Ok(Self {
            _watcher: watcher,
            events,
            scripts,
        })
    }

    /// The canonical paths of the watched scripts.
    pub fn scripts(&self) -> &[PathBuf] {
        &self.scripts
    }

    /// Block until at least one script changes and return the changed scripts.
    pub fn next_change(&self) -> Result<Vec<PathBuf>, RunnerError> {
        loop {
            if let Some(changed) = self.next_change_within(Duration::from_secs(3600))? {
                return Ok(changed);
            }
        }
    }

    /// Wait up to `timeout` for a change.
    ///
    /// Returns `Ok(None)` when nothing relevant happened in time.
    pub fn next_change_within(&self, timeout: Duration) -> Result<Option<Vec<PathBuf>>, RunnerError> {
        let deadline = Instant::now() + timeout;
        let mut changed = BTreeSet::new();

        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            let event = match self.events.recv_timeout(wait) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => return Ok(None),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(RunnerError::WatchError("Watch channel closed".to_string()))
                }
            };
            let event = event.map_err(|e| RunnerError::WatchError(format!("Watch error: {}", e)))?;
            changed.extend(self.changed_scripts(&event));
            if !changed.is_empty() {
                break;
            }
        }

        // Collect whatever else arrives while the editor finishes saving.
        while let Ok(event) = self.events.recv_timeout(SETTLE_TIME) {
            if let Ok(event) = event {
                changed.extend(self.changed_scripts(&event));
            }
        }

        Ok(Some(changed.into_iter().collect()))
    }

    /// The watched scripts touched by an event.
    fn changed_scripts(&self, event: &Event) -> Vec<PathBuf> {
        if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
            return Vec::new();
        }

        event
            .paths
            .iter()
            .filter_map(|path| self.watched_script(path))
            .collect()
    }

    /// Map an event path to the watched script it refers to.
    fn watched_script(&self, path: &Path) -> Option<PathBuf> {
        // A replaced file may not resolve yet; compare directory and name instead.
        let resolved = path.canonicalize().ok().or_else(|| {
            let directory = path.parent()?.canonicalize().ok()?;
            Some(directory.join(path.file_name()?))
        })?;
        self.scripts.iter().find(|s| **s == resolved).cloned()
    }
}

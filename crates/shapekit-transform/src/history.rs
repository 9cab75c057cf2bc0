//! Bounded undo/redo history of geometry snapshots.
//!
//! The stack belongs to the current selection: it is cleared whenever the
//! selection changes. Entry 0 is usually the snapshot taken on selection, so
//! undoing all the way back restores the geometry as it was selected.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shapekit_core::Geometry;

/// Default number of snapshots kept per selection.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// The action that produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Select,
    Translate,
    Rotate,
    Scale,
    Stretch,
    MoveVertex,
    AddVertex,
    DeleteVertex,
    MoveCircleCenter,
    ResizeCircle,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActionType::Select => "Select",
            ActionType::Translate => "Move",
            ActionType::Rotate => "Rotate",
            ActionType::Scale => "Scale",
            ActionType::Stretch => "Stretch",
            ActionType::MoveVertex => "Move vertex",
            ActionType::AddVertex => "Add vertex",
            ActionType::DeleteVertex => "Delete vertex",
            ActionType::MoveCircleCenter => "Move circle",
            ActionType::ResizeCircle => "Resize circle",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub geometry: Geometry,
    pub action: ActionType,
    pub timestamp: DateTime<Utc>,
}

/// Snapshot stack with a cursor.
///
/// When non-empty, `cursor` indexes the entry matching the shape's current
/// geometry: `can_undo` iff `cursor > 0`, `can_redo` iff `cursor < len - 1`.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    entries: VecDeque<HistoryEntry>,
    cursor: usize,
    capacity: usize,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl SnapshotHistory {
    /// Creates an empty history holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_MAX_ENTRIES)),
            cursor: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the bound, evicting the oldest entries if needed.
    /// Redo entries go first so the cursor keeps pointing at the current geometry.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.entries.len() > self.capacity && self.can_redo() {
            self.entries.pop_back();
        }
        self.evict();
    }

    /// Appends a snapshot after the cursor, discarding any redo branch.
    pub fn save(&mut self, geometry: Geometry, action: ActionType) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(HistoryEntry {
            geometry,
            action,
            timestamp: Utc::now(),
        });
        self.cursor = self.entries.len() - 1;
        self.evict();
    }

    fn evict(&mut self) {
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    /// Steps back and returns the snapshot to restore.
    pub fn undo(&mut self) -> Option<&Geometry> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(|e| &e.geometry)
    }

    /// Steps forward and returns the snapshot to restore.
    pub fn redo(&mut self) -> Option<&Geometry> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).map(|e| &e.geometry)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor < self.entries.len() - 1
    }

    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    pub fn redo_depth(&self) -> usize {
        self.entries.len().saturating_sub(self.cursor + 1)
    }

    /// The entry matching the current geometry.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    /// Description of the action `undo` would revert.
    pub fn undo_description(&self) -> Option<String> {
        if !self.can_undo() {
            return None;
        }
        self.current().map(|e| e.action.to_string())
    }

    /// Description of the action `redo` would reapply.
    pub fn redo_description(&self) -> Option<String> {
        if !self.can_redo() {
            return None;
        }
        self.entries.get(self.cursor + 1).map(|e| e.action.to_string())
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

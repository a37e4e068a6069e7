//! # Search Records
//!
//! Per-search bookkeeping, scoped to a single A* run.

use crate::GridPos;
use std::collections::{HashMap, HashSet};

/// Cost bookkeeping for one cell during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRecord {
    /// Accumulated cost from the start cell
    pub g: u32,
    /// Heuristic cost to the goal
    pub h: u32,
    /// Predecessor on the best known route
    pub parent: Option<GridPos>,
    /// Order in which the cell entered the open set
    pub seq: u64,
}

impl NodeRecord {
    /// Total estimated cost through this cell.
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Records and closed set of one search; dropped when the search returns.
#[derive(Debug, Default)]
pub(crate) struct SearchState {
    records: HashMap<GridPos, NodeRecord>,
    closed: HashSet<GridPos>,
    next_seq: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, pos: GridPos) -> Option<&NodeRecord> {
        self.records.get(&pos)
    }

    /// Stores new costs for `pos`, keeping the order it first entered the open set in.
    ///
    /// Returns the stored record.
    pub fn update(&mut self, pos: GridPos, g: u32, h: u32, parent: Option<GridPos>) -> NodeRecord {
        let next_seq = &mut self.next_seq;
        let record = self.records.entry(pos).or_insert_with(|| {
            let seq = *next_seq;
            *next_seq += 1;
            NodeRecord {
                g,
                h,
                parent,
                seq,
            }
        });
        record.g = g;
        record.h = h;
        record.parent = parent;
        *record
    }

    pub fn close(&mut self, pos: GridPos) {
        self.closed.insert(pos);
    }

    pub fn is_closed(&self, pos: GridPos) -> bool {
        self.closed.contains(&pos)
    }

    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// Follows parent links from `goal` back to (but excluding) `start`.
    ///
    /// The result runs start → goal.
    pub fn trace_back(&self, start: GridPos, goal: GridPos) -> Vec<GridPos> {
        let mut cells = Vec::new();
        let mut current = goal;
        while current != start {
            cells.push(current);
            match self.record(current).and_then(|r| r.parent) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        cells.reverse();
        cells
    }
}

//! # Search Frontier
//!
//! The open set of an A* run.

use crate::GridPos;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A cell waiting in the open set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenEntry {
    pub f: u32,
    pub h: u32,
    /// Order in which the cell first entered the open set
    pub seq: u64,
    pub pos: GridPos,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior: lowest f, then lowest h, then oldest.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority-ordered open set with lazy deletion.
///
/// Lowering a cell's cost pushes a fresh entry instead of updating the old
/// one; the outdated entry surfaces only after the cell is closed and is
/// discarded by the caller.
#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
}

impl OpenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: OpenEntry) {
        self.heap.push(entry);
    }

    pub fn pop(&mut self) -> Option<OpenEntry> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

//! # A* Search
//!
//! The search loop over a built grid.
//!
//! ```text
//! f(n) = g(n) + h(n)
//!
//!     g(n) = accumulated cost from the start cell to n
//!     h(n) = step_cost(n, goal)
//! ```
//!
//! Movement is 4-connected with a straight step cost of 10. The heuristic
//! keeps its diagonal-aware scaling, which never overestimates the
//! 4-connected cost, so the first time the goal is closed its route is optimal.

use super::frontier::{OpenEntry, OpenSet};
use super::records::SearchState;
use super::step_cost;
use crate::{Grid, GridPos};

/// Cells from the first step after the start up to and including the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Route {
    pub cells: Vec<GridPos>,
    pub cost: u32,
}

/// Outcome of one search.
#[derive(Debug)]
pub(crate) struct AstarRun {
    pub route: Option<Route>,
    /// Number of cells moved to the closed set
    pub expanded: usize,
}

/// Runs A* from `start` to `goal`.
///
/// The start cell is always expanded, even if it is blocked. A blocked goal
/// can never be entered, so it fails without expanding anything.
pub(crate) fn run_astar(grid: &Grid, start: GridPos, goal: GridPos) -> AstarRun {
    if !grid.is_walkable(goal) {
        return AstarRun {
            route: None,
            expanded: 0,
        };
    }

    let mut state = SearchState::new();
    let mut open = OpenSet::new();

    let seed = state.update(start, 0, step_cost(start, goal), None);
    open.push(OpenEntry {
        f: seed.f(),
        h: seed.h,
        seq: seed.seq,
        pos: start,
    });

    while let Some(entry) = open.pop() {
        let current = entry.pos;
        // Outdated duplicate of a cell whose cost was lowered later.
        if state.is_closed(current) {
            continue;
        }
        state.close(current);

        let current_g = match state.record(current) {
            Some(record) => record.g,
            None => continue,
        };

        if current == goal {
            return AstarRun {
                route: Some(Route {
                    cells: state.trace_back(start, goal),
                    cost: current_g,
                }),
                expanded: state.closed_count(),
            };
        }

        for neighbor in grid.neighbors(current) {
            let pos = neighbor.pos();
            if !neighbor.walkable || state.is_closed(pos) {
                continue;
            }

            let tentative_g = current_g + step_cost(current, pos);
            let improves = state
                .record(pos)
                .map_or(true, |record| tentative_g < record.g);

            if improves {
                let record = state.update(pos, tentative_g, step_cost(pos, goal), Some(current));
                open.push(OpenEntry {
                    f: record.f(),
                    h: record.h,
                    seq: record.seq,
                    pos,
                });
            }
        }
    }

    AstarRun {
        route: None,
        expanded: state.closed_count(),
    }
}

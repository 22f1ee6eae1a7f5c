//! Path planning trait and the default breadth-first planner.
//!
//! # Pluggability
//!
//! Agents call planning through the [`Planner`] trait, so a simulation can
//! swap in a different search without touching the policies.  The default
//! [`BfsPlanner`] is exact for the 4-connected unit-cost grid.
//!
//! # Empty paths
//!
//! A planner answers with an empty [`Path`] in three cases: no goal was
//! given, the goal is the start, or the goal is unreachable.  Callers that
//! hold a goal must check `position == goal` themselves before treating an
//! empty path as "unreachable".

use std::collections::VecDeque;

use ga_core::{Cell, Direction};

use crate::GridWorld;

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered sequence of moves, consumed front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    moves: VecDeque<Direction>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves remaining.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Take the next move.
    #[inline]
    pub fn pop_front(&mut self) -> Option<Direction> {
        self.moves.pop_front()
    }

    #[inline]
    pub fn peek(&self) -> Option<Direction> {
        self.moves.front().copied()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.moves.iter().copied()
    }

    /// The cell reached after applying every remaining move from `from`.
    pub fn end_cell(&self, from: Cell) -> Cell {
        self.iter().fold(from, Cell::step)
    }
}

impl FromIterator<Direction> for Path {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self { moves: iter.into_iter().collect() }
    }
}

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations hold no state between calls; `plan` may be invoked every
/// time any agent needs a new route.
pub trait Planner: Send + Sync {
    /// Moves from `start` to `goal`, avoiding obstacles and the grid edge.
    ///
    /// Returns an empty path when `goal` is `None`, equals `start`, or cannot
    /// be reached.
    fn plan(&self, world: &GridWorld, start: Cell, goal: Option<Cell>) -> Path;
}

// ── BfsPlanner ────────────────────────────────────────────────────────────────

/// Breadth-first search over the 4-connected grid.
///
/// Neighbours are expanded in [`Direction::ALL`] order (up, down, left,
/// right), so among several shortest paths the same one is always returned.
/// O(cells) time and memory per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPlanner;

impl Planner for BfsPlanner {
    fn plan(&self, world: &GridWorld, start: Cell, goal: Option<Cell>) -> Path {
        match goal {
            None => Path::new(),
            Some(goal) => bfs(world, start, goal),
        }
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

fn bfs(world: &GridWorld, start: Cell, goal: Cell) -> Path {
    let Some(start_idx) = world.index(start) else {
        return Path::new();
    };
    if start == goal {
        return Path::new();
    }

    // came_from[i] = direction of the move that first reached cell i.
    let mut came_from: Vec<Option<Direction>> = vec![None; world.cell_count()];
    let mut visited = vec![false; world.cell_count()];
    visited[start_idx] = true;

    let mut frontier: VecDeque<Cell> = VecDeque::new();
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        if cell == goal {
            return reconstruct(world, &came_from, start, goal);
        }
        for dir in Direction::ALL {
            let next = cell.step(dir);
            let Some(idx) = world.index(next) else {
                continue;
            };
            if visited[idx] || world.has_obstacle(next) {
                continue;
            }
            visited[idx] = true;
            came_from[idx] = Some(dir);
            frontier.push_back(next);
        }
    }

    Path::new()
}

fn reconstruct(world: &GridWorld, came_from: &[Option<Direction>], start: Cell, goal: Cell) -> Path {
    let mut moves = Vec::new();
    let mut cur = goal;
    while cur != start {
        let Some(dir) = world.index(cur).and_then(|i| came_from[i]) else {
            break;
        };
        moves.push(dir);
        cur = cur.step(dir.opposite());
    }
    moves.reverse();
    moves.into_iter().collect()
}

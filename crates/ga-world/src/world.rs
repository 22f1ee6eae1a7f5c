//! Grid world state and builder.
//!
//! # Data layout
//!
//! Obstacles are an `FxHashSet<Cell>` and never change after
//! [`GridWorldBuilder::build`].  Resources are a `BTreeMap<Cell, ResourceKind>`
//! so every scan over them (perception, rendering, snapshots) visits cells in
//! the same `(x, y)` order on every run; policies that break ties by "first
//! minimum encountered" depend on that.
//!
//! The only mutation after construction is resource removal through
//! [`GridWorld::collect_resource`] / [`GridWorld::take_resource`].

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use tracing::trace;

use ga_core::Cell;

use crate::{ResourceKind, WorldError, WorldResult};

// ── GridWorld ─────────────────────────────────────────────────────────────────

/// Bounds, obstacles, and the remaining resources.
///
/// Do not construct directly; use [`GridWorldBuilder`].
#[derive(Clone, Debug)]
pub struct GridWorld {
    width:             i32,
    height:            i32,
    obstacles:         FxHashSet<Cell>,
    resources:         BTreeMap<Cell, ResourceKind>,
    initial_resources: usize,
}

impl GridWorld {
    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells, `width * height`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major dense index of `cell`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        self.is_valid(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    /// Bounds check only: `0 <= x < width && 0 <= y < height`.
    #[inline]
    pub fn is_valid(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    #[inline]
    pub fn has_obstacle(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }

    /// In bounds and not an obstacle.
    #[inline]
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.is_valid(cell) && !self.has_obstacle(cell)
    }

    #[inline]
    pub fn has_resource(&self, cell: Cell) -> bool {
        self.resources.contains_key(&cell)
    }

    #[inline]
    pub fn resource_at(&self, cell: Cell) -> Option<ResourceKind> {
        self.resources.get(&cell).copied()
    }

    // ── Resource queries ──────────────────────────────────────────────────

    /// All remaining resources with `origin.manhattan(cell) <= radius`, in
    /// `(x, y)` order.
    pub fn resources_within_radius(&self, origin: Cell, radius: u32) -> Vec<Cell> {
        self.resources
            .keys()
            .copied()
            .filter(|&c| origin.manhattan(c) <= radius)
            .collect()
    }

    /// Remaining resources with their kinds, in `(x, y)` order.
    pub fn resources(&self) -> impl Iterator<Item = (Cell, ResourceKind)> + '_ {
        self.resources.iter().map(|(&c, &k)| (c, k))
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.obstacles.iter().copied()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn initial_resource_count(&self) -> usize {
        self.initial_resources
    }

    /// `true` once every resource has been collected.
    pub fn is_depleted(&self) -> bool {
        self.resources.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Remove the resource at `cell` and return its kind.
    ///
    /// Returns `None` (and changes nothing) if no resource is there, so each
    /// resource can be taken at most once.
    pub fn take_resource(&mut self, cell: Cell) -> Option<ResourceKind> {
        let taken = self.resources.remove(&cell);
        trace!(%cell, found = taken.is_some(), "take_resource");
        taken
    }

    /// Remove the resource at `cell`; `true` iff one was present.
    pub fn collect_resource(&mut self, cell: Cell) -> bool {
        self.take_resource(cell).is_some()
    }
}

// ── GridWorldBuilder ──────────────────────────────────────────────────────────

/// Incremental builder for [`GridWorld`].
///
/// `add_*` methods return `false` instead of failing when the cell is already
/// taken, so scenario generators can retry random placements.  Bounds and
/// overlap checks that cannot be retried are reported by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct GridWorldBuilder {
    width:     i32,
    height:    i32,
    obstacles: FxHashSet<Cell>,
    resources: BTreeMap<Cell, ResourceKind>,
}

impl GridWorldBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// `true` if `cell` is in bounds and holds neither an obstacle nor a
    /// resource yet.
    pub fn is_free(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && !self.obstacles.contains(&cell)
            && !self.resources.contains_key(&cell)
    }

    /// Mark `cell` as an obstacle.  Returns `false` if it already was one.
    pub fn add_obstacle(&mut self, cell: Cell) -> bool {
        self.obstacles.insert(cell)
    }

    /// Place a resource.  Returns `false` if the cell already holds one.
    pub fn add_resource(&mut self, cell: Cell, kind: ResourceKind) -> bool {
        if self.resources.contains_key(&cell) {
            return false;
        }
        self.resources.insert(cell, kind);
        true
    }

    /// Chainable form of [`add_obstacle`](Self::add_obstacle).
    pub fn obstacle(mut self, cell: impl Into<Cell>) -> Self {
        self.add_obstacle(cell.into());
        self
    }

    /// Chainable form of [`add_resource`](Self::add_resource).
    pub fn resource(mut self, cell: impl Into<Cell>, kind: ResourceKind) -> Self {
        self.add_resource(cell.into(), kind);
        self
    }

    /// Validate and freeze the world.
    pub fn build(self) -> WorldResult<GridWorld> {
        let (width, height) = (self.width, self.height);
        if width <= 0 || height <= 0 {
            return Err(WorldError::InvalidDimensions { width, height });
        }
        let in_bounds = |c: &Cell| (0..width).contains(&c.x) && (0..height).contains(&c.y);

        if let Some(&cell) = self.obstacles.iter().find(|c| !in_bounds(c)) {
            return Err(WorldError::OutOfBounds { cell, width, height, what: "obstacle" });
        }
        for &cell in self.resources.keys() {
            if !in_bounds(&cell) {
                return Err(WorldError::OutOfBounds { cell, width, height, what: "resource" });
            }
            if self.obstacles.contains(&cell) {
                return Err(WorldError::ResourceOnObstacle(cell));
            }
        }

        let initial_resources = self.resources.len();
        Ok(GridWorld {
            width,
            height,
            obstacles: self.obstacles,
            resources: self.resources,
            initial_resources,
        })
    }
}

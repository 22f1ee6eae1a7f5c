//! Region-level visit statistics used to bias exploration.
//!
//! The grid is cut into `region_size × region_size` blocks.  Every visit to a
//! cell is charged to its block, together with whether a resource was found
//! there, and the block's density is the lifetime ratio
//! `discoveries / visits`.  Nothing is ever forgotten or decayed.
//!
//! Regions are kept in a `BTreeMap` keyed by `(rx, ry)`, so "first region with
//! the highest density" is well defined and identical across runs.

use std::collections::BTreeMap;

use ga_core::Cell;

use crate::{AgentError, AgentResult};

// ── Region ────────────────────────────────────────────────────────────────────

/// Block coordinate: `(x div region_size, y div region_size)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub rx: i32,
    pub ry: i32,
}

/// Counters for one region.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionStats {
    pub visits:      u32,
    pub discoveries: u32,
    /// `discoveries / visits`, refreshed on every registration.
    pub density:     f64,
}

impl RegionStats {
    fn record(&mut self, found: bool) {
        self.visits += 1;
        if found {
            self.discoveries += 1;
        }
        self.density = if self.visits == 0 {
            0.0
        } else {
            f64::from(self.discoveries) / f64::from(self.visits)
        };
    }
}

/// Aggregate view for reporting.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemorySummary {
    pub regions_explored:  usize,
    pub total_visits:      u64,
    pub total_discoveries: u64,
    /// Pooled ratio `total_discoveries / total_visits` (0 with no visits).
    pub average_density:   f64,
}

// ── SpatialMemory ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct SpatialMemory {
    region_size: i32,
    regions:     BTreeMap<Region, RegionStats>,
}

/// Side length used when none is configured.
pub const DEFAULT_REGION_SIZE: u32 = 3;

impl Default for SpatialMemory {
    fn default() -> Self {
        Self { region_size: DEFAULT_REGION_SIZE as i32, regions: BTreeMap::new() }
    }
}

impl SpatialMemory {
    pub fn new(region_size: u32) -> AgentResult<Self> {
        let region_size = i32::try_from(region_size)
            .ok()
            .filter(|&s| s > 0)
            .ok_or(AgentError::ZeroRegionSize)?;
        Ok(Self { region_size, regions: BTreeMap::new() })
    }

    #[inline]
    pub fn region_size(&self) -> u32 {
        self.region_size as u32
    }

    /// The region that owns `cell`.
    #[inline]
    pub fn region_of(&self, cell: Cell) -> Region {
        Region {
            rx: cell.x.div_euclid(self.region_size),
            ry: cell.y.div_euclid(self.region_size),
        }
    }

    /// Inclusive corner cells `(min, max)` of `region`.  The block may extend
    /// past the grid edge; callers clamp.
    pub fn region_bounds(&self, region: Region) -> (Cell, Cell) {
        let min = Cell::new(region.rx * self.region_size, region.ry * self.region_size);
        let max = Cell::new(min.x + self.region_size - 1, min.y + self.region_size - 1);
        (min, max)
    }

    /// Charge one visit to `cell`'s region.
    pub fn register_visit(&mut self, cell: Cell, found_resource: bool) {
        let region = self.region_of(cell);
        self.regions.entry(region).or_default().record(found_resource);
    }

    /// Density of `cell`'s region; 0 for a region never visited.
    pub fn density_at(&self, cell: Cell) -> f64 {
        self.regions
            .get(&self.region_of(cell))
            .map_or(0.0, |s| s.density)
    }

    pub fn stats(&self, region: Region) -> Option<&RegionStats> {
        self.regions.get(&region)
    }

    /// Highest-density visited region, or `None` if no region has found
    /// anything yet.  Ties go to the smallest `(rx, ry)`.
    pub fn best_region(&self) -> Option<Region> {
        let mut best: Option<(Region, f64)> = None;
        for (&region, stats) in &self.regions {
            if best.is_none_or(|(_, d)| stats.density > d) {
                best = Some((region, stats.density));
            }
        }
        best.filter(|&(_, d)| d > 0.0).map(|(r, _)| r)
    }

    pub fn regions(&self) -> impl Iterator<Item = (Region, &RegionStats)> + '_ {
        self.regions.iter().map(|(&r, s)| (r, s))
    }

    pub fn regions_explored(&self) -> usize {
        self.regions.len()
    }

    pub fn summary(&self) -> MemorySummary {
        let total_visits: u64 = self.regions.values().map(|s| u64::from(s.visits)).sum();
        let total_discoveries: u64 = self.regions.values().map(|s| u64::from(s.discoveries)).sum();
        MemorySummary {
            regions_explored: self.regions.len(),
            total_visits,
            total_discoveries,
            average_density: if total_visits == 0 {
                0.0
            } else {
                total_discoveries as f64 / total_visits as f64
            },
        }
    }
}

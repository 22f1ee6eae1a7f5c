//! Scenario generation: initial obstacles, resources, and agents.
//!
//! Every scenario draws from a single `SimRng` seeded from the run seed, so a
//! seed reproduces the layout as well as the run.

use anyhow::{Result, bail};
use clap::ValueEnum;

use ga_behavior::{
    CompetitivePolicy, CompetitiveStrategy, CooperativePolicy, DecisionPolicy, EpsilonGreedyPolicy,
    GoalBasedPolicy, ReactiveConfig, ReactivePolicy,
};
use ga_core::{Cell, SimRng};
use ga_world::{GridWorld, GridWorldBuilder, ResourceClass, ResourceKind, Soiling};

/// Random placements give up on an item after this many tries.
const PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Scenario {
    /// 6×6 room, 10 dirt patches, one cleaner that prefers unvisited cells.
    Reactive,
    /// 10×10 room with four soiling levels and a value-seeking cleaner.
    Cleaning,
    /// 12×12 with a wall and scattered obstacles; one BFS forager.
    Obstacles,
    /// 12×12, 20 food, four agents sharing reservations and sightings.
    Cooperative,
    /// 15×12 with clustered food; one epsilon-greedy learner.
    Learning,
    /// 14×14, 25 food, six energy-limited competitors.
    Competition,
}

impl Scenario {
    pub fn default_steps(self) -> u64 {
        match self {
            Scenario::Reactive => 30,
            Scenario::Cleaning => 150,
            Scenario::Obstacles => 200,
            Scenario::Cooperative => 200,
            Scenario::Learning => 80,
            Scenario::Competition => 250,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Scenario::Reactive => "reactive cleaner with visit memory",
            Scenario::Cleaning => "multi-level dirt cleaning",
            Scenario::Obstacles => "BFS planning around obstacles",
            Scenario::Cooperative => "cooperative foraging with messages",
            Scenario::Learning => "epsilon-greedy learning over clustered food",
            Scenario::Competition => "competition for limited resources",
        }
    }

    /// Shade the grid with the first learner's memory densities.
    pub fn shades_memory(self) -> bool {
        self == Scenario::Learning
    }
}

/// Everything the simulation builder needs.
pub struct Setup {
    pub world:  GridWorld,
    pub agents: Vec<(Cell, Box<dyn DecisionPolicy>)>,
}

pub fn build(scenario: Scenario, rng: &mut SimRng) -> Result<Setup> {
    match scenario {
        Scenario::Reactive => {
            let mut b = GridWorldBuilder::new(6, 6);
            scatter(&mut b, rng, 10, ResourceKind::Dirt(Soiling::Light));
            let cleaner = ReactivePolicy::new(ReactiveConfig {
                target:           ResourceClass::Dirt,
                prefer_unvisited: true,
                seek_radius:      0,
            })?;
            Ok(Setup { world: b.build()?, agents: vec![(Cell::new(0, 0), Box::new(cleaner))] })
        }

        Scenario::Cleaning => {
            let mut b = GridWorldBuilder::new(10, 10);
            for (soiling, count) in Soiling::ALL.into_iter().zip([8, 6, 4, 3]) {
                scatter(&mut b, rng, count, ResourceKind::Dirt(soiling));
            }
            let cleaner = ReactivePolicy::new(ReactiveConfig {
                target:           ResourceClass::Dirt,
                prefer_unvisited: true,
                seek_radius:      3,
            })?;
            Ok(Setup { world: b.build()?, agents: vec![(Cell::new(0, 0), Box::new(cleaner))] })
        }

        Scenario::Obstacles => {
            let (w, h) = (12, 12);
            let mut b = GridWorldBuilder::new(w, h);
            for y in 2..h - 2 {
                b.add_obstacle(Cell::new(w / 2, y));
            }
            for _ in 0..10 {
                b.add_obstacle(rng.cell_in(w, h));
            }
            scatter(&mut b, rng, 15, ResourceKind::Food);
            let start = if b.is_free(Cell::new(0, 0)) { Cell::new(0, 0) } else { open_cell(&b, rng)? };
            Ok(Setup { world: b.build()?, agents: vec![(start, Box::new(GoalBasedPolicy::default()))] })
        }

        Scenario::Cooperative => {
            let mut b = GridWorldBuilder::new(12, 12);
            scatter(&mut b, rng, 20, ResourceKind::Food);
            let agents = (0..4)
                .map(|_| Ok((any_cell(&b, rng), Box::new(CooperativePolicy::default()) as Box<dyn DecisionPolicy>)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Setup { world: b.build()?, agents })
        }

        Scenario::Learning => {
            let mut b = GridWorldBuilder::new(15, 12);
            clusters(&mut b, rng, 5, 10, 2.0);
            let learner = EpsilonGreedyPolicy::default();
            Ok(Setup { world: b.build()?, agents: vec![(Cell::new(7, 6), Box::new(learner))] })
        }

        Scenario::Competition => {
            let mut b = GridWorldBuilder::new(14, 14);
            scatter(&mut b, rng, 25, ResourceKind::Food);
            let agents = CompetitiveStrategy::ALL
                .into_iter()
                .cycle()
                .take(6)
                .map(|s| (any_cell(&b, rng), Box::new(CompetitivePolicy::with_strategy(s)) as Box<dyn DecisionPolicy>))
                .collect();
            Ok(Setup { world: b.build()?, agents })
        }
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

/// Place up to `count` resources uniformly on free cells.  Returns how many
/// were placed.
fn scatter(b: &mut GridWorldBuilder, rng: &mut SimRng, count: usize, kind: ResourceKind) -> usize {
    let mut placed = 0;
    for _ in 0..count {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let cell = rng.cell_in(b.width(), b.height());
            if b.is_free(cell) && b.add_resource(cell, kind) {
                placed += 1;
                break;
            }
        }
    }
    placed
}

/// Food in Gaussian blobs around random centres kept two cells away from the
/// edge.  Offsets are truncated toward zero and clamped to the grid; samples
/// landing on an occupied cell are dropped.
fn clusters(b: &mut GridWorldBuilder, rng: &mut SimRng, count: usize, per_cluster: usize, sigma: f64) {
    let (w, h) = (b.width(), b.height());
    for _ in 0..count {
        let centre = Cell::new(rng.gen_range(2..=w - 3), rng.gen_range(2..=h - 3));
        for _ in 0..per_cluster {
            let dx = rng.gaussian(0.0, sigma) as i32;
            let dy = rng.gaussian(0.0, sigma) as i32;
            let cell = Cell::new((centre.x + dx).clamp(0, w - 1), (centre.y + dy).clamp(0, h - 1));
            if b.is_free(cell) {
                b.add_resource(cell, ResourceKind::Food);
            }
        }
    }
}

/// A random cell with nothing on it.
fn open_cell(b: &GridWorldBuilder, rng: &mut SimRng) -> Result<Cell> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let cell = rng.cell_in(b.width(), b.height());
        if b.is_free(cell) {
            return Ok(cell);
        }
    }
    bail!("no free start cell found after {PLACEMENT_ATTEMPTS} attempts")
}

/// A uniformly random cell.  Used for worlds without obstacles, where agents
/// may start on a resource.
fn any_cell(b: &GridWorldBuilder, rng: &mut SimRng) -> Cell {
    rng.cell_in(b.width(), b.height())
}

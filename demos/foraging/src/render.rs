//! ASCII rendering of the grid at snapshot ticks.

use std::thread;
use std::time::Duration;

use rustc_hash::FxHashMap;

use ga_agent::{AgentStore, SpatialMemory};
use ga_core::{Cell, Tick};
use ga_sim::{SimObserver, StopReason, TickSummary};
use ga_world::{GridWorld, ResourceKind};

/// Above this many agents every agent is drawn as `A`.
const MAX_NUMBERED_AGENTS: usize = 10;

/// Prints the grid and a status line at each snapshot.
///
/// | Glyph   | Meaning                                       |
/// |---------|-----------------------------------------------|
/// | `#`     | obstacle                                      |
/// | `*`     | food                                          |
/// | `1` `2` `3` `5` | dirt, by soiling value (light to toxic) |
/// | `0`–`9` | agent index (`A` when there are many agents)  |
/// | `-` `:` `+` | explored region, by density (memory agents) |
/// | `.`     | empty                                         |
pub struct ConsoleRenderer {
    speed:        Duration,
    shade:        bool,
    last_summary: Option<TickSummary>,
}

impl ConsoleRenderer {
    pub fn new(speed_ms: u64, shade: bool) -> Self {
        Self { speed: Duration::from_millis(speed_ms), shade, last_summary: None }
    }

    fn draw(&self, tick: Tick, world: &GridWorld, agents: &AgentStore) -> String {
        let numbered = agents.count() <= MAX_NUMBERED_AGENTS;
        let occupants: FxHashMap<Cell, usize> =
            agents.iter().map(|a| (a.position, a.id.index())).collect();
        let memory = if self.shade { agents.iter().find_map(|a| a.memory.as_ref()) } else { None };

        let mut out = String::new();
        out.push_str(&format!("── {tick} ──\n"));
        for y in 0..world.height() {
            for x in 0..world.width() {
                let cell = Cell::new(x, y);
                let glyph = if let Some(&idx) = occupants.get(&cell) {
                    agent_glyph(idx, numbered)
                } else if world.has_obstacle(cell) {
                    '#'
                } else if let Some(kind) = world.resource_at(cell) {
                    resource_glyph(kind)
                } else {
                    memory.and_then(|m| shade_glyph(m, cell)).unwrap_or('.')
                };
                out.push(glyph);
                out.push(' ');
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "resources {}/{}",
            world.resource_count(),
            world.initial_resource_count()
        ));
        if let Some(s) = &self.last_summary {
            out.push_str(&format!("  active {}  collected this tick {}", s.active_agents, s.collected));
        }
        out.push('\n');
        for a in agents.iter() {
            out.push_str(&format!(
                "  [{}] {:<14} at {}  collected {:>3}  energy {:>6.1}{}\n",
                a.id.index(),
                a.policy.label(),
                a.position,
                a.counters.resources_collected,
                a.energy,
                if a.is_active() { "" } else { "  (incapacitated)" },
            ));
        }
        out
    }
}

impl SimObserver for ConsoleRenderer {
    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        self.last_summary = Some(*summary);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &GridWorld, agents: &AgentStore) {
        println!("{}", self.draw(tick, world, agents));
        if !self.speed.is_zero() {
            thread::sleep(self.speed);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, reason: StopReason) {
        println!("stopped at {final_tick}: {reason}");
    }
}

fn agent_glyph(index: usize, numbered: bool) -> char {
    match u32::try_from(index).ok().and_then(|i| char::from_digit(i, 10)) {
        Some(digit) if numbered => digit,
        _ => 'A',
    }
}

fn resource_glyph(kind: ResourceKind) -> char {
    match kind {
        ResourceKind::Food => '*',
        ResourceKind::Dirt(_) => char::from_digit(kind.value(), 10).unwrap_or('?'),
    }
}

fn shade_glyph(memory: &SpatialMemory, cell: Cell) -> Option<char> {
    memory.stats(memory.region_of(cell))?;
    let density = memory.density_at(cell);
    Some(if density < 0.2 {
        '-'
    } else if density < 0.5 {
        ':'
    } else {
        '+'
    })
}

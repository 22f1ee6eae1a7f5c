//! What can lie on a cell and be collected.

use std::fmt;

/// Soiling level of a dirt patch.  Heavier soiling is worth more points and
/// keeps the cleaner busy for longer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Soiling {
    Light,
    Moderate,
    Severe,
    Toxic,
}

impl Soiling {
    pub const ALL: [Soiling; 4] = [
        Soiling::Light,
        Soiling::Moderate,
        Soiling::Severe,
        Soiling::Toxic,
    ];
}

/// A collectable resource.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    Food,
    Dirt(Soiling),
}

/// Coarse grouping used by reactive agents to decide what they consume.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceClass {
    Food,
    Dirt,
}

impl ResourceKind {
    pub fn class(self) -> ResourceClass {
        match self {
            ResourceKind::Food => ResourceClass::Food,
            ResourceKind::Dirt(_) => ResourceClass::Dirt,
        }
    }

    /// Points credited on collection.
    pub fn value(self) -> u32 {
        match self {
            ResourceKind::Food => 1,
            ResourceKind::Dirt(Soiling::Light) => 1,
            ResourceKind::Dirt(Soiling::Moderate) => 2,
            ResourceKind::Dirt(Soiling::Severe) => 3,
            ResourceKind::Dirt(Soiling::Toxic) => 5,
        }
    }

    /// Ticks of work a collection takes, counting the tick it starts on.
    pub fn work_ticks(self) -> u32 {
        match self {
            ResourceKind::Food => 1,
            ResourceKind::Dirt(Soiling::Light) => 1,
            ResourceKind::Dirt(Soiling::Moderate) => 2,
            ResourceKind::Dirt(Soiling::Severe) => 3,
            ResourceKind::Dirt(Soiling::Toxic) => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Food => "food",
            ResourceKind::Dirt(Soiling::Light) => "dirt-light",
            ResourceKind::Dirt(Soiling::Moderate) => "dirt-moderate",
            ResourceKind::Dirt(Soiling::Severe) => "dirt-severe",
            ResourceKind::Dirt(Soiling::Toxic) => "dirt-toxic",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

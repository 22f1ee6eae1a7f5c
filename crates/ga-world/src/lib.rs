//! `ga-world` — the grid, its resources, and shortest-path planning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`resource`] | `ResourceKind`, `Soiling`, `ResourceClass`                  |
//! | [`world`]    | `GridWorld` (bounds, obstacles, resources), `GridWorldBuilder` |
//! | [`planner`]  | `Planner` trait, `Path`, `BfsPlanner`                       |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod planner;
pub mod resource;
pub mod world;


pub use error::{WorldError, WorldResult};
pub use planner::{BfsPlanner, Path, Planner};
pub use resource::{ResourceClass, ResourceKind, Soiling};
pub use world::{GridWorld, GridWorldBuilder};

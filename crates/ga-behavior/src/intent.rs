//! Agent intents: the actions a policy asks the simulation loop to perform.

use ga_agent::MessageKind;
use ga_core::{Cell, Direction};

/// One action requested during an agent's turn.
///
/// A turn may return several intents; the loop applies them in order, so
/// `[Move(d), Collect]` moves first and then collects at the new cell, while
/// `[Collect, Move(d)]` collects where the agent stands and then moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Step one cell.  Off-grid or obstacle targets leave the agent in place.
    Move(Direction),

    /// Take the resource on the agent's current cell, if any is left.
    Collect,

    /// Deliberately do nothing this tick.
    Yield,

    /// Send `kind`/`payload` to every other agent's mailbox.
    Broadcast { kind: MessageKind, payload: Cell },
}

//! Fire-and-forget broadcast messaging between agents.
//!
//! # Delivery model
//!
//! [`Mailboxes::send`] appends to every recipient's queue immediately.  The
//! simulation drains each agent's queue exactly once per tick, before any
//! agent acts, so a message sent during tick `t` is read on the recipient's
//! tick `t + 1` decision whatever the acting order.  Nothing is acknowledged
//! and nothing is replayed: a drained message is gone.
//!
//! Queues are bounded.  When a queue is full the oldest `ResourceSighted` is
//! dropped to make room; reservations are evicted, oldest first, only when
//! nothing else is queued, and a sighting arriving at a queue full of
//! reservations is itself dropped.  Every discarded message is counted in
//! [`Mailbox::dropped`].

use std::collections::VecDeque;

use ga_core::{AgentId, Cell};
use tracing::trace;

use crate::{AgentError, AgentResult};

// ── Message ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    /// The sender has chosen `payload` as its target; peers should skip it.
    TargetReserved,
    /// The sender saw a resource at `payload`.
    ResourceSighted,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub sender:  AgentId,
    pub kind:    MessageKind,
    pub payload: Cell,
}

// ── Mailbox ───────────────────────────────────────────────────────────────────

/// One agent's bounded inbound queue.
#[derive(Debug, Clone)]
pub struct Mailbox {
    queue:    VecDeque<Message>,
    capacity: usize,
    dropped:  u64,
}

impl Mailbox {
    pub fn new(capacity: usize) -> AgentResult<Self> {
        if capacity == 0 {
            return Err(AgentError::ZeroMailboxCapacity);
        }
        Ok(Self { queue: VecDeque::new(), capacity, dropped: 0 })
    }

    pub fn push(&mut self, message: Message) {
        if self.queue.len() == self.capacity {
            self.dropped += 1;
            match self.queue.iter().position(|m| m.kind == MessageKind::ResourceSighted) {
                Some(i) => {
                    self.queue.remove(i);
                }
                None if message.kind == MessageKind::ResourceSighted => return,
                None => {
                    self.queue.pop_front();
                }
            }
        }
        self.queue.push_back(message);
    }

    /// Return and clear every pending message, oldest first.
    pub fn drain(&mut self) -> Vec<Message> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Messages discarded because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

// ── Mailboxes ─────────────────────────────────────────────────────────────────

/// Every agent's mailbox, indexed by `AgentId`.
#[derive(Debug, Clone)]
pub struct Mailboxes {
    inner: Vec<Mailbox>,
}

impl Mailboxes {
    pub fn new(count: usize, capacity: usize) -> AgentResult<Self> {
        let template = Mailbox::new(capacity)?;
        Ok(Self { inner: vec![template; count] })
    }

    /// Append one message to each recipient's mailbox, skipping `sender`.
    /// Recipients outside the roster are ignored.  Returns the number of
    /// mailboxes written.
    pub fn send(
        &mut self,
        sender:     AgentId,
        recipients: impl IntoIterator<Item = AgentId>,
        kind:       MessageKind,
        payload:    Cell,
    ) -> usize {
        let message = Message { sender, kind, payload };
        let mut delivered = 0;
        for to in recipients {
            if to == sender {
                continue;
            }
            if let Some(mailbox) = self.inner.get_mut(to.index()) {
                mailbox.push(message);
                delivered += 1;
            }
        }
        trace!(%sender, ?kind, %payload, delivered, "broadcast");
        delivered
    }

    /// Send to every agent in the roster except `sender`.
    pub fn broadcast(&mut self, sender: AgentId, kind: MessageKind, payload: Cell) -> usize {
        let everyone = (0..self.inner.len() as u32).map(AgentId);
        self.send(sender, everyone, kind, payload)
    }

    /// Return and clear `agent`'s pending messages.
    pub fn drain(&mut self, agent: AgentId) -> AgentResult<Vec<Message>> {
        self.inner
            .get_mut(agent.index())
            .map(Mailbox::drain)
            .ok_or(AgentError::AgentNotFound(agent))
    }

    pub fn get(&self, agent: AgentId) -> Option<&Mailbox> {
        self.inner.get(agent.index())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total messages dropped across all mailboxes.
    pub fn total_dropped(&self) -> u64 {
        self.inner.iter().map(Mailbox::dropped).sum()
    }
}

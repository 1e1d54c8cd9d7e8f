use std::collections::{BTreeMap, VecDeque};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use gloam_core::Cell;

use crate::{route, BlockingView};

/// Handle for one outstanding path request. Each call site owns its ticket;
/// identical concurrent requests are not deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPoll {
    Pending,
    /// `None` means the goal is unreachable from the start.
    Ready(Option<Vec<Cell>>),
}

/// Request/response path router.
///
/// `submit` never resolves inline: requests sit in a queue until the host
/// calls `pump` at the scheduling boundary after the requesting tick. This is
/// the only suspension point in the frame loop; it introduces no real
/// concurrency, so other agents in the same frame are unaffected by a
/// pending request.
#[derive(Debug, Default)]
pub struct PathRouter {
    next_ticket: u64,
    queue: VecDeque<(PathTicket, Cell, Cell)>,
    ready: BTreeMap<u64, Option<Vec<Cell>>>,
}

impl PathRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a request from `start` to `goal`. The result becomes available
    /// on a later scheduling tick; callers must not stall on it.
    pub fn submit(&mut self, start: Cell, goal: Cell) -> PathTicket {
        let ticket = PathTicket(self.next_ticket);
        self.next_ticket += 1;
        self.queue.push_back((ticket, start, goal));
        ticket
    }

    /// Resolve every queued request against the current map. Call once per
    /// frame, after agent ticks.
    pub fn pump(&mut self, map: &impl BlockingView) {
        while let Some((ticket, start, goal)) = self.queue.pop_front() {
            let path = route(map, start, goal);
            self.ready.insert(ticket.0, path);
        }
    }

    /// Take the result for `ticket` if it has resolved. A `Ready` result is
    /// handed out exactly once.
    pub fn poll(&mut self, ticket: PathTicket) -> PathPoll {
        match self.ready.remove(&ticket.0) {
            Some(result) => PathPoll::Ready(result),
            None => PathPoll::Pending,
        }
    }

    /// Drop a request whether it is still queued or already resolved, so a
    /// stale result cannot resurrect abandoned state.
    pub fn cancel(&mut self, ticket: PathTicket) {
        self.queue.retain(|(t, _, _)| *t != ticket);
        self.ready.remove(&ticket.0);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

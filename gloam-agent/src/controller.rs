use gloam_core::{AgentId, Cell, Direction, SplitMix64, TickContext};
use gloam_nav::{PathPoll, PathRouter};
use tracing::warn;

use crate::state::{transition, AgentEvent, PathFollow, PerceptionState, StateKind};
use crate::{cue, AgentConfig, CueKey, CueSink, PerceptionView};

/// Stream tag for perception draws, separate from the level carve streams.
const STREAM_PERCEPTION: u64 = 2;

/// Movement intent handed to the host engine; the core never moves bodies
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Keep walking in a cardinal direction; the host resolves collision.
    Walk(Direction),
    /// Teleport-step onto the next path cell.
    StepTo(Cell),
    Halt,
}

/// One enemy's perception state machine.
///
/// Ticked once per frame in stable agent-id order. The controller reads the
/// world, fires transitions through the pure `transition` function, and
/// performs the per-kind side effects (cues, ticket cancellation) here.
#[derive(Debug)]
pub struct AgentController<A: AgentId> {
    agent: A,
    config: AgentConfig,
    state: PerceptionState,
    facing: Direction,
    rng: SplitMix64,
}

impl<A: AgentId> AgentController<A> {
    /// Build a controller at spawn time. The perception RNG is the agent's
    /// own stream of the level seed, so controllers never share draws.
    pub fn new(agent: A, config: AgentConfig, ctx: &TickContext) -> Self {
        let mut rng = ctx.rng_for_agent(agent, STREAM_PERCEPTION);
        let state = PerceptionState::patrol(&config, &mut rng);
        let facing = match state {
            PerceptionState::Patrol { dir, .. } => dir,
            _ => Direction::Right,
        };
        Self {
            agent,
            config,
            state,
            facing,
            rng,
        }
    }

    pub fn agent(&self) -> A {
        self.agent
    }

    pub fn state(&self) -> &PerceptionState {
        &self.state
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// The alert indicator is visible exactly while the agent is in
    /// `Detected`.
    pub fn alerted(&self) -> bool {
        self.state.kind() == StateKind::Detected
    }

    pub fn incapacitated(&self) -> bool {
        self.state.kind() == StateKind::Incapacitated
    }

    /// Feed a host lifecycle event (damage, defeat, wall bump, target down).
    pub fn handle_event(
        &mut self,
        event: AgentEvent,
        router: &mut PathRouter,
        cues: &mut impl CueSink,
    ) {
        self.fire(event, router, cues);
    }

    /// Advance one frame and emit this agent's movement intent.
    pub fn tick<W>(
        &mut self,
        ctx: &TickContext,
        world: &W,
        router: &mut PathRouter,
        cues: &mut impl CueSink,
    ) -> Intent
    where
        W: PerceptionView<Agent = A>,
    {
        if self.incapacitated() {
            return Intent::Halt;
        }

        let dt = ctx.dt_seconds.max(0.0);
        let me = world.agent_cell(self.agent);
        let target = world.target_cell();
        let down = world.target_down();
        let dist = me.euclidean(target);

        // World-driven transitions.
        match self.state.kind() {
            StateKind::Patrol => {
                if !down && dist <= self.config.detection_radius {
                    self.fire(AgentEvent::TargetSpotted, router, cues);
                }
            }
            StateKind::Detected => {
                if down {
                    self.fire(AgentEvent::TargetDown, router, cues);
                }
            }
            StateKind::Pursuing => {
                if down {
                    self.fire(AgentEvent::TargetDown, router, cues);
                } else if dist > self.config.detection_radius {
                    self.fire(AgentEvent::TargetLost, router, cues);
                }
            }
            StateKind::Incapacitated => {}
        }

        // Timer-driven transitions. The timer lives inside the current state
        // and resets whenever the state is rebuilt.
        let timer_event = match &mut self.state {
            PerceptionState::Patrol { until_resample, .. } => {
                *until_resample -= dt;
                (*until_resample <= 0.0).then_some(AgentEvent::ResampleElapsed)
            }
            PerceptionState::Detected { remaining } => {
                *remaining -= dt;
                (*remaining <= 0.0).then_some(AgentEvent::AlertElapsed)
            }
            _ => None,
        };
        if let Some(event) = timer_event {
            self.fire(event, router, cues);
        }

        // Router-driven transitions: collect a resolved path or demote on
        // unreachable.
        let mut unreachable = false;
        if let PerceptionState::Pursuing { ticket, path, .. } = &mut self.state {
            if let Some(t) = *ticket {
                match router.poll(t) {
                    PathPoll::Pending => {}
                    PathPoll::Ready(None) => {
                        *ticket = None;
                        unreachable = true;
                    }
                    PathPoll::Ready(Some(cells)) => {
                        *ticket = None;
                        let skip = usize::from(cells.first() == Some(&me));
                        *path = Some(PathFollow::new(cells, skip));
                    }
                }
            }
        }
        if unreachable {
            self.fire(AgentEvent::PathUnreachable, router, cues);
        }

        // Dispatch movement for whatever state survived.
        match &mut self.state {
            PerceptionState::Incapacitated | PerceptionState::Detected { .. } => Intent::Halt,
            PerceptionState::Patrol { dir, .. } => {
                let dir = *dir;
                self.facing = dir;
                Intent::Walk(dir)
            }
            PerceptionState::Pursuing {
                until_poll,
                ticket,
                path,
            } => {
                if let Some(follow) = path {
                    if follow.next < follow.cells.len() {
                        let step = follow.cells[follow.next];
                        follow.next += 1;
                        if follow.next >= follow.cells.len() {
                            *path = None;
                        }
                        if let Some(dir) = direction_toward(me, step) {
                            self.facing = dir;
                        }
                        return Intent::StepTo(step);
                    }
                    *path = None;
                }

                // No step in flight: ask for a fresh path on the poll
                // cadence.
                if ticket.is_none() {
                    *until_poll -= dt;
                    if *until_poll <= 0.0 {
                        *until_poll = self.config.path_poll_secs;
                        *ticket = Some(router.submit(me, target));
                    }
                }
                Intent::Halt
            }
        }
    }

    fn fire(&mut self, event: AgentEvent, router: &mut PathRouter, cues: &mut impl CueSink) {
        if event == AgentEvent::Damaged && !self.incapacitated() {
            self.play(cues, cue::HURT);
        }

        let old_ticket = match &self.state {
            PerceptionState::Pursuing { ticket, .. } => *ticket,
            _ => None,
        };
        let was = self.state.kind();

        let state = std::mem::replace(&mut self.state, PerceptionState::Incapacitated);
        self.state = transition(&self.config, state, event, &mut self.rng);
        let now = self.state.kind();

        // Leaving Pursuing must drop the outstanding request so a stale
        // resolution cannot resurrect the chase.
        if was == StateKind::Pursuing && now != StateKind::Pursuing {
            if let Some(ticket) = old_ticket {
                router.cancel(ticket);
            }
        }

        if now != was {
            match now {
                StateKind::Detected => self.play(cues, cue::DETECTED),
                StateKind::Incapacitated => self.play(cues, cue::DEATH),
                _ => {}
            }
        }
    }

    fn play(&self, cues: &mut impl CueSink, key: CueKey) {
        if let Err(err) = cues.play(key) {
            warn!(agent = self.agent.stable_id(), %err, "cue unavailable, skipping");
        }
    }
}

fn direction_toward(from: Cell, to: Cell) -> Option<Direction> {
    Direction::ALL.into_iter().find(|d| d.step(from) == to)
}

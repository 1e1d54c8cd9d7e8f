use gloam_agent::{transition, AgentConfig, AgentEvent, PerceptionState, StateKind};
use gloam_core::{Direction, SplitMix64};

fn rng() -> SplitMix64 {
    SplitMix64::new(0xC0FFEE)
}

fn patrol(dir: Direction) -> PerceptionState {
    PerceptionState::Patrol {
        dir,
        until_resample: 2.0,
    }
}

#[test]
fn spotted_enters_detected_with_full_delay() {
    let config = AgentConfig::default();
    let next = transition(
        &config,
        patrol(Direction::Up),
        AgentEvent::TargetSpotted,
        &mut rng(),
    );
    assert_eq!(
        next,
        PerceptionState::Detected {
            remaining: config.detection_delay_secs
        }
    );
}

#[test]
fn alert_elapsed_enters_pursuing_with_immediate_poll() {
    let config = AgentConfig::default();
    let next = transition(
        &config,
        PerceptionState::Detected { remaining: 0.0 },
        AgentEvent::AlertElapsed,
        &mut rng(),
    );
    assert_eq!(
        next,
        PerceptionState::Pursuing {
            until_poll: 0.0,
            ticket: None,
            path: None,
        }
    );
}

#[test]
fn pursuit_demotes_to_patrol_on_loss_down_or_unreachable() {
    let config = AgentConfig::default();
    for event in [
        AgentEvent::TargetLost,
        AgentEvent::TargetDown,
        AgentEvent::PathUnreachable,
    ] {
        let state = PerceptionState::Pursuing {
            until_poll: 0.1,
            ticket: None,
            path: None,
        };
        let next = transition(&config, state, event, &mut rng());
        assert_eq!(next.kind(), StateKind::Patrol, "event {event:?}");
    }
}

#[test]
fn target_down_during_alert_pause_returns_to_patrol() {
    let config = AgentConfig::default();
    let next = transition(
        &config,
        PerceptionState::Detected { remaining: 0.7 },
        AgentEvent::TargetDown,
        &mut rng(),
    );
    assert_eq!(next.kind(), StateKind::Patrol);
}

#[test]
fn defeated_is_terminal_from_every_state() {
    let config = AgentConfig::default();
    let states = [
        patrol(Direction::Left),
        PerceptionState::Detected { remaining: 0.5 },
        PerceptionState::Pursuing {
            until_poll: 0.0,
            ticket: None,
            path: None,
        },
        PerceptionState::Incapacitated,
    ];
    for state in states {
        let next = transition(&config, state, AgentEvent::Defeated, &mut rng());
        assert_eq!(next, PerceptionState::Incapacitated);
    }
}

#[test]
fn incapacitated_absorbs_every_event() {
    let config = AgentConfig::default();
    for event in [
        AgentEvent::TargetSpotted,
        AgentEvent::AlertElapsed,
        AgentEvent::TargetLost,
        AgentEvent::TargetDown,
        AgentEvent::PathUnreachable,
        AgentEvent::ResampleElapsed,
        AgentEvent::BumpedWall,
        AgentEvent::Damaged,
        AgentEvent::Defeated,
    ] {
        let next = transition(&config, PerceptionState::Incapacitated, event, &mut rng());
        assert_eq!(next, PerceptionState::Incapacitated, "event {event:?}");
    }
}

#[test]
fn resample_never_repeats_the_previous_direction() {
    let config = AgentConfig::default();
    let mut rng = rng();
    for _ in 0..200 {
        let next = transition(
            &config,
            patrol(Direction::Down),
            AgentEvent::ResampleElapsed,
            &mut rng,
        );
        match next {
            PerceptionState::Patrol { dir, until_resample } => {
                assert_ne!(dir, Direction::Down);
                assert_eq!(until_resample, config.patrol_resample_secs);
            }
            other => panic!("expected patrol, got {other:?}"),
        }
    }
}

#[test]
fn wall_bump_redirects_like_a_resample() {
    let config = AgentConfig::default();
    let mut rng = rng();
    for _ in 0..200 {
        let next = transition(
            &config,
            patrol(Direction::Right),
            AgentEvent::BumpedWall,
            &mut rng,
        );
        match next {
            PerceptionState::Patrol { dir, .. } => assert_ne!(dir, Direction::Right),
            other => panic!("expected patrol, got {other:?}"),
        }
    }
}

#[test]
fn damaged_changes_no_state() {
    let config = AgentConfig::default();
    let state = PerceptionState::Detected { remaining: 0.3 };
    let next = transition(&config, state.clone(), AgentEvent::Damaged, &mut rng());
    assert_eq!(next, state);
}

#[test]
fn unrelated_events_leave_patrol_untouched() {
    let config = AgentConfig::default();
    let state = patrol(Direction::Up);
    for event in [AgentEvent::AlertElapsed, AgentEvent::TargetLost] {
        let next = transition(&config, state.clone(), event, &mut rng());
        assert_eq!(next, state, "event {event:?}");
    }
}

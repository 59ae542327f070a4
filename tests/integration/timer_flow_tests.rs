//! Cook-timer scheduling through the full service: start/done actions,
//! sequential execution, removal semantics, and mode gating.

use core::time::Duration;

use stovectrl::app::{AppEvent, StoveCommand};
use stovectrl::error::Error;
use stovectrl::stove::StoveMode;
use stovectrl::timers::TimerAction;

use crate::mock_hw::Rig;

fn add(rig: &mut Rig, action: TimerAction, duration_secs: u64, argument: f32) -> stovectrl::timers::TimerId {
    rig.command(StoveCommand::AddTimer {
        action,
        duration_secs,
        argument,
    })
    .expect("AddTimer returns the new id")
}

#[test]
fn cook_timer_sets_target_on_start() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    let id = add(&mut rig, TimerAction::Cook, 300, 350.0);

    rig.tick();
    assert!(rig.sink.contains(&AppEvent::TimerStarted(id)));
    assert_eq!(rig.service.status(&rig.hw).target_temp, 350.0);

    rig.advance(Duration::from_secs(300));
    rig.tick();
    assert!(rig.sink.contains(&AppEvent::TimerCompleted(id)));
    assert_eq!(rig.service.timer_count(), 0);
    // Cook has no done action; the target stands until another timer or
    // command changes it.
    assert_eq!(rig.service.status(&rig.hw).target_temp, 350.0);
    assert_eq!(rig.service.mode(), StoveMode::Timers);
}

#[test]
fn stop_cook_timer_zeroes_target_on_completion() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    rig.command(StoveCommand::SetTargetTemp(350.0));
    let id = add(&mut rig, TimerAction::StopCook, 60, 0.0);

    rig.tick();
    assert_eq!(rig.service.status(&rig.hw).target_temp, 350.0, "no start action");

    rig.advance(Duration::from_secs(60));
    rig.tick();
    assert!(rig.sink.contains(&AppEvent::TimerCompleted(id)));
    assert_eq!(rig.service.status(&rig.hw).target_temp, 0.0);
}

#[test]
fn stop_and_cool_timer_zeroes_target_on_completion() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    rig.command(StoveCommand::SetTargetTemp(425.0));
    add(&mut rig, TimerAction::StopAndCool, 30, 0.0);

    rig.tick();
    rig.advance(Duration::from_secs(30));
    rig.tick();
    assert_eq!(rig.service.status(&rig.hw).target_temp, 0.0);
}

#[test]
fn alert_timer_emits_alert_on_completion() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    let id = add(&mut rig, TimerAction::AlertWebpage, 120, 0.0);

    rig.tick();
    rig.advance(Duration::from_secs(120));
    rig.tick();

    assert!(rig.sink.contains(&AppEvent::TimerAlert(id)));
    assert!(rig.sink.contains(&AppEvent::TimerCompleted(id)));
}

#[test]
fn timers_run_sequentially_with_one_tick_handoff() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    let first = add(&mut rig, TimerAction::Countdown, 180, 0.0);
    let second = add(&mut rig, TimerAction::Countdown, 240, 0.0);

    rig.tick();
    assert!(rig.sink.contains(&AppEvent::TimerStarted(first)));
    assert_eq!(rig.service.running_timer_count(), 1);
    assert!(!rig.sink.contains(&AppEvent::TimerStarted(second)));

    rig.advance(Duration::from_secs(180));
    rig.tick();
    assert!(rig.sink.contains(&AppEvent::TimerCompleted(first)));
    assert_eq!(rig.service.running_timer_count(), 0, "successor waits a tick");

    rig.tick();
    assert!(rig.sink.contains(&AppEvent::TimerStarted(second)));

    rig.advance(Duration::from_secs(240));
    rig.tick();
    assert!(rig.sink.contains(&AppEvent::TimerCompleted(second)));
    assert_eq!(rig.service.timer_count(), 0);
}

#[test]
fn queue_is_dormant_outside_timers_mode() {
    let mut rig = Rig::new();
    let id = add(&mut rig, TimerAction::Countdown, 1, 0.0);

    rig.tick_n(5);
    assert!(!rig.sink.contains(&AppEvent::TimerStarted(id)), "Off mode");

    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    rig.tick();
    assert!(rig.sink.contains(&AppEvent::TimerStarted(id)));
}

#[test]
fn completion_is_only_observed_in_timers_mode() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    let id = add(&mut rig, TimerAction::Countdown, 5, 0.0);
    rig.tick();

    rig.command(StoveCommand::SetMode(StoveMode::Manual));
    rig.advance(Duration::from_secs(60));
    rig.tick_n(3);
    assert!(!rig.sink.contains(&AppEvent::TimerCompleted(id)));

    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    rig.tick();
    assert!(rig.sink.contains(&AppEvent::TimerCompleted(id)));
}

#[test]
fn removing_queued_timer_leaves_no_trace() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    let cook = add(&mut rig, TimerAction::Cook, 60, 475.0);
    let countdown = add(&mut rig, TimerAction::Countdown, 10, 0.0);

    rig.command(StoveCommand::RemoveTimer(cook));
    rig.tick();

    // The countdown became the head; the removed cook never set a target.
    assert!(rig.sink.contains(&AppEvent::TimerStarted(countdown)));
    assert!(!rig.sink.contains(&AppEvent::TimerStarted(cook)));
    assert_eq!(rig.service.status(&rig.hw).target_temp, 0.0);
}

#[test]
fn removing_running_timer_discards_its_done_action() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    rig.command(StoveCommand::SetTargetTemp(350.0));
    let id = add(&mut rig, TimerAction::StopCook, 5, 0.0);
    rig.tick();

    rig.command(StoveCommand::RemoveTimer(id));
    rig.advance(Duration::from_secs(60));
    rig.tick_n(2);

    assert!(!rig.sink.contains(&AppEvent::TimerCompleted(id)));
    assert_eq!(
        rig.service.status(&rig.hw).target_temp,
        350.0,
        "the done action never fires for a removed timer"
    );
}

#[test]
fn enqueue_rejected_when_queue_full() {
    let mut rig = Rig::new();
    for _ in 0..stovectrl::config::MAX_COOK_TIMERS {
        add(&mut rig, TimerAction::Countdown, 10, 0.0);
    }

    let result = rig.service.handle_command(
        StoveCommand::AddTimer {
            action: TimerAction::Countdown,
            duration_secs: 10,
            argument: 0.0,
        },
        &mut rig.hw,
        &mut rig.sink,
    );
    assert!(matches!(result, Err(Error::QueueFull)));
    assert_eq!(rig.service.timer_count(), stovectrl::config::MAX_COOK_TIMERS);
}

#[test]
fn timer_snapshot_matches_wire_format() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    let id = add(&mut rig, TimerAction::Cook, 600, 350.0);
    rig.tick();
    rig.advance(Duration::from_secs(4));

    let snap = rig.service.timers(rig.now);
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].uid, id.get());
    assert_eq!(snap[0].elapsed, 4);
    assert_eq!(snap[0].duration, 600);
    assert_eq!(snap[0].action, "Cook");
    assert_eq!(snap[0].argument, "350");
}

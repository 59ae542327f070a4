//! Control-core integration tests: boot reset, safety paths, passive
//! cooldown, and command write-through, all against the simulated board.

use stovectrl::adapters::sim::LineWrite;
use stovectrl::app::{AppEvent, StoveCommand};
use stovectrl::stove::{FanSpeed, StoveMode};

use crate::mock_hw::Rig;

#[test]
fn boot_reset_drives_safe_state() {
    let rig = Rig::new();

    assert!(rig.hw.writes.contains(&LineWrite::ElementsOff));
    assert!(rig.hw.writes.contains(&LineWrite::Downdraft {
        low: false,
        high: false
    }));
    assert!(rig.hw.writes.contains(&LineWrite::Light(false)));
    assert!(rig.hw.writes.contains(&LineWrite::CoolingFan(false)));
    assert!(rig.sink.contains(&AppEvent::Started));
    assert_eq!(rig.service.mode(), StoveMode::Off);
}

#[test]
fn runaway_cancels_from_manual_mode() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Manual));
    rig.command(StoveCommand::SetTargetTemp(350.0));

    rig.hw.temp_f = 850.0;
    rig.hw.clear_writes();
    rig.tick();

    assert_eq!(rig.service.mode(), StoveMode::Off);
    assert!(rig.sink.contains(&AppEvent::RunawayCancelled { temp_f: 850.0 }));
    assert!(rig.sink.contains(&AppEvent::ModeChanged {
        from: StoveMode::Manual,
        to: StoveMode::Off,
    }));
    assert!(rig.hw.writes.contains(&LineWrite::ElementsOff));
    assert_eq!(rig.service.status(&rig.hw).target_temp, 0.0);
}

#[test]
fn runaway_cancels_from_timers_mode_before_queue_runs() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    rig.command(StoveCommand::AddTimer {
        action: stovectrl::timers::TimerAction::Cook,
        duration_secs: 60,
        argument: 350.0,
    });

    rig.hw.temp_f = 900.0;
    rig.tick();

    assert_eq!(rig.service.mode(), StoveMode::Off);
    // The cutoff runs before the queue is advanced, so the cook never began.
    assert_eq!(rig.service.running_timer_count(), 0);
    assert_eq!(rig.service.status(&rig.hw).target_temp, 0.0);
}

#[test]
fn reading_exactly_at_ceiling_does_not_cancel() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Manual));

    rig.hw.temp_f = rig.service.config().runaway_ceiling_f;
    rig.tick();

    assert_eq!(rig.service.mode(), StoveMode::Manual);
    assert!(!rig.sink.contains(&AppEvent::RunawayCancelled {
        temp_f: rig.hw.temp_f
    }));
}

#[test]
fn cancel_hold_below_threshold_is_ignored() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Manual));

    let threshold = rig.service.config().cancel_debounce_ticks as usize;
    rig.hw.cancel_pressed = true;
    rig.tick_n(threshold - 1);

    assert_eq!(rig.service.mode(), StoveMode::Manual);
    assert!(!rig.sink.contains(&AppEvent::CancelAccepted));
}

#[test]
fn cancel_hold_at_threshold_forces_off() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Manual));

    let threshold = rig.service.config().cancel_debounce_ticks as usize;
    rig.hw.cancel_pressed = true;
    rig.tick_n(threshold);

    assert_eq!(rig.service.mode(), StoveMode::Off);
    assert_eq!(rig.sink.count(&AppEvent::CancelAccepted), 1);
}

#[test]
fn cancel_counter_resets_on_release() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Manual));

    rig.hw.cancel_pressed = true;
    rig.tick_n(30);
    rig.hw.cancel_pressed = false;
    rig.tick_n(1);
    rig.hw.cancel_pressed = true;
    rig.tick_n(30);

    // Two separate 30-tick holds never reach the 50-tick threshold.
    assert_eq!(rig.service.mode(), StoveMode::Manual);
    assert!(!rig.sink.contains(&AppEvent::CancelAccepted));
}

#[test]
fn broken_probe_latches_one_fault_event_and_fails_safe() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Manual));

    rig.hw.break_probe();
    rig.tick_n(3);

    assert_eq!(rig.sink.count(&AppEvent::SensorFault), 1);
    assert_eq!(rig.service.mode(), StoveMode::Off, "sentinel reads as runaway");

    rig.hw.temp_f = 72.0;
    rig.tick_n(2);
    assert_eq!(rig.sink.count(&AppEvent::SensorRecovered), 1);
}

#[test]
fn cooling_fan_runs_until_auto_cool_threshold() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetCoolingFan(true));

    rig.hw.temp_f = 300.0;
    rig.tick_n(2);
    assert!(rig.hw.cooling_fan, "still hot, fan keeps running in Off");

    rig.hw.temp_f = rig.service.config().auto_cool_threshold_f;
    rig.tick_n(1);
    assert!(!rig.hw.cooling_fan, "at threshold the fan shuts down");
}

#[test]
fn convection_fan_reset_once_on_entering_off() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Manual));
    rig.command(StoveCommand::SetConvectionFan(FanSpeed::Low));
    rig.tick_n(1);
    assert_eq!(rig.hw.convection, (true, false));

    rig.command(StoveCommand::SetMode(StoveMode::Off));
    rig.tick_n(1);
    assert_eq!(rig.hw.convection, (false, false));

    rig.hw.clear_writes();
    rig.tick_n(3);
    let convection_writes = rig
        .hw
        .writes
        .iter()
        .filter(|w| matches!(w, LineWrite::Convection { .. }))
        .count();
    assert_eq!(convection_writes, 0, "reset fires on entry, not every tick");
}

#[test]
fn fan_commands_write_both_lines_at_once() {
    let mut rig = Rig::new();

    rig.command(StoveCommand::SetDowndraftFan(FanSpeed::High));
    assert_eq!(rig.hw.downdraft, (false, true));

    rig.command(StoveCommand::SetDowndraftFan(FanSpeed::Low));
    assert_eq!(rig.hw.downdraft, (true, false));

    rig.command(StoveCommand::SetDowndraftFan(FanSpeed::Off));
    assert_eq!(rig.hw.downdraft, (false, false));
}

#[test]
fn status_snapshot_reflects_commands_and_door() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Manual));
    rig.command(StoveCommand::SetTargetTemp(425.0));
    rig.command(StoveCommand::SetLight(true));
    rig.command(StoveCommand::UseTopElement(true));
    rig.hw.temp_f = 210.0;
    rig.hw.door_open = true;
    rig.tick_n(1);

    let status = rig.service.status(&rig.hw);
    assert_eq!(status.stove_mode, StoveMode::Manual);
    assert_eq!(status.target_temp, 425.0);
    assert_eq!(status.current_temp, 210.0);
    assert!(status.light);
    assert!(status.use_top_burner);
    assert!(!status.use_bot_burner);
    assert!(status.door_open);
}

#[test]
fn out_of_range_target_is_rejected() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Manual));

    let max = rig.service.config().max_target_temp_f;
    let result = rig.service.handle_command(
        StoveCommand::SetTargetTemp(max + 1.0),
        &mut rig.hw,
        &mut rig.sink,
    );
    assert!(matches!(
        result,
        Err(stovectrl::error::Error::Command(
            stovectrl::error::CommandError::TargetOutOfRange
        ))
    ));
    assert_eq!(rig.service.status(&rig.hw).target_temp, 0.0);
}

#[test]
fn explicit_cancel_command_forces_off() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetMode(StoveMode::Timers));
    rig.command(StoveCommand::SetTargetTemp(350.0));

    rig.command(StoveCommand::Cancel);

    assert_eq!(rig.service.mode(), StoveMode::Off);
    assert!(rig.sink.contains(&AppEvent::CancelAccepted));
    assert_eq!(rig.service.status(&rig.hw).target_temp, 0.0);
}

#[test]
fn off_mode_keeps_target_zeroed_against_late_commands() {
    let mut rig = Rig::new();
    rig.command(StoveCommand::SetTargetTemp(350.0));
    rig.tick_n(1);
    // Off reconciliation wins on the next tick.
    assert_eq!(rig.service.status(&rig.hw).target_temp, 0.0);
}

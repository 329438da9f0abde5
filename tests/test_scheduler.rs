use std::time::Duration;

use snake_canvas::game::Status;
use snake_canvas::scheduler::{TickPolicy, TickScheduler};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── period_for ────────────────────────────────────────────────────────────────

#[test]
fn enhanced_period_steps_down_with_score() {
    let p = TickPolicy::ENHANCED;
    assert_eq!(p.period_for(0), ms(150));
    assert_eq!(p.period_for(9), ms(150));
    assert_eq!(p.period_for(10), ms(145));
    assert_eq!(p.period_for(100), ms(100));
    assert_eq!(p.period_for(180), ms(60));
    assert_eq!(p.period_for(300), ms(60));
    assert_eq!(p.period_for(u32::MAX), ms(60));
}

#[test]
fn enhanced_period_never_increases() {
    let p = TickPolicy::ENHANCED;
    let mut last = p.period_for(0);
    for score in (0..1000).step_by(10) {
        let period = p.period_for(score);
        assert!(period <= last);
        last = period;
    }
}

#[test]
fn basic_period_is_fixed() {
    let p = TickPolicy::BASIC;
    assert_eq!(p.period_for(0), ms(150));
    assert_eq!(p.period_for(500), ms(150));
}

// ── TickScheduler ─────────────────────────────────────────────────────────────

#[test]
fn new_scheduler_is_stopped() {
    let mut s = TickScheduler::new(TickPolicy::BASIC);
    assert!(!s.is_running());
    assert!(!s.poll(ms(10_000)));
}

#[test]
fn ticks_once_per_period_while_running() {
    let mut s = TickScheduler::new(TickPolicy::BASIC);
    s.sync(Status::Running, 0);
    assert_eq!(s.period(), Some(ms(150)));
    assert!(!s.poll(ms(100)));
    assert!(s.poll(ms(50)));
    assert!(!s.poll(Duration::ZERO));
    assert!(!s.poll(ms(149)));
    assert!(s.poll(ms(1)));
}

#[test]
fn stops_outside_running() {
    for status in [Status::Idle, Status::Paused, Status::Dying, Status::GameOver] {
        let mut s = TickScheduler::new(TickPolicy::ENHANCED);
        s.sync(Status::Running, 0);
        assert!(!s.poll(ms(100)));
        s.sync(status, 0);
        assert!(!s.is_running());
        assert!(!s.poll(ms(1_000)));
    }
}

#[test]
fn resuming_starts_a_full_period() {
    let mut s = TickScheduler::new(TickPolicy::BASIC);
    s.sync(Status::Running, 0);
    assert!(!s.poll(ms(140)));
    s.sync(Status::Paused, 0);
    s.sync(Status::Running, 0);
    assert!(!s.poll(ms(140)));
    assert!(s.poll(ms(10)));
}

#[test]
fn score_change_restarts_with_new_period() {
    let mut s = TickScheduler::new(TickPolicy::ENHANCED);
    s.sync(Status::Running, 0);
    assert!(!s.poll(ms(100)));
    s.sync(Status::Running, 100);
    assert_eq!(s.period(), Some(ms(100)));
    assert!(!s.poll(ms(99)));
    assert!(s.poll(ms(1)));
}

#[test]
fn unchanged_period_keeps_accumulated_time() {
    let mut s = TickScheduler::new(TickPolicy::ENHANCED);
    s.sync(Status::Running, 0);
    assert!(!s.poll(ms(100)));
    s.sync(Status::Running, 5);
    assert!(s.poll(ms(50)));
}

#[test]
fn long_frame_backlog_is_capped() {
    let mut s = TickScheduler::new(TickPolicy::BASIC);
    s.sync(Status::Running, 0);
    assert!(s.poll(ms(10_000)));
    assert!(s.poll(Duration::ZERO));
    assert!(!s.poll(Duration::ZERO));
}

// Closed-form spring: convergence, overshoot and retarget continuity.

use std::time::Duration;

use blob_core::*;
use instant::Instant;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn reference_params_are_underdamped_with_mild_ringing() {
    let p = SpringParams::default();
    assert!((p.natural_frequency() - 10.0).abs() < 1e-5);
    assert!((p.damping_ratio() - 0.6).abs() < 1e-5);
}

#[test]
fn at_rest_spring_reports_its_value() {
    let s = Spring::at_rest(3.0, SpringParams::default());
    let now = Instant::now();
    assert_eq!(s.value_at(now), 3.0);
    assert_eq!(s.velocity_at(now), 0.0);
}

#[test]
fn retarget_starts_from_current_value_and_converges() {
    let t0 = Instant::now();
    let mut s = Spring::at_rest(3.0, SpringParams::default());
    s.retarget(t0, 5.0);
    assert!((s.value_at(t0) - 3.0).abs() < 1e-6);
    assert!(s.velocity_at(t0).abs() < 1e-6);
    assert!((s.value_at(t0 + ms(2000)) - 5.0).abs() < 1e-4);
    assert!((s.value_at(t0 + ms(10_000)) - 5.0).abs() < 1e-6);
}

#[test]
fn overshoot_stays_within_one_small_ring() {
    let t0 = Instant::now();
    let mut s = Spring::at_rest(0.0, SpringParams::default());
    s.retarget(t0, 1.0);
    let mut peak = f32::MIN;
    let mut low = f32::MAX;
    for i in 0..3000 {
        let v = s.value_at(t0 + ms(i));
        peak = peak.max(v);
        low = low.min(v);
    }
    // analytic peak for zeta = 0.6 is about 9.5%
    assert!(peak > 1.0, "expected a visible overshoot");
    assert!(peak < 1.1, "overshoot too large: {peak}");
    assert!(low >= -1e-6, "moved away from the target: {low}");
    // ringing has died out after a second
    assert!((s.value_at(t0 + ms(1000)) - 1.0).abs() < 0.01);
}

#[test]
fn retarget_mid_flight_is_continuous() {
    let t0 = Instant::now();
    let mut s = Spring::at_rest(0.0, SpringParams::default());
    s.retarget(t0, 10.0);
    let mid = t0 + ms(120);
    let before = s.value_at(mid);
    let vel_before = s.velocity_at(mid);
    s.retarget(mid, 20.0);
    assert!((s.value_at(mid) - before).abs() < 1e-4);
    assert!((s.velocity_at(mid) - vel_before).abs() < 1e-3);
    assert!((s.value_at(mid + ms(5000)) - 20.0).abs() < 1e-4);
}

#[test]
fn critically_damped_spring_never_overshoots() {
    let params = SpringParams {
        stiffness: 100.0,
        damping: 20.0,
    };
    let t0 = Instant::now();
    let mut s = Spring::at_rest(0.0, params);
    s.retarget(t0, 1.0);
    let mut prev = 0.0;
    for i in 0..2000 {
        let v = s.value_at(t0 + ms(i));
        assert!(v <= 1.0 + 1e-6);
        assert!(v + 1e-6 >= prev, "not monotonic at {i} ms");
        prev = v;
    }
}

#[test]
fn overdamped_spring_approaches_monotonically() {
    let params = SpringParams {
        stiffness: 100.0,
        damping: 40.0,
    };
    let t0 = Instant::now();
    let mut s = Spring::at_rest(5.0, params);
    s.retarget(t0, 2.0);
    let mut prev = 5.0;
    for i in 0..4000 {
        let v = s.value_at(t0 + ms(i));
        assert!(v >= 2.0 - 1e-6);
        assert!(v <= prev + 1e-6);
        prev = v;
    }
    assert!((s.value_at(t0 + ms(20_000)) - 2.0).abs() < 1e-3);
}

#[test]
fn sampling_before_retarget_instant_holds_origin() {
    let t0 = Instant::now();
    let later = t0 + ms(500);
    let mut s = Spring::at_rest(1.0, SpringParams::default());
    s.retarget(later, 4.0);
    assert!((s.value_at(t0) - 1.0).abs() < 1e-6);
}

#[test]
fn settle_jumps_without_motion() {
    let t0 = Instant::now();
    let mut s = Spring::at_rest(0.0, SpringParams::default());
    s.retarget(t0, 10.0);
    s.settle(7.0);
    assert_eq!(s.value_at(t0 + ms(30)), 7.0);
    assert_eq!(s.target(), 7.0);
}

//! End-to-end scenarios exercising the Kuramoto dynamics over many steps.

use std::f64::consts::TAU;

use approx::assert_abs_diff_eq;
use rand::{rngs::SmallRng, SeedableRng};

use entrain_core::{FrequencyRange, SimulationState};

#[test]
fn strong_coupling_synchronizes_a_spread_population() {
    // N = 20 oscillators with frequencies spread across (-0.5, 0.5) and a
    // coupling strength well above the critical value. After 100 steps the
    // population should show a clear synchronization trend.
    let range = FrequencyRange::new(-0.5, 0.5).unwrap();
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut sim = SimulationState::new(20, range, &mut rng).unwrap();

    for _ in 0..100 {
        sim.update(10.0, 0.01).unwrap();
    }

    assert!(
        sim.resonance_index() > 0.5,
        "expected synchronization, got R = {}",
        sim.resonance_index()
    );
    for osc in sim.oscillators() {
        assert!(osc.phase().is_finite());
        assert!((0.0..TAU).contains(&osc.phase()));
    }
    assert_abs_diff_eq!(sim.time(), 1.0, epsilon = 1e-12);
}

#[test]
fn uncoupled_narrow_band_population_rotates_independently() {
    // N = 5 with nearly identical frequencies and K = 0: one step advances
    // each oscillator by exactly its own ω·dt, modulo 2π.
    let range = FrequencyRange::new(0.99, 1.01).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let mut sim = SimulationState::new(5, range, &mut rng).unwrap();
    let dt = 0.01;

    let before: Vec<(f64, f64)> = sim
        .oscillators()
        .iter()
        .map(|osc| (osc.phase(), osc.intrinsic_frequency()))
        .collect();

    sim.update(0.0, dt).unwrap();

    for (osc, &(phase, omega)) in sim.oscillators().iter().zip(&before) {
        let expected = (phase + omega * dt).rem_euclid(TAU);
        assert_abs_diff_eq!(osc.phase(), expected, epsilon = 1e-10);
    }
}

#[test]
fn resonance_index_stays_bounded_over_a_long_run() {
    let range = FrequencyRange::new(-2.0, 2.0).unwrap();
    let mut rng = SmallRng::seed_from_u64(99);
    let mut sim = SimulationState::new(50, range, &mut rng).unwrap();

    let mut expected_time = 0.0;
    for step in 0..1000 {
        let dt = if step % 2 == 0 { 0.01 } else { 0.02 };
        sim.update(3.0, dt).unwrap();
        expected_time += dt;

        let r = sim.resonance_index();
        assert!((0.0..=1.0).contains(&r), "R out of bounds: {r}");
    }

    #[allow(clippy::float_cmp)]
    {
        assert_eq!(sim.time(), expected_time);
    }
}

#[test]
fn reset_starts_a_fresh_trajectory() {
    let range = FrequencyRange::new(-1.0, 1.0).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut sim = SimulationState::new(30, range, &mut rng).unwrap();

    for _ in 0..50 {
        sim.update(2.0, 0.01).unwrap();
    }
    let phases_before: Vec<f64> = sim.oscillators().iter().map(|o| o.phase()).collect();

    sim.reset(range, &mut rng).unwrap();

    assert_abs_diff_eq!(sim.time(), 0.0);
    assert!(
        sim.oscillators()
            .iter()
            .zip(&phases_before)
            .any(|(osc, &old)| osc.phase() != old),
        "reset should redraw phases"
    );
}

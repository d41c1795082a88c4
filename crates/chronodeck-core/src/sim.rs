//! Metric drift simulation
//!
//! Every `SIM_INTERVAL` ticks each metric advances by an independent bounded
//! random walk: `next = clamp(current + uniform(-delta, +delta), floor, 100)`.
//! The per-metric floors keep the display out of a fully dead state unless an
//! explicit operator action drives it there.

use crate::{DriftRng, StatusStore};

/// Ticks between drift simulation runs
pub const SIM_INTERVAL: u64 = 3;

const METRIC_CEIL: f64 = 100.0;

/// Bounded random-walk parameters for one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftParams {
    /// Maximum step magnitude per run
    pub delta: f64,
    /// Lowest value the walk may reach
    pub floor: f64,
}

/// Walk parameters for the health metric
pub const HEALTH_DRIFT: DriftParams = DriftParams {
    delta: 3.0,
    floor: 60.0,
};

/// Walk parameters for the stability metric
pub const STABILITY_DRIFT: DriftParams = DriftParams {
    delta: 2.0,
    floor: 70.0,
};

/// Walk parameters for the power metric
pub const POWER_DRIFT: DriftParams = DriftParams {
    delta: 1.5,
    floor: 80.0,
};

impl DriftParams {
    /// Advance one step of the walk from `current`
    pub fn step(&self, current: f64, rng: &mut DriftRng) -> f64 {
        let next = current + rng.range_f64(-self.delta, self.delta);
        next.clamp(self.floor, METRIC_CEIL)
    }
}

/// Advance all three metrics one drift step
///
/// Reads each current value from the store at mutation time, never from a
/// captured snapshot.
pub fn drift(status: &mut StatusStore, rng: &mut DriftRng) {
    let health = HEALTH_DRIFT.step(status.health(), rng);
    status.set_health(health);

    let stability = STABILITY_DRIFT.step(status.stability(), rng);
    status.set_stability(stability);

    let power = POWER_DRIFT.step(status.power(), rng);
    status.set_power(power);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_stays_bounded() {
        let mut status = StatusStore::new();
        let mut rng = DriftRng::new(42);

        for _ in 0..1000 {
            drift(&mut status, &mut rng);

            assert!(status.health() >= HEALTH_DRIFT.floor && status.health() <= METRIC_CEIL);
            assert!(
                status.stability() >= STABILITY_DRIFT.floor && status.stability() <= METRIC_CEIL
            );
            assert!(status.power() >= POWER_DRIFT.floor && status.power() <= METRIC_CEIL);
        }
    }

    #[test]
    fn test_step_clamps_to_floor() {
        let mut rng = DriftRng::new(42);
        // Starting below the floor, a single step must come back up to it
        let next = HEALTH_DRIFT.step(10.0, &mut rng);
        assert_eq!(next, HEALTH_DRIFT.floor);
    }

    #[test]
    fn test_deterministic_trajectory() {
        let mut a = StatusStore::new();
        let mut b = StatusStore::new();
        let mut rng_a = DriftRng::new(99);
        let mut rng_b = DriftRng::new(99);

        for _ in 0..50 {
            drift(&mut a, &mut rng_a);
            drift(&mut b, &mut rng_b);
        }

        assert_eq!(a, b);
    }
}

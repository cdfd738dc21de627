use super::entities::Window;
use super::value_objects::Direction;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Domain service - bounded random walk producing the next synthetic value.
pub struct SampleGenerator {
    rng: Box<dyn RngCore>,
}

impl SampleGenerator {
    pub fn new(rng: Box<dyn RngCore>) -> Self {
        Self { rng }
    }

    pub fn from_entropy() -> Self {
        Self::new(Box::new(StdRng::from_entropy()))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(StdRng::seed_from_u64(seed)))
    }

    /// `previous + U(-1, 1)`
    pub fn next(&mut self, previous: f64) -> f64 {
        previous + self.rng.gen_range(-1.0_f64..1.0)
    }
}

impl std::fmt::Debug for SampleGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleGenerator").finish_non_exhaustive()
    }
}

/// Derived metrics for the newest sample. Never mutated, only recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total: f64,
    pub change: f64,
    pub direction: Direction,
}

impl Metrics {
    /// Metrics from the two newest samples. A lone sample is its own baseline.
    pub fn recompute(window: &Window) -> Option<Metrics> {
        let current = window.tail(0)?.value();
        let previous = window.tail(1).map(|s| s.value()).unwrap_or(current);
        Some(Metrics {
            total: current,
            change: current - previous,
            direction: Direction::between(current, previous),
        })
    }

    /// `"3446.00"`, as shown in the price header
    pub fn total_text(&self) -> String {
        format!("{:.2}", self.total)
    }

    /// `"2.00 USD"`, as shown in the change badge
    pub fn change_text(&self) -> String {
        format!("{:.2} USD", self.change)
    }
}

/// Per-point direction for every sample, oldest first. The first point
/// compares against itself.
pub fn point_directions(window: &Window) -> Vec<Direction> {
    let values = window.values();
    values
        .iter()
        .enumerate()
        .map(|(i, &current)| {
            let previous = if i == 0 { current } else { values[i - 1] };
            Direction::between(current, previous)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feed::Sample;

    #[test]
    fn generator_stays_within_one_step() {
        let mut generator = SampleGenerator::seeded(7);
        let mut previous = 3444.0;
        for _ in 0..500 {
            let next = generator.next(previous);
            assert!(next - previous >= -1.0 && next - previous < 1.0);
            previous = next;
        }
    }

    #[test]
    fn seeded_generators_repeat() {
        let mut a = SampleGenerator::seeded(42);
        let mut b = SampleGenerator::seeded(42);
        assert_eq!(a.next(10.0), b.next(10.0));
    }

    #[test]
    fn empty_window_has_no_metrics() {
        assert!(Metrics::recompute(&Window::new(3)).is_none());
    }

    #[test]
    fn text_helpers_round_to_cents() {
        let window = Window::with_seed(3, [Sample::new("a", 1.0), Sample::new("b", 0.5)]);
        let metrics = Metrics::recompute(&window).unwrap();
        assert_eq!(metrics.total_text(), "0.50");
        assert_eq!(metrics.change_text(), "-0.50 USD");
        assert_eq!(metrics.direction, Direction::Down);
    }
}

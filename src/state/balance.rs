use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Constants behind the simulated portfolio figure.
///
/// The figure is demo noise around `baseline`; it has no link to real
/// positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceModel {
    pub baseline: Decimal,
    /// Maximum absolute perturbation applied per tick.
    pub amplitude: Decimal,
    /// Amount the P&L figure is measured against.
    pub cost_basis: Decimal,
}

impl Default for BalanceModel {
    fn default() -> Self {
        Self {
            baseline: Decimal::new(2_168_355, 2),
            amplitude: Decimal::new(50, 0),
            cost_basis: Decimal::new(10_000, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedBalance {
    pub total: Decimal,
    pub pnl: Decimal,
}

/// Produces a fresh [`SimulatedBalance`] per tick. Nothing carries over
/// between ticks except the RNG state.
pub struct BalanceSimulator {
    model: BalanceModel,
    rng: Box<dyn RngCore + Send>,
}

impl BalanceSimulator {
    pub fn new(model: BalanceModel) -> Self {
        Self::with_rng(model, StdRng::from_entropy())
    }

    pub fn with_rng<R>(model: BalanceModel, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            model,
            rng: Box::new(rng),
        }
    }

    /// Uniform offset in whole cents within `[-amplitude, +amplitude]`.
    pub fn tick(&mut self) -> SimulatedBalance {
        let span_cents = (self.model.amplitude.abs() * Decimal::ONE_HUNDRED)
            .trunc()
            .to_i64()
            .unwrap_or(0);
        let offset_cents = self.rng.gen_range(-span_cents..=span_cents);

        let total = self.model.baseline + Decimal::new(offset_cents, 2);
        SimulatedBalance {
            total,
            pnl: total - self.model.cost_basis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tick_stays_within_amplitude() {
        let model = BalanceModel::default();
        let mut sim = BalanceSimulator::with_rng(model, StdRng::seed_from_u64(7));

        for _ in 0..10_000 {
            let balance = sim.tick();
            assert!((balance.total - model.baseline).abs() <= model.amplitude);
            assert_eq!(balance.pnl, balance.total - model.cost_basis);
        }
    }

    #[test]
    fn ticks_do_not_accumulate() {
        let model = BalanceModel {
            amplitude: Decimal::new(1, 0),
            ..BalanceModel::default()
        };
        let mut sim = BalanceSimulator::with_rng(model, StdRng::seed_from_u64(42));

        let mut seen_different = false;
        let first = sim.tick();
        for _ in 0..1_000 {
            let next = sim.tick();
            assert!((next.total - model.baseline).abs() <= Decimal::ONE);
            seen_different |= next.total != first.total;
        }
        assert!(seen_different);
    }

    #[test]
    fn zero_amplitude_is_constant() {
        let model = BalanceModel {
            amplitude: Decimal::ZERO,
            ..BalanceModel::default()
        };
        let mut sim = BalanceSimulator::with_rng(model, StdRng::seed_from_u64(1));

        let balance = sim.tick();
        assert_eq!(balance.total, model.baseline);
        assert_eq!(balance.pnl, Decimal::new(1_168_355, 2));
    }
}

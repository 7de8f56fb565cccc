// file: `src/lj_pot.rs`
use crate::error::{Result, SimulationError};

/// Isotropic pair interaction evaluated at a minimum-image separation
pub trait PairPotential {
    /// Pair energy at separation `r`
    fn energy(&self, r: f64) -> f64;

    /// Separation beyond which the energy is exactly zero
    fn cutoff(&self) -> f64;

    /// Checked evaluation; zero or non-finite separations are a fatal precondition violation
    fn try_energy(&self, r: f64) -> Result<f64> {
        if !(r.is_finite() && r > 0.0) {
            return Err(SimulationError::ZeroSeparation);
        }
        Ok(self.energy(r))
    }
}

/// Truncated and shifted Lennard-Jones potential
///
/// U(r) = 4ε[(σ/r)^12 − (σ/r)^6] − U(r_cut) for r < r_cut, 0 otherwise.
/// The shift makes the potential continuous at the cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct LennardJones {
    pub epsilon: f64,
    pub sigma: f64,
    pub r_cut: f64,
    shift: f64,
}

impl LennardJones {
    pub fn new(epsilon: f64, sigma: f64, r_cut: f64) -> Result<Self> {
        for (name, value) in [("epsilon", epsilon), ("sigma", sigma), ("r_cut", r_cut)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidParameter(format!(
                    "LJ {name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(Self::build(epsilon, sigma, r_cut))
    }

    /// Reduced-unit argon-like fluid: ε = σ = 1, r_cut = 2.5σ
    pub fn reduced() -> Self {
        Self::build(1.0, 1.0, 2.5)
    }

    fn build(epsilon: f64, sigma: f64, r_cut: f64) -> Self {
        let mut lj = LennardJones {
            epsilon,
            sigma,
            r_cut,
            shift: 0.0,
        };
        lj.shift = lj.raw(r_cut);
        lj
    }

    /// Unshifted, untruncated 12-6 potential
    pub fn raw(&self, r: f64) -> f64 {
        let sr2 = (self.sigma / r).powi(2);
        let sr6 = sr2 * sr2 * sr2;
        4.0 * self.epsilon * (sr6 * sr6 - sr6)
    }

    /// Energy subtracted inside the cutoff
    pub fn shift(&self) -> f64 {
        self.shift
    }
}

impl PairPotential for LennardJones {
    fn energy(&self, r: f64) -> f64 {
        debug_assert!(r > 0.0, "LJ evaluated at zero separation");
        if r < self.r_cut {
            self.raw(r) - self.shift
        } else {
            0.0
        }
    }

    fn cutoff(&self) -> f64 {
        self.r_cut
    }
}

/// Non-interacting particles: every move is accepted
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoInteraction;

impl PairPotential for NoInteraction {
    fn energy(&self, _r: f64) -> f64 {
        0.0
    }

    fn cutoff(&self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_minimum_at_two_to_the_sixth() {
        let lj = LennardJones::new(1.0, 1.0, 1e6).unwrap();
        let r_min = 2.0_f64.powf(1.0 / 6.0);
        // Shift is ~1e-36 for such a large cutoff
        assert_relative_eq!(lj.energy(r_min), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lj.raw(1.0), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_continuity_at_cutoff() {
        let lj = LennardJones::new(1.0, 1.0, 2.5).unwrap();
        let mut previous = f64::INFINITY;
        for k in 1..12 {
            let eps = 10f64.powi(-k);
            let u = lj.energy(2.5 - eps).abs();
            assert!(u < previous);
            previous = u;
        }
        assert!(previous < 1e-10);
        assert_eq!(lj.energy(2.5), 0.0);
        assert_eq!(lj.energy(3.0), 0.0);
    }

    #[test]
    fn test_shift_value() {
        let lj = LennardJones::new(2.0, 1.5, 3.0).unwrap();
        let expected = 4.0 * 2.0 * (0.5_f64.powi(12) - 0.5_f64.powi(6));
        assert_relative_eq!(lj.shift(), expected, epsilon = 1e-14);
        assert_relative_eq!(lj.energy(2.0), lj.raw(2.0) - expected, epsilon = 1e-14);
    }

    #[test]
    fn test_reduced_matches_new() {
        let lj = LennardJones::new(1.0, 1.0, 2.5).unwrap();
        assert_eq!(LennardJones::reduced(), lj);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(LennardJones::new(0.0, 1.0, 2.5).is_err());
        assert!(LennardJones::new(1.0, -1.0, 2.5).is_err());
        assert!(LennardJones::new(1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_separation_is_rejected() {
        let lj = LennardJones::reduced();
        assert!(matches!(lj.try_energy(0.0), Err(SimulationError::ZeroSeparation)));
        assert!(lj.try_energy(f64::NAN).is_err());
        assert!(lj.try_energy(1.0).is_ok());
    }

    #[test]
    fn test_no_interaction() {
        assert_eq!(NoInteraction.energy(0.3), 0.0);
        assert_eq!(NoInteraction.cutoff(), 0.0);
    }
}

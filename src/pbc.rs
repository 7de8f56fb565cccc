// file: `src/pbc.rs`
use crate::error::{Result, SimulationError};
use nalgebra::Vector2;
use rand::Rng;

/// Square simulation box with periodic boundaries in both directions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationBox {
    /// Side length L
    pub length: f64,
}

impl SimulationBox {
    pub fn new(length: f64) -> Result<Self> {
        if !length.is_finite() || length <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "box length must be positive and finite, got {length}"
            )));
        }
        Ok(Self { length })
    }

    /// Box holding `n_particles` at number density `density`: L = sqrt(N / ρ)
    pub fn from_density(n_particles: usize, density: f64) -> Result<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "density must be positive and finite, got {density}"
            )));
        }
        Self::new((n_particles as f64 / density).sqrt())
    }

    pub fn area(&self) -> f64 {
        self.length * self.length
    }

    pub fn half_length(&self) -> f64 {
        0.5 * self.length
    }

    // Apply minimum-image convention
    pub fn minimum_image(&self, mut d: Vector2<f64>) -> Vector2<f64> {
        let l = self.length;
        for k in 0..2 {
            d[k] -= l * (d[k] / l).round();
        }
        d
    }

    /// Wrap a position back into [0, L) along both axes
    pub fn wrap(&self, p: Vector2<f64>) -> Vector2<f64> {
        p.map(|x| {
            let w = x.rem_euclid(self.length);
            // rem_euclid of a tiny negative number can round up to L itself
            if w >= self.length {
                0.0
            } else {
                w
            }
        })
    }

    pub fn contains(&self, p: &Vector2<f64>) -> bool {
        p.iter().all(|&x| (0.0..self.length).contains(&x))
    }

    /// Minimum-image distance between two points
    pub fn distance(&self, a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
        self.minimum_image(a - b).norm()
    }

    /// Uniform random point in the box
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2<f64> {
        Vector2::new(
            rng.gen::<f64>() * self.length,
            rng.gen::<f64>() * self.length,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_box_from_density() {
        let sim_box = SimulationBox::from_density(100, 0.8).unwrap();
        assert_relative_eq!(sim_box.length, 125.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(sim_box.area(), 125.0, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_box() {
        assert!(SimulationBox::new(0.0).is_err());
        assert!(SimulationBox::new(-1.0).is_err());
        assert!(SimulationBox::new(f64::NAN).is_err());
        assert!(SimulationBox::from_density(10, 0.0).is_err());
    }

    #[test]
    fn test_minimum_image_bound() {
        let sim_box = SimulationBox::new(3.7).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let d = Vector2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            let reduced = sim_box.minimum_image(d);
            assert!(reduced.x.abs() <= sim_box.half_length() + 1e-12);
            assert!(reduced.y.abs() <= sim_box.half_length() + 1e-12);
        }
    }

    #[test]
    fn test_minimum_image_examples() {
        let sim_box = SimulationBox::new(10.0).unwrap();
        let reduced = sim_box.minimum_image(Vector2::new(9.0, -8.5));
        assert_relative_eq!(reduced.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(reduced.y, 1.5, epsilon = 1e-12);

        let a = Vector2::new(0.5, 9.5);
        let b = Vector2::new(9.5, 0.5);
        assert_relative_eq!(sim_box.distance(&a, &b), 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_position() {
        let sim_box = SimulationBox::new(10.0).unwrap();

        let wrapped = sim_box.wrap(Vector2::new(12.0, -3.0));
        assert_relative_eq!(wrapped.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(wrapped.y, 7.0, epsilon = 1e-12);

        // Stays half-open even for values that round up to L
        let wrapped = sim_box.wrap(Vector2::new(-1e-18, 10.0));
        assert!(sim_box.contains(&wrapped));
    }

    #[test]
    fn test_random_position_inside() {
        let sim_box = SimulationBox::new(2.5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(sim_box.contains(&sim_box.random_position(&mut rng)));
        }
    }
}

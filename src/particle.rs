use nalgebra::Vector3;

/// Relativistic energy-momentum four-vector [MeV].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourMomentum {
    pub energy: f64,
    pub momentum: Vector3<f64>,
}

impl FourMomentum {
    pub fn new(energy: f64, momentum: Vector3<f64>) -> Self {
        Self { energy, momentum }
    }

    /// Four-momentum of a massless particle with the given unit direction.
    pub fn massless(direction: &Vector3<f64>, energy: f64) -> Self {
        Self {
            energy,
            momentum: direction * energy,
        }
    }

    /// Four-momentum on the mass shell for `mass` with this three-momentum.
    pub fn on_shell(momentum: Vector3<f64>, mass: f64) -> Self {
        Self {
            energy: (momentum.norm_squared() + mass * mass).sqrt(),
            momentum,
        }
    }

    /// Invariant mass, `sqrt(E^2 - |p|^2)`, floored at zero.
    pub fn mass(&self) -> f64 {
        (self.energy * self.energy - self.momentum.norm_squared())
            .max(0.0)
            .sqrt()
    }

    /// Kinetic energy for a particle of rest mass `mass`.
    pub fn kinetic_energy(&self, mass: f64) -> f64 {
        self.energy - mass
    }

    /// Unit vector along the momentum, or zero for a particle at rest.
    pub fn direction(&self) -> Vector3<f64> {
        let p = self.momentum.norm();
        if p > 0.0 {
            self.momentum / p
        } else {
            Vector3::zeros()
        }
    }
}

/// Sampled neutrino energy [MeV] and positron scattering cosine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub energy: f64,
    pub cos_theta: f64,
}

/// Kinematics of a single IBD interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IbdEvent {
    /// Unit direction of the incoming antineutrino.
    pub direction: Vector3<f64>,
    /// Cosine of the angle between the antineutrino and the positron.
    pub cos_theta: f64,
    pub neutrino: FourMomentum,
    pub positron: FourMomentum,
    pub neutron: FourMomentum,
}

/// An IBD event placed at a vertex inside the detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primary {
    pub position: [f64; 3],
    pub event: IbdEvent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_massless_construction() {
        let dir = Vector3::new(0.0, 0.6, 0.8);
        let p = FourMomentum::massless(&dir, 5.0);
        assert_eq!(p.energy, 5.0);
        assert_abs_diff_eq!(p.momentum.norm(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.mass(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.direction(), dir, epsilon = 1e-12);
    }

    #[test]
    fn test_on_shell_mass() {
        let p = FourMomentum::on_shell(Vector3::new(3.0, 4.0, 0.0), 12.0);
        assert_abs_diff_eq!(p.energy, 13.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.mass(), 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.kinetic_energy(12.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_direction_at_rest() {
        let p = FourMomentum::on_shell(Vector3::zeros(), 1.0);
        assert_eq!(p.direction(), Vector3::zeros());
    }
}

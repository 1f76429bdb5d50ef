// Outgoing positron and neutron kinematics for p(anti-nu_e, e+)n
//
// The target proton is at rest. The positron energy carries the first-order
// recoil correction; the neutron takes whatever momentum the positron leaves.

use crate::cross_section::{first_order_energy, zeroth_order};
use crate::data::{ELECTRON_MASS, NEUTRON_MASS};
use crate::particle::FourMomentum;

/// Positron energy [MeV] with the first-order finite nucleon mass correction.
///
/// Never below the electron rest mass.
#[inline]
pub fn positron_energy(e_nu: f64, cos_theta: f64) -> f64 {
    let (e0, _, v0) = zeroth_order(e_nu);
    first_order_energy(e_nu, cos_theta, e0, v0)
}

/// Positron momentum magnitude from the mass-shell relation.
#[inline]
pub fn positron_momentum(energy: f64) -> f64 {
    (energy * energy - ELECTRON_MASS * ELECTRON_MASS).max(0.0).sqrt()
}

/// Neutron four-momentum: `p_n = p_nu - p_e`, `E_n` on the neutron mass shell.
///
/// Momentum balance is exact; energy balance is only approximate because the
/// proton recoil before the interaction is neglected.
pub fn neutron_four_momentum(neutrino: &FourMomentum, positron: &FourMomentum) -> FourMomentum {
    FourMomentum::on_shell(neutrino.momentum - positron.momentum, NEUTRON_MASS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ibd_threshold, DELTA};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::Vector3;

    #[test]
    fn test_positron_energy_near_zeroth_order() {
        // Recoil correction is a few parts per thousand at reactor energies
        let e_nu = 5.0;
        let e1 = positron_energy(e_nu, 0.0);
        let e0 = e_nu - DELTA;
        assert_relative_eq!(e1, e0, max_relative = 0.01);
        assert!(e1 < e0);
    }

    #[test]
    fn test_positron_energy_forward_is_higher() {
        let fwd = positron_energy(8.0, 1.0);
        let back = positron_energy(8.0, -1.0);
        assert!(fwd > back);
    }

    #[test]
    fn test_positron_energy_floor() {
        for &e in &[0.0, 0.5, 1.0, ibd_threshold()] {
            for &c in &[-1.0, 0.0, 1.0] {
                assert!(positron_energy(e, c) >= ELECTRON_MASS);
            }
        }
    }

    #[test]
    fn test_positron_momentum_at_rest() {
        assert_eq!(positron_momentum(ELECTRON_MASS), 0.0);
        assert_abs_diff_eq!(
            positron_momentum(1.0),
            (1.0 - ELECTRON_MASS * ELECTRON_MASS).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_neutron_momentum_balance() {
        let nu = FourMomentum::massless(&Vector3::new(0.0, 0.0, 1.0), 4.0);
        let e = FourMomentum::on_shell(Vector3::new(0.5, -0.2, 2.1), ELECTRON_MASS);
        let n = neutron_four_momentum(&nu, &e);
        let sum = n.momentum + e.momentum;
        assert_abs_diff_eq!(sum, nu.momentum, epsilon = 1e-12);
        assert_abs_diff_eq!(n.mass(), NEUTRON_MASS, epsilon = 1e-6);
    }
}

// Inverse beta decay differential cross-section
//
// First-order (1/M) expansion of dsigma/dcos(theta) for anti-nu_e + p -> e+ + n
// following P. Vogel and J. F. Beacom, Phys. Rev. D 60, 053003 (1999),
// eqs. 12-13. Energies in MeV, result in mm^2.

use crate::data::{
    ibd_threshold, COS_CABIBBO, DELTA, ELECTRON_MASS, F2_WEAK_MAGNETISM, FERMI_COUPLING, F_VECTOR,
    G_AXIAL, HBARC, PROTON_MASS, RADIATIVE_CORRECTION,
};

/// Zeroth-order positron energy, momentum and velocity for infinite
/// nucleon mass. The energy never drops below the electron rest mass.
#[inline]
pub(crate) fn zeroth_order(e_nu: f64) -> (f64, f64, f64) {
    let e0 = (e_nu - DELTA).max(ELECTRON_MASS);
    let p0 = (e0 * e0 - ELECTRON_MASS * ELECTRON_MASS).max(0.0).sqrt();
    (e0, p0, p0 / e0)
}

/// First-order positron energy from the zeroth-order quantities.
///
/// `E1 = E0 (1 - E_nu/M (1 - v0 cos)) - y^2/M` with `y^2 = (Delta^2 - m_e^2)/2`,
/// floored at the electron rest mass.
#[inline]
pub(crate) fn first_order_energy(e_nu: f64, cos_theta: f64, e0: f64, v0: f64) -> f64 {
    let y_squared = (DELTA * DELTA - ELECTRON_MASS * ELECTRON_MASS) / 2.0;
    let e1 = e0 * (1.0 - e_nu / PROTON_MASS * (1.0 - v0 * cos_theta)) - y_squared / PROTON_MASS;
    e1.max(ELECTRON_MASS)
}

/// dsigma/dcos(theta) [mm^2] at neutrino energy `e_nu` [MeV] and positron
/// scattering cosine `cos_theta`.
///
/// Exactly zero below the IBD threshold. Close to threshold the 1/M term can
/// make the result marginally negative at some angles; callers that need a
/// probability density should floor it at zero.
#[inline]
pub fn differential_cross_section(e_nu: f64, cos_theta: f64) -> f64 {
    if e_nu < ibd_threshold() {
        return 0.0;
    }

    let me2 = ELECTRON_MASS * ELECTRON_MASS;
    let f = F_VECTOR;
    let f2 = F2_WEAK_MAGNETISM;
    let g = G_AXIAL;

    let sigma_0 = FERMI_COUPLING * FERMI_COUPLING * COS_CABIBBO * COS_CABIBBO
        / std::f64::consts::PI
        * (1.0 + RADIATIVE_CORRECTION);

    let (e0, p0, v0) = zeroth_order(e_nu);

    let e1 = first_order_energy(e_nu, cos_theta, e0, v0);
    let p1 = (e1 * e1 - me2).max(0.0).sqrt();
    let v1 = p1 / e1;

    // Gamma of eq. 13; the last two brackets share (E0 + Delta)(1 - cos/v0) - Delta
    let recoil = (e0 + DELTA) * (1.0 - cos_theta / v0) - DELTA;
    let gamma = 2.0 * (f + f2) * g * ((2.0 * e0 + DELTA) * (1.0 - v0 * cos_theta) - me2 / e0)
        + (f * f + g * g) * (DELTA * (1.0 + v0 * cos_theta) + me2 / e0)
        + (f * f + 3.0 * g * g) * recoil
        + (f * f - g * g) * recoil * v0 * cos_theta;

    let mut cross_section = ((f * f + 3.0 * g * g) + (f * f - g * g) * v1 * cos_theta) * e1 * p1
        - gamma / PROTON_MASS * e0 * p0;

    cross_section *= sigma_0 / 2.0;

    // MeV^-2 -> mm^2
    cross_section * HBARC * HBARC
}

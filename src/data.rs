// Physical constants used by the cross-section and kinematics code.
// Energies are in MeV and lengths in mm, matching the units a Geant4-style
// tracking layer expects.

/// Electron rest mass [MeV].
pub const ELECTRON_MASS: f64 = 0.510998910;

/// Proton rest mass [MeV].
pub const PROTON_MASS: f64 = 938.272013;

/// Neutron rest mass [MeV].
pub const NEUTRON_MASS: f64 = 939.56536;

/// Neutron - proton mass difference [MeV].
pub const DELTA: f64 = NEUTRON_MASS - PROTON_MASS;

/// Reduced Planck constant times c [MeV mm].
pub const HBARC: f64 = 197.3269631e-12;

/// Fermi coupling constant [MeV^-2].
pub const FERMI_COUPLING: f64 = 1.16639e-11;

/// Cosine of the Cabibbo angle, mean of the two reference values.
pub const COS_CABIBBO: f64 = (0.9741 + 0.9756) / 2.0;

/// Inner radiative correction.
pub const RADIATIVE_CORRECTION: f64 = 0.024;

/// Vector coupling.
pub const F_VECTOR: f64 = 1.00;

/// Anomalous nucleon isovector magnetic moment.
pub const F2_WEAK_MAGNETISM: f64 = 3.706;

/// Axial-vector coupling.
pub const G_AXIAL: f64 = 1.26;

/// Kinematic threshold of p(anti-nu_e, e+)n for a proton at rest [MeV].
///
/// `((m_p + Delta + m_e)^2 - m_p^2) / (2 m_p)`, about 1.806 MeV.
#[inline]
pub fn ibd_threshold() -> f64 {
    let m = PROTON_MASS + DELTA + ELECTRON_MASS;
    (m * m - PROTON_MASS * PROTON_MASS) / 2.0 / PROTON_MASS
}

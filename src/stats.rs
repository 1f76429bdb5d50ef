use crate::error::{IbdError, IbdResult};
use nalgebra::{Rotation3, Unit, Vector3};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Incoming antineutrino direction distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AngularDistribution {
    Isotropic,
    /// Fixed direction, e.g. the line of sight to a reactor core.
    Monodirectional { reference_uvw: [f64; 3] },
}

impl Default for AngularDistribution {
    fn default() -> Self {
        Self::Isotropic
    }
}

impl AngularDistribution {
    /// Create a new monodirectional distribution
    pub fn new_monodirectional(u: f64, v: f64, w: f64) -> IbdResult<Self> {
        let mag = (u * u + v * v + w * w).sqrt();
        if mag == 0.0 || !mag.is_finite() {
            return Err(IbdError::Config(format!(
                "direction vector ({}, {}, {}) cannot be normalised",
                u, v, w
            )));
        }
        Ok(Self::Monodirectional {
            reference_uvw: [u / mag, v / mag, w / mag],
        })
    }

    /// Create a new isotropic distribution
    pub fn new_isotropic() -> Self {
        Self::Isotropic
    }

    /// Copy with any fixed direction rescaled to unit length.
    ///
    /// Deserialised configs carry whatever vector the user wrote.
    pub fn normalized(&self) -> IbdResult<Self> {
        match self {
            Self::Isotropic => Ok(Self::Isotropic),
            Self::Monodirectional { reference_uvw: [u, v, w] } => {
                Self::new_monodirectional(*u, *v, *w)
            }
        }
    }

    /// Sample a direction from this distribution
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector3<f64> {
        match self {
            AngularDistribution::Isotropic => sample_isotropic(rng),
            AngularDistribution::Monodirectional { reference_uvw } => {
                Vector3::from_row_slice(reference_uvw)
            }
        }
    }
}

/// Isotropic unit vector: polar cosine uniform in [-1, 1], azimuth in [0, 2pi).
pub fn sample_isotropic<R: Rng + ?Sized>(rng: &mut R) -> Vector3<f64> {
    let xi1: f64 = rng.gen();
    let xi2: f64 = rng.gen();

    let mu = 2.0 * xi1 - 1.0;
    let phi = 2.0 * std::f64::consts::PI * xi2;

    let sin_theta = (1.0 - mu * mu).max(0.0).sqrt();
    Vector3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), mu)
}

/// Rotate `v` away from `axis_dir` by the polar angle `acos(mu)`.
///
/// The rotation axis is a vector orthogonal to `axis_dir` turned by the
/// azimuth `phi` about `axis_dir`, so `phi` picks the scattering plane.
/// `axis_dir` must be a unit vector.
pub fn rotate_about_direction(
    v: &Vector3<f64>,
    axis_dir: &Vector3<f64>,
    mu: f64,
    phi: f64,
) -> Vector3<f64> {
    let theta = mu.clamp(-1.0, 1.0).acos();
    let direction = Unit::new_unchecked(*axis_dir);

    let perp = Rotation3::from_axis_angle(&direction, phi) * crate::utilities::orthogonal(axis_dir);
    let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(perp), theta);
    rotation * *v
}

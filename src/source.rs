use crate::config::{EnvelopeStrategy, GeneratorConfig};
use crate::cross_section::differential_cross_section;
use crate::error::{IbdError, IbdResult};
use crate::geometry::DetectorGeometry;
use crate::kinematics::{neutron_four_momentum, positron_energy, positron_momentum};
use crate::particle::{FourMomentum, IbdEvent, Interaction, Primary};
use crate::spectrum::Spectrum;
use crate::stats::{rotate_about_direction, AngularDistribution};
use crate::utilities::linspace;
use rand::Rng;
use std::f64::consts::PI;
use std::sync::Arc;

/// Antineutrino source producing IBD interactions inside a detector.
///
/// Energies and scattering cosines are drawn by 2D rejection sampling from
/// `sigma(E, cos) * flux(E)` against a constant envelope fixed at
/// construction. The spectrum is shared read-only; each caller brings its
/// own random number generator.
#[derive(Debug, Clone)]
pub struct IbdSource {
    spectrum: Arc<Spectrum>,
    direction: AngularDistribution,
    envelope: f64,
    max_iterations: usize,
}

/// Unnormalised target density of the rejection sampler.
#[inline]
fn target_density(spectrum: &Spectrum, energy: f64, cos_theta: f64) -> f64 {
    differential_cross_section(energy, cos_theta) * spectrum.interpolate(energy)
}

/// Largest target density over a grid of evenly spaced energies plus every
/// table node, crossed with evenly spaced cosines.
fn grid_maximum(spectrum: &Spectrum, energy_points: usize, cos_points: usize) -> f64 {
    let mut energies = linspace(spectrum.e_min(), spectrum.e_max(), energy_points);
    energies.extend_from_slice(spectrum.energies());
    let cosines = linspace(-1.0, 1.0, cos_points);

    let mut max = 0.0_f64;
    for &e in &energies {
        for &c in &cosines {
            max = max.max(target_density(spectrum, e, c));
        }
    }
    max
}

impl IbdSource {
    /// Source with the default configuration (isotropic, grid envelope).
    pub fn new(spectrum: Arc<Spectrum>) -> IbdResult<Self> {
        Self::with_config(spectrum, &GeneratorConfig::default())
    }

    /// Load the spectrum named in `config` and build the source.
    pub fn from_config(config: &GeneratorConfig) -> IbdResult<Self> {
        config.validate()?;
        let spectrum = Spectrum::from_file(&config.spectrum_path)?;
        Self::with_config(Arc::new(spectrum), config)
    }

    /// Build a source from an already loaded spectrum.
    pub fn with_config(spectrum: Arc<Spectrum>, config: &GeneratorConfig) -> IbdResult<Self> {
        config.validate()?;

        let envelope = match config.envelope {
            EnvelopeStrategy::Grid => {
                grid_maximum(&spectrum, config.grid_energy_points, config.grid_cos_points)
                    * config.envelope_margin
            }
            EnvelopeStrategy::Legacy => {
                let xs_max = differential_cross_section(spectrum.e_max(), -1.0);
                let legacy = xs_max * spectrum.flux_max();
                let grid =
                    grid_maximum(&spectrum, config.grid_energy_points, config.grid_cos_points);
                if grid > legacy {
                    tracing::warn!(
                        "Legacy envelope {:e} is below the sampled maximum {:e}; events will be biased",
                        legacy,
                        grid
                    );
                }
                legacy
            }
        };

        if !(envelope > 0.0) || !envelope.is_finite() {
            return Err(IbdError::EmptyEnvelope);
        }

        tracing::info!(
            "IBD source over [{}, {}] MeV with {:?} envelope {:e}",
            spectrum.e_min(),
            spectrum.e_max(),
            config.envelope,
            envelope
        );

        Ok(IbdSource {
            spectrum,
            direction: config.direction.normalized()?,
            envelope,
            max_iterations: config.max_iterations,
        })
    }

    pub fn spectrum(&self) -> &Arc<Spectrum> {
        &self.spectrum
    }

    pub fn envelope(&self) -> f64 {
        self.envelope
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn direction(&self) -> &AngularDistribution {
        &self.direction
    }

    /// One rejection-sampling proposal; `Some` when accepted.
    #[inline]
    fn propose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Interaction> {
        let e_min = self.spectrum.e_min();
        let e_max = self.spectrum.e_max();

        let energy = e_min + (e_max - e_min) * rng.gen::<f64>();
        let cos_theta = -1.0 + 2.0 * rng.gen::<f64>();
        let test = self.envelope * rng.gen::<f64>();

        if test < target_density(&self.spectrum, energy, cos_theta) {
            Some(Interaction { energy, cos_theta })
        } else {
            None
        }
    }

    /// Draw a neutrino energy and positron scattering cosine.
    ///
    /// Fails with [`IbdError::EnvelopeExhausted`] after `max_iterations`
    /// rejected proposals.
    pub fn generate_interaction<R: Rng + ?Sized>(&self, rng: &mut R) -> IbdResult<Interaction> {
        for _ in 0..self.max_iterations {
            if let Some(interaction) = self.propose(rng) {
                return Ok(interaction);
            }
        }
        tracing::warn!(
            "No IBD interaction accepted in {} proposals (envelope {:e})",
            self.max_iterations,
            self.envelope
        );
        Err(IbdError::EnvelopeExhausted {
            iterations: self.max_iterations,
        })
    }

    /// Generate the neutrino, positron and neutron four-momenta of one event.
    pub fn generate_event<R: Rng + ?Sized>(&self, rng: &mut R) -> IbdResult<IbdEvent> {
        let nu_dir = self.direction.sample(rng);

        let Interaction { energy, cos_theta } = self.generate_interaction(rng)?;

        let e_positron = positron_energy(energy, cos_theta);
        let p_positron = positron_momentum(e_positron);

        let neutrino = FourMomentum::massless(&nu_dir, energy);

        // Scattering plane at a random azimuth about the neutrino axis
        let phi = 2.0 * PI * rng.gen::<f64>();
        let p_vec = rotate_about_direction(&(nu_dir * p_positron), &nu_dir, cos_theta, phi);
        let positron = FourMomentum::new(e_positron, p_vec);

        let neutron = neutron_four_momentum(&neutrino, &positron);

        tracing::debug!(
            "nu dir: ({:.4}, {:.4}, {:.4}) e_nu: {:.4} MeV cos theta: {:.4} positron energy: {:.4} MeV",
            nu_dir.x,
            nu_dir.y,
            nu_dir.z,
            energy,
            cos_theta,
            e_positron
        );

        Ok(IbdEvent {
            direction: nu_dir,
            cos_theta,
            neutrino,
            positron,
            neutron,
        })
    }

    /// Uniform vertex inside the detector's bounding box.
    ///
    /// Half-dimensions are read from `geometry` on every call.
    pub fn generate_vertex<G, R>(&self, geometry: &G, rng: &mut R) -> [f64; 3]
    where
        G: DetectorGeometry + ?Sized,
        R: Rng + ?Sized,
    {
        let mut position = [0.0; 3];
        for (axis, coord) in position.iter_mut().enumerate() {
            *coord = geometry.half_dimension(axis) * (-1.0 + 2.0 * rng.gen::<f64>());
        }
        position
    }

    /// Event plus vertex, ready to hand to a tracking layer.
    pub fn sample<G, R>(&self, geometry: &G, rng: &mut R) -> IbdResult<Primary>
    where
        G: DetectorGeometry + ?Sized,
        R: Rng + ?Sized,
    {
        let event = self.generate_event(rng)?;
        let position = self.generate_vertex(geometry, rng);
        Ok(Primary { position, event })
    }

    /// Fraction of `trials` proposals that are accepted.
    pub fn acceptance_efficiency<R: Rng + ?Sized>(&self, rng: &mut R, trials: usize) -> f64 {
        if trials == 0 {
            return 0.0;
        }
        let accepted = (0..trials).filter(|_| self.propose(rng).is_some()).count();
        accepted as f64 / trials as f64
    }

    /// Largest `target / envelope` over a grid; above 1 the envelope is too
    /// low and sampled events are biased.
    pub fn envelope_violation(&self, energy_points: usize, cos_points: usize) -> f64 {
        grid_maximum(&self.spectrum, energy_points, cos_points) / self.envelope
    }
}

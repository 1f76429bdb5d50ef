// Generator configuration
use crate::error::{IbdError, IbdResult};
use crate::stats::AngularDistribution;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the constant rejection-sampling envelope is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStrategy {
    /// Maximum of cross-section times flux over an energy x cosine grid,
    /// scaled by `envelope_margin`.
    Grid,
    /// `sigma(e_max, -1) * flux_max`. Not a guaranteed bound: the
    /// cross-section peaks at forward angles above roughly 15 MeV.
    Legacy,
}

impl Default for EnvelopeStrategy {
    fn default() -> Self {
        Self::Grid
    }
}

/// Configuration for an [`IbdSource`](crate::source::IbdSource).
///
/// Loaded from JSON; every field except `spectrum_path` has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Two-column text file of energy [MeV] and flux.
    pub spectrum_path: String,
    /// Incoming antineutrino direction distribution.
    #[serde(default)]
    pub direction: AngularDistribution,
    /// Rejected draws allowed per interaction before giving up.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default)]
    pub envelope: EnvelopeStrategy,
    /// Evenly spaced energies in the envelope grid (table nodes are added).
    #[serde(default = "default_grid_energy_points")]
    pub grid_energy_points: usize,
    /// Evenly spaced cosines in the envelope grid, including -1 and 1.
    #[serde(default = "default_grid_cos_points")]
    pub grid_cos_points: usize,
    /// Multiplier applied to the grid maximum.
    #[serde(default = "default_envelope_margin")]
    pub envelope_margin: f64,
    /// Events per batch run.
    #[serde(default = "default_events")]
    pub events: usize,
    /// Base seed for batch runs; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_iterations() -> usize {
    1_000_000
}
fn default_grid_energy_points() -> usize {
    512
}
fn default_grid_cos_points() -> usize {
    65
}
fn default_envelope_margin() -> f64 {
    1.05
}
fn default_events() -> usize {
    1000
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            spectrum_path: String::new(),
            direction: AngularDistribution::default(),
            max_iterations: default_max_iterations(),
            envelope: EnvelopeStrategy::default(),
            grid_energy_points: default_grid_energy_points(),
            grid_cos_points: default_grid_cos_points(),
            envelope_margin: default_envelope_margin(),
            events: default_events(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration reading the spectrum at `path`.
    pub fn with_spectrum<P: AsRef<Path>>(path: P) -> Self {
        GeneratorConfig {
            spectrum_path: path.as_ref().to_string_lossy().to_string(),
            ..Self::default()
        }
    }

    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> IbdResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges. The spectrum file itself is checked when loaded.
    pub fn validate(&self) -> IbdResult<()> {
        if self.max_iterations == 0 {
            return Err(IbdError::Config("max_iterations must be positive".into()));
        }
        if self.grid_energy_points < 2 {
            return Err(IbdError::Config(format!(
                "grid_energy_points must be at least 2, got {}",
                self.grid_energy_points
            )));
        }
        if self.grid_cos_points < 2 {
            return Err(IbdError::Config(format!(
                "grid_cos_points must be at least 2, got {}",
                self.grid_cos_points
            )));
        }
        if !self.envelope_margin.is_finite() || self.envelope_margin < 1.0 {
            return Err(IbdError::Config(format!(
                "envelope_margin must be a finite value >= 1, got {}",
                self.envelope_margin
            )));
        }
        self.direction.normalized()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::with_spectrum("spectra/reactor.dat");
        assert_eq!(config.spectrum_path, "spectra/reactor.dat");
        assert_eq!(config.envelope, EnvelopeStrategy::Grid);
        assert_eq!(config.direction, AngularDistribution::Isotropic);
        assert_eq!(config.max_iterations, 1_000_000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"spectrum_path": "flux.dat"}"#).unwrap();
        assert_eq!(config.grid_energy_points, 512);
        assert_eq!(config.grid_cos_points, 65);
        assert_eq!(config.envelope_margin, 1.05);
        assert_eq!(config.events, 1000);
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "spectrum_path": "flux.dat",
            "direction": {"type": "monodirectional", "reference_uvw": [0.0, 1.0, 0.0]},
            "max_iterations": 5000,
            "envelope": "legacy",
            "seed": 7,
            "events": 20
        }"#;
        let config: GeneratorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.envelope, EnvelopeStrategy::Legacy);
        assert_eq!(config.max_iterations, 5000);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.events, 20);
        assert!(matches!(
            config.direction,
            AngularDistribution::Monodirectional { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = GeneratorConfig::with_spectrum("flux.dat");
        config.max_iterations = 0;
        assert!(matches!(config.validate(), Err(IbdError::Config(_))));

        let mut config = GeneratorConfig::with_spectrum("flux.dat");
        config.envelope_margin = 0.5;
        assert!(matches!(config.validate(), Err(IbdError::Config(_))));

        let mut config = GeneratorConfig::with_spectrum("flux.dat");
        config.grid_cos_points = 1;
        assert!(matches!(config.validate(), Err(IbdError::Config(_))));

        let mut config = GeneratorConfig::with_spectrum("flux.dat");
        config.direction = AngularDistribution::Monodirectional {
            reference_uvw: [0.0, 0.0, 0.0],
        };
        assert!(matches!(config.validate(), Err(IbdError::Config(_))));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let mut config = GeneratorConfig::with_spectrum("flux.dat");
        config.seed = Some(99);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = GeneratorConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_file_errors() {
        assert!(matches!(
            GeneratorConfig::from_file("/nonexistent/config.json"),
            Err(IbdError::Io(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            GeneratorConfig::from_file(file.path()),
            Err(IbdError::Json(_))
        ));
    }
}

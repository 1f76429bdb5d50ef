// Antineutrino flux spectrum table
//
// Two-column text data: energy [MeV] and flux, one pair per line, ascending
// in energy. The table is validated once on load and never mutated.

use crate::error::{IbdError, IbdResult};
use crate::utilities::interpolate_linear;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered energy -> flux table with its derived range and peak flux.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    energy: Vec<f64>,
    flux: Vec<f64>,
    e_min: f64,
    e_max: f64,
    flux_max: f64,
}

impl Spectrum {
    /// Build a spectrum from energy and flux columns.
    ///
    /// Requires at least two points, strictly increasing energies and
    /// finite, non-negative values. The columns are not re-sorted.
    pub fn new(energy: Vec<f64>, flux: Vec<f64>) -> IbdResult<Self> {
        if energy.len() != flux.len() {
            return Err(IbdError::InvalidSpectrum(format!(
                "energy has {} values but flux has {}",
                energy.len(),
                flux.len()
            )));
        }
        if energy.len() < 2 {
            return Err(IbdError::InvalidSpectrum(format!(
                "need at least 2 points, got {}",
                energy.len()
            )));
        }
        for (i, (&e, &f)) in energy.iter().zip(flux.iter()).enumerate() {
            if !e.is_finite() || e < 0.0 {
                return Err(IbdError::InvalidSpectrum(format!(
                    "energy {} at point {} must be finite and non-negative",
                    e, i
                )));
            }
            if !f.is_finite() || f < 0.0 {
                return Err(IbdError::InvalidSpectrum(format!(
                    "flux {} at point {} must be finite and non-negative",
                    f, i
                )));
            }
        }
        if let Some(i) = energy.windows(2).position(|w| w[1] <= w[0]) {
            return Err(IbdError::InvalidSpectrum(format!(
                "energies must be strictly increasing: {} then {} at point {}",
                energy[i],
                energy[i + 1],
                i + 1
            )));
        }

        let e_min = energy[0];
        let e_max = energy[energy.len() - 1];
        let flux_max = flux.iter().cloned().fold(0.0, f64::max);

        Ok(Spectrum {
            energy,
            flux,
            e_min,
            e_max,
            flux_max,
        })
    }

    /// Build a spectrum from `(energy, flux)` pairs.
    pub fn from_points(points: &[(f64, f64)]) -> IbdResult<Self> {
        let (energy, flux): (Vec<f64>, Vec<f64>) = points.iter().cloned().unzip();
        Self::new(energy, flux)
    }

    /// Read a whitespace-separated two-column spectrum file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> IbdResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let spectrum = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            "Loaded spectrum {} with {} points over [{}, {}] MeV",
            path.display(),
            spectrum.len(),
            spectrum.e_min,
            spectrum.e_max
        );
        Ok(spectrum)
    }

    /// Read `(energy, flux)` rows from any buffered source until exhausted.
    ///
    /// Blank lines and `#` comments are skipped. Extra columns after the
    /// first two are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> IbdResult<Self> {
        let mut energy = Vec::new();
        let mut flux = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            let parsed = match (fields.next(), fields.next()) {
                (Some(e), Some(f)) => e.parse::<f64>().ok().zip(f.parse::<f64>().ok()),
                _ => None,
            };
            match parsed {
                Some((e, f)) => {
                    energy.push(e);
                    flux.push(f);
                }
                None => {
                    return Err(IbdError::SpectrumParse {
                        line: index + 1,
                        content: line.clone(),
                    })
                }
            }
        }

        Self::new(energy, flux)
    }

    /// Flux at `energy` by linear interpolation.
    ///
    /// Flat above `e_max`; below `e_min` the first segment is extrapolated.
    #[inline]
    pub fn interpolate(&self, energy: f64) -> f64 {
        interpolate_linear(&self.energy, &self.flux, energy)
    }

    pub fn e_min(&self) -> f64 {
        self.e_min
    }

    pub fn e_max(&self) -> f64 {
        self.e_max
    }

    pub fn flux_max(&self) -> f64 {
        self.flux_max
    }

    pub fn energies(&self) -> &[f64] {
        &self.energy
    }

    pub fn fluxes(&self) -> &[f64] {
        &self.flux
    }

    pub fn len(&self) -> usize {
        self.energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }
}

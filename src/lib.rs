//! Inverse beta decay (anti-nu_e + p -> e+ + n) event generation.
//!
//! Samples antineutrino energies from a tabulated flux weighted by the
//! Vogel-Beacom differential cross-section, builds the outgoing positron and
//! neutron four-momenta with first-order recoil corrections, and places the
//! vertex uniformly inside a detector bounding box.

pub mod bounding_box;
pub mod config;
pub mod cross_section;
pub mod data;
pub mod error;
pub mod fast_rng;
pub mod geometry;
pub mod kinematics;
pub mod model;
pub mod particle;
pub mod settings;
pub mod source;
pub mod spectrum;
pub mod stats;
mod utilities;

pub use bounding_box::BoundingBox;
pub use config::{EnvelopeStrategy, GeneratorConfig};
pub use cross_section::differential_cross_section;
pub use error::{IbdError, IbdResult};
pub use fast_rng::FastRng;
pub use geometry::DetectorGeometry;
pub use kinematics::{neutron_four_momentum, positron_energy, positron_momentum};
pub use model::Model;
pub use particle::{FourMomentum, IbdEvent, Interaction, Primary};
pub use settings::Settings;
pub use source::IbdSource;
pub use spectrum::Spectrum;
pub use stats::AngularDistribution;
pub use utilities::interpolate_linear;

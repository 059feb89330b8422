//! # Noise Configuration
//!
//! Serializable description of a fractal value-noise setup, loaded once at
//! startup from TOML:
//!
//! ```toml
//! seed = 1337
//! octaves = 6
//! frequency = 0.02
//! amplitude = 1.0
//! offset = [0.0, 0.0, 0.0]
//! lacunarity = 2.0
//! gain = 0.5
//! table_size = 1024
//! # One sampler per listed seed, last one reused. Empty = use `seed`.
//! octave_seeds = []
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use voxalis_math::Vec3;

use crate::error::{NoiseError, NoiseResult};
use crate::fractal::{check_octaves, FractalNoise};
use crate::permutation::PermutationTable;
use crate::value::ValueNoise;

/// Configuration for fractal value noise. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Seed for the sampler when `octave_seeds` is empty.
    pub seed: i32,
    /// Per-octave sampler seeds.
    pub octave_seeds: Vec<i32>,
    /// Base frequency of the first octave.
    pub frequency: f32,
    /// Overall output scale.
    pub amplitude: f32,
    /// Offset added to coordinates.
    pub offset: [f32; 3],
    /// Number of octaves.
    pub octaves: usize,
    /// Frequency growth per octave.
    pub lacunarity: f32,
    /// Amplitude decay per octave.
    pub gain: f32,
    /// Permutation table size; must be a power of two.
    pub table_size: usize,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            octave_seeds: Vec::new(),
            frequency: 1.0,
            amplitude: 1.0,
            offset: [0.0; 3],
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
            table_size: PermutationTable::DEFAULT_SIZE,
        }
    }
}

impl NoiseConfig {
    /// Default configuration with the given seed.
    #[must_use]
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Rolling terrain: many octaves, low base frequency.
    #[must_use]
    pub fn terrain(seed: i32) -> Self {
        Self {
            seed,
            octaves: 6,
            frequency: 0.02,
            lacunarity: 2.1,
            gain: 0.55,
            ..Default::default()
        }
    }

    /// Soft, blobby fields: few octaves, fast decay.
    #[must_use]
    pub fn smooth(seed: i32) -> Self {
        Self {
            seed,
            octaves: 3,
            frequency: 0.05,
            lacunarity: 2.0,
            gain: 0.4,
            ..Default::default()
        }
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] on malformed TOML, unknown
    /// keys, or values rejected by [`NoiseConfig::validate`].
    pub fn from_toml_str(source: &str) -> NoiseResult<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| NoiseError::InvalidConfig(format!("Failed to parse noise config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] if the file cannot be read or
    /// its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> NoiseResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            NoiseError::InvalidConfig(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), seed = config.seed, octaves = config.octaves, "noise config loaded");
        Ok(config)
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidConfig`] if serialization fails.
    pub fn to_toml_string(&self) -> NoiseResult<String> {
        toml::to_string(self)
            .map_err(|e| NoiseError::InvalidConfig(format!("Failed to serialize noise config: {e}")))
    }

    /// Checks every value is usable.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> NoiseResult<()> {
        check_octaves(self.octaves)?;
        if !PermutationTable::is_valid_size(self.table_size) {
            return Err(NoiseError::TableSizeNotPowerOfTwo(self.table_size));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(NoiseError::InvalidConfig(format!(
                "frequency must be positive and finite, got {}",
                self.frequency
            )));
        }
        let finite = [
            ("amplitude", self.amplitude),
            ("lacunarity", self.lacunarity),
            ("gain", self.gain),
            ("offset.x", self.offset[0]),
            ("offset.y", self.offset[1]),
            ("offset.z", self.offset[2]),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(NoiseError::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            )));
        }
        Ok(())
    }

    /// Seeds of the samplers this config creates, in octave order.
    #[must_use]
    pub fn sampler_seeds(&self) -> Vec<i32> {
        if self.octave_seeds.is_empty() {
            vec![self.seed]
        } else {
            self.octave_seeds.clone()
        }
    }

    /// Builds the fractal described by this config.
    ///
    /// Samplers are unit value noise (frequency 1, amplitude 1); the
    /// fractal carries frequency, amplitude and offset.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the config is invalid.
    pub fn build(&self) -> NoiseResult<FractalNoise<ValueNoise>> {
        self.validate()?;

        let samplers = self
            .sampler_seeds()
            .into_iter()
            .map(|seed| {
                ValueNoise::with_table(seed, 1.0, 1.0, self.table_size, PermutationTable::DEFAULT_MAX)
            })
            .collect::<NoiseResult<Vec<_>>>()?;

        FractalNoise::builder(samplers)
            .octaves(self.octaves)
            .frequency(self.frequency)
            .amplitude(self.amplitude)
            .offset(Vec3::from_array(self.offset))
            .lacunarity(self.lacunarity)
            .gain(self.gain)
            .build()
    }
}

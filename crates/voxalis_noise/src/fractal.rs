//! # Fractal Noise
//!
//! Sums several octaves of a base noise. Octave `i` samples at
//! `frequency * lacunarity^i` and is weighted by `0.5 * gain^i`.
//!
//! ## Octave Tables
//!
//! The per-octave frequency/amplitude/sampler tables are derived data.
//! They are built on construction and every setter that can change them
//! rebuilds them before returning, so a sample never reads a stale table.

use voxalis_math::Vec3;

use crate::error::{NoiseError, NoiseResult};
use crate::source::NoiseSource;

/// Weight of the first octave.
const FIRST_OCTAVE_AMPLITUDE: f32 = 0.5;

/// Most octaves a fractal accepts. Past this, octave frequencies exceed
/// `f32` precision for any practical lacunarity.
pub const MAX_OCTAVES: usize = 32;

/// Rejects octave counts outside `1..=MAX_OCTAVES`.
pub(crate) fn check_octaves(octaves: usize) -> NoiseResult<()> {
    match octaves {
        0 => Err(NoiseError::NoOctaves),
        n if n > MAX_OCTAVES => Err(NoiseError::TooManyOctaves(n)),
        _ => Ok(()),
    }
}

/// Derived parameters of a single octave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctaveLayer {
    /// Index into the fractal's sampler list.
    pub sampler: usize,
    /// Coordinate scale for this octave.
    pub frequency: f32,
    /// Weight of this octave before the overall amplitude.
    pub amplitude: f32,
}

/// Multi-octave fractal noise over any [`NoiseSource`].
///
/// With fewer samplers than octaves, the last sampler serves every
/// remaining octave.
///
/// # Example
///
/// ```rust,ignore
/// let fractal = FractalNoise::builder(vec![ValueNoise::new(42, 1.0, 1.0)])
///     .octaves(6)
///     .frequency(0.01)
///     .gain(0.5)
///     .build()?;
/// let height = fractal.sample_2d(x, z);
/// ```
#[derive(Clone, Debug)]
pub struct FractalNoise<N> {
    samplers: Vec<N>,
    octaves: usize,
    frequency: f32,
    amplitude: f32,
    offset: Vec3,
    lacunarity: f32,
    gain: f32,
    layers: Vec<OctaveLayer>,
}

impl<N: NoiseSource> FractalNoise<N> {
    /// Default frequency growth per octave.
    pub const DEFAULT_LACUNARITY: f32 = 2.0;

    /// Default amplitude decay per octave.
    pub const DEFAULT_GAIN: f32 = 0.5;

    /// Creates a fractal over a single sampler with amplitude 1.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::NoOctaves`] if `octaves` is zero.
    pub fn new(sampler: N, octaves: usize, frequency: f32) -> NoiseResult<Self> {
        Self::builder(vec![sampler])
            .octaves(octaves)
            .frequency(frequency)
            .build()
    }

    /// Starts a builder over `samplers`.
    #[must_use]
    pub fn builder(samplers: Vec<N>) -> FractalNoiseBuilder<N> {
        FractalNoiseBuilder::new(samplers)
    }

    fn rebuild_layers(&mut self) {
        let last = self.samplers.len() - 1;
        let mut amplitude = FIRST_OCTAVE_AMPLITUDE;
        let mut frequency = self.frequency;

        self.layers.clear();
        for i in 0..self.octaves {
            // An octave whose scale overflowed contributes nothing.
            let layer = if frequency.is_finite() && amplitude.is_finite() {
                OctaveLayer { sampler: i.min(last), frequency, amplitude }
            } else {
                OctaveLayer { sampler: i.min(last), frequency: 0.0, amplitude: 0.0 }
            };
            self.layers.push(layer);
            amplitude *= self.gain;
            frequency *= self.lacunarity;
        }

        tracing::debug!(
            octaves = self.octaves,
            samplers = self.samplers.len(),
            lacunarity = self.lacunarity,
            gain = self.gain,
            "fractal octave tables rebuilt"
        );
    }

    // =========================================================================
    // Sampling
    // =========================================================================

    /// Samples the full fractal along a line.
    #[must_use]
    pub fn sample_1d(&self, x: f32) -> f32 {
        let x = x + self.offset.x;
        let sum: f32 = self
            .layers
            .iter()
            .map(|layer| self.samplers[layer.sampler].sample_1d(x * layer.frequency) * layer.amplitude)
            .sum();
        sum * self.amplitude
    }

    /// Samples the full fractal on a plane.
    #[must_use]
    pub fn sample_2d(&self, x: f32, y: f32) -> f32 {
        let x = x + self.offset.x;
        let y = y + self.offset.y;
        let sum: f32 = self
            .layers
            .iter()
            .map(|layer| {
                let frq = layer.frequency;
                self.samplers[layer.sampler].sample_2d(x * frq, y * frq) * layer.amplitude
            })
            .sum();
        sum * self.amplitude
    }

    /// Samples the full fractal in a volume.
    #[must_use]
    pub fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let x = x + self.offset.x;
        let y = y + self.offset.y;
        let z = z + self.offset.z;
        let sum: f32 = self
            .layers
            .iter()
            .map(|layer| {
                let frq = layer.frequency;
                self.samplers[layer.sampler].sample_3d(x * frq, y * frq, z * frq) * layer.amplitude
            })
            .sum();
        sum * self.amplitude
    }

    /// Contribution of octave `i` along a line; zero if `i` is out of range.
    #[must_use]
    pub fn octave_1d(&self, i: usize, x: f32) -> f32 {
        let Some(layer) = self.layers.get(i) else {
            return 0.0;
        };
        let x = x + self.offset.x;
        self.samplers[layer.sampler].sample_1d(x * layer.frequency) * layer.amplitude * self.amplitude
    }

    /// Contribution of octave `i` on a plane; zero if `i` is out of range.
    #[must_use]
    pub fn octave_2d(&self, i: usize, x: f32, y: f32) -> f32 {
        let Some(layer) = self.layers.get(i) else {
            return 0.0;
        };
        let frq = layer.frequency;
        let x = (x + self.offset.x) * frq;
        let y = (y + self.offset.y) * frq;
        self.samplers[layer.sampler].sample_2d(x, y) * layer.amplitude * self.amplitude
    }

    /// Contribution of octave `i` in a volume; zero if `i` is out of range.
    #[must_use]
    pub fn octave_3d(&self, i: usize, x: f32, y: f32, z: f32) -> f32 {
        let Some(layer) = self.layers.get(i) else {
            return 0.0;
        };
        let frq = layer.frequency;
        let x = (x + self.offset.x) * frq;
        let y = (y + self.offset.y) * frq;
        let z = (z + self.offset.z) * frq;
        self.samplers[layer.sampler].sample_3d(x, y, z) * layer.amplitude * self.amplitude
    }

    // =========================================================================
    // Setters - every table-affecting setter rebuilds the tables
    // =========================================================================

    /// Sets the octave count.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::NoOctaves`] if `octaves` is zero and
    /// [`NoiseError::TooManyOctaves`] above [`MAX_OCTAVES`]; the fractal
    /// is left unchanged.
    pub fn set_octaves(&mut self, octaves: usize) -> NoiseResult<()> {
        check_octaves(octaves)?;
        self.octaves = octaves;
        self.rebuild_layers();
        Ok(())
    }

    /// Sets the base frequency of the first octave.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
        self.rebuild_layers();
    }

    /// Sets the frequency growth per octave.
    pub fn set_lacunarity(&mut self, lacunarity: f32) {
        self.lacunarity = lacunarity;
        self.rebuild_layers();
    }

    /// Sets the amplitude decay per octave.
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
        self.rebuild_layers();
    }

    /// Replaces the sampler list.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::NoSamplers`] if `samplers` is empty; the
    /// fractal is left unchanged.
    pub fn set_samplers(&mut self, samplers: Vec<N>) -> NoiseResult<()> {
        if samplers.is_empty() {
            return Err(NoiseError::NoSamplers);
        }
        self.samplers = samplers;
        self.rebuild_layers();
        Ok(())
    }

    /// Appends a sampler for the next octave without one of its own.
    pub fn push_sampler(&mut self, sampler: N) {
        self.samplers.push(sampler);
        self.rebuild_layers();
    }

    /// Sets the overall output scale.
    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    /// Sets the offset added to coordinates before any octave scaling.
    pub fn set_offset(&mut self, offset: Vec3) {
        self.offset = offset;
    }

    /// Reseeds every sampler.
    pub fn update_seed(&mut self, seed: i32) {
        for sampler in &mut self.samplers {
            sampler.update_seed(seed);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of octaves.
    #[must_use]
    pub const fn octaves(&self) -> usize {
        self.octaves
    }

    /// Base frequency.
    #[must_use]
    pub const fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Overall output scale.
    #[must_use]
    pub const fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Coordinate offset.
    #[must_use]
    pub const fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Frequency growth per octave.
    #[must_use]
    pub const fn lacunarity(&self) -> f32 {
        self.lacunarity
    }

    /// Amplitude decay per octave.
    #[must_use]
    pub const fn gain(&self) -> f32 {
        self.gain
    }

    /// Derived per-octave tables, one entry per octave.
    #[must_use]
    pub fn layers(&self) -> &[OctaveLayer] {
        &self.layers
    }

    /// The owned samplers.
    #[must_use]
    pub fn samplers(&self) -> &[N] {
        &self.samplers
    }

    /// Mutable access to the samplers. The list length cannot change
    /// through this slice, so the tables stay valid.
    pub fn samplers_mut(&mut self) -> &mut [N] {
        &mut self.samplers
    }

    /// Worst-case magnitude of a full sample.
    #[must_use]
    pub fn max_magnitude(&self) -> f32 {
        let weights: f32 = self.layers.iter().map(|layer| layer.amplitude.abs()).sum();
        weights * self.amplitude.abs()
    }
}

/// Fractals nest: a fractal can serve as another fractal's sampler. Its
/// output is bounded by [`FractalNoise::max_magnitude`].
impl<N: NoiseSource> NoiseSource for FractalNoise<N> {
    #[inline]
    fn sample_1d(&self, x: f32) -> f32 {
        FractalNoise::sample_1d(self, x)
    }

    #[inline]
    fn sample_2d(&self, x: f32, y: f32) -> f32 {
        FractalNoise::sample_2d(self, x, y)
    }

    #[inline]
    fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        FractalNoise::sample_3d(self, x, y, z)
    }

    fn update_seed(&mut self, seed: i32) {
        FractalNoise::update_seed(self, seed);
    }
}

/// Builder for [`FractalNoise`].
///
/// Defaults: 1 octave, frequency 1, amplitude 1, no offset, lacunarity 2,
/// gain 0.5.
#[derive(Debug)]
pub struct FractalNoiseBuilder<N> {
    samplers: Vec<N>,
    octaves: usize,
    frequency: f32,
    amplitude: f32,
    offset: Vec3,
    lacunarity: f32,
    gain: f32,
}

impl<N: NoiseSource> FractalNoiseBuilder<N> {
    fn new(samplers: Vec<N>) -> Self {
        Self {
            samplers,
            octaves: 1,
            frequency: 1.0,
            amplitude: 1.0,
            offset: Vec3::ZERO,
            lacunarity: FractalNoise::<N>::DEFAULT_LACUNARITY,
            gain: FractalNoise::<N>::DEFAULT_GAIN,
        }
    }

    /// Sets the octave count.
    #[must_use]
    pub fn octaves(mut self, octaves: usize) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the base frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the overall amplitude.
    #[must_use]
    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the coordinate offset.
    #[must_use]
    pub fn offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the frequency growth per octave.
    #[must_use]
    pub fn lacunarity(mut self, lacunarity: f32) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Sets the amplitude decay per octave.
    #[must_use]
    pub fn gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    /// Builds the fractal and its octave tables.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::NoSamplers`] for an empty sampler list,
    /// [`NoiseError::NoOctaves`] for zero octaves and
    /// [`NoiseError::TooManyOctaves`] above [`MAX_OCTAVES`].
    pub fn build(self) -> NoiseResult<FractalNoise<N>> {
        if self.samplers.is_empty() {
            return Err(NoiseError::NoSamplers);
        }
        check_octaves(self.octaves)?;

        let mut fractal = FractalNoise {
            samplers: self.samplers,
            octaves: self.octaves,
            frequency: self.frequency,
            amplitude: self.amplitude,
            offset: self.offset,
            lacunarity: self.lacunarity,
            gain: self.gain,
            layers: Vec::with_capacity(self.octaves),
        };
        fractal.rebuild_layers();
        Ok(fractal)
    }
}

//! The sampling capability shared by every noise variant.

/// A noise function that can be sampled in one to three dimensions.
///
/// Implementations are pure: the same coordinate and seed always produce
/// the same value. Outputs lie in `[-amplitude, amplitude]` for whatever
/// amplitude the implementation carries.
pub trait NoiseSource {
    /// Samples along a line.
    fn sample_1d(&self, x: f32) -> f32;

    /// Samples on a plane.
    fn sample_2d(&self, x: f32, y: f32) -> f32;

    /// Samples in a volume.
    fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32;

    /// Reseeds the noise. A no-op when the seed is unchanged.
    fn update_seed(&mut self, seed: i32);
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    #[inline]
    fn sample_1d(&self, x: f32) -> f32 {
        (**self).sample_1d(x)
    }

    #[inline]
    fn sample_2d(&self, x: f32, y: f32) -> f32 {
        (**self).sample_2d(x, y)
    }

    #[inline]
    fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        (**self).sample_3d(x, y, z)
    }

    fn update_seed(&mut self, seed: i32) {
        (**self).update_seed(seed);
    }
}

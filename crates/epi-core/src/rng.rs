//! Deterministic, explicitly threaded simulation RNG.
//!
//! # Determinism strategy
//!
//! A model owns exactly one `SimRng`, seeded from its configuration, and
//! passes `&mut SimRng` down into every call that samples.  Nothing in the
//! workspace touches thread-local or global randomness.  Two models built
//! from the same configuration therefore perform the same sequence of draws
//! and produce identical trajectories.
//!
//! Any change to *how many* values a helper consumes changes every downstream
//! draw, so the helpers below document their draw counts.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts; the model is the sole owner.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`.
    ///
    /// Always consumes exactly one `f64` draw, including for `p <= 0` and
    /// `p >= 1`, so that changing a probability parameter never shifts the
    /// rest of the random stream.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.r#gen::<f64>() < p
    }

    /// Sample from Normal(`mu`, `sigma`) using the Box-Muller transform.
    ///
    /// Consumes exactly two `f64` draws regardless of `sigma`; with
    /// `sigma == 0` the result is exactly `mu`.
    pub fn normal(&mut self, mu: f64, sigma: f64) -> f64 {
        // 1 - U(0,1] keeps u1 strictly positive so ln() is finite.
        let u1 = 1.0 - self.0.r#gen::<f64>();
        let u2 = self.0.r#gen::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        if sigma == 0.0 { mu } else { mu + sigma * z }
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` (without drawing) if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

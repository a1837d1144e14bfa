//! Random index source for password generation.

use rand::rngs::{SmallRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

/// Anything that can hand out a uniform index in `[0, n)`.
pub trait RandomSource {
    /// `n` must be non-zero.
    fn index(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn index(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// Which generator backs the password draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Engine {
    /// Thread-local CSPRNG.
    #[default]
    Secure,
    /// Small non-cryptographic PRNG, seeded once from the OS.
    Fast,
}

impl Engine {
    pub fn name(self) -> &'static str {
        match self {
            Engine::Secure => "ChaCha (thread rng)",
            Engine::Fast => "Xoshiro (small rng)",
        }
    }
}

/// An engine instance. Owned by the front end for its whole run.
pub enum Rand {
    Secure(ThreadRng),
    Fast(SmallRng),
}

impl Rand {
    pub fn new(engine: Engine) -> Self {
        match engine {
            Engine::Secure => Rand::Secure(rand::thread_rng()),
            Engine::Fast => Rand::Fast(SmallRng::from_entropy()),
        }
    }

    pub fn engine(&self) -> Engine {
        match self {
            Rand::Secure(_) => Engine::Secure,
            Rand::Fast(_) => Engine::Fast,
        }
    }
}

impl RngCore for Rand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            Rand::Secure(rng) => rng.next_u32(),
            Rand::Fast(rng) => rng.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            Rand::Secure(rng) => rng.next_u64(),
            Rand::Fast(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Rand::Secure(rng) => rng.fill_bytes(dest),
            Rand::Fast(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Rand::Secure(rng) => rng.try_fill_bytes(dest),
            Rand::Fast(rng) => rng.try_fill_bytes(dest),
        }
    }
}

/*!
 * Unbiased discrete uniform sampling via rejection over a linear congruential
 * generator's native output range.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

/// Base type for raw generator output and drawn samples in this module.
type Value = crate::Value;

/// Largest raw value the generator can hand out; the native range is
/// `[0, RAW_MAX]` inclusive.
pub const RAW_MAX: Value = 2_147_483_645;

/// Rejection runs longer than this indicate a broken precondition rather than
/// bad luck; for any valid `k` the chance of 1000 consecutive rejections is
/// below 2^-1000.
#[cfg(feature = "reject_guard")]
const MAX_CONSECUTIVE_REJECTS: u32 = 1000;

/// Lehmer / MINSTD generator: state advances as `seed = seed * 16807 mod
/// (2^31 - 1)`. State is never 0 or 2^31-1, so raw output is remapped by one
/// to start the native range at zero.
struct Minstd {
    seed: u32,
}

impl Minstd {
    fn new(seed: u32) -> Self {
        let mut rng = Self {
            seed: seed & 0x7FFF_FFFF,
        };
        // 0 and 2^31-1 are fixed points of the recurrence.
        if rng.seed == 0 || rng.seed == 2_147_483_647 {
            rng.seed = 1;
        }
        rng
    }

    /// Advances the state and returns a raw value in `[0, RAW_MAX]`.
    fn next_raw(&mut self) -> Value {
        const M: u32 = 2_147_483_647;
        const A: u64 = 16807;
        let product = self.seed as u64 * A;
        self.seed = ((product >> 31) + (product & M as u64)) as u32;
        if self.seed > M {
            self.seed -= M;
        }
        self.seed - 1
    }
}

/// Draws integers uniformly from `{1..k}` by rejecting raw values that fall
/// into the biased tail of the generator's native range.
pub struct RejectionSampler {
    rng: Minstd,
}

impl RejectionSampler {
    /// Creates a sampler seeded from the system clock (one distinct stream
    /// per process run, as the reference behavior).
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
            .unwrap_or(1);
        Self::with_seed(seed)
    }

    /// Creates a sampler with a fixed seed, reproducing the same sequence on
    /// every run. Seeds outside the valid generator state range are folded in.
    pub fn with_seed(seed: u32) -> Self {
        RejectionSampler { rng: Minstd::new(seed) }
    }
}

impl crate::Sampler for RejectionSampler {
    fn draw(&mut self, k: Value) -> Result<Value> {
        if k == 0 || k > RAW_MAX {
            bail!("Invalid target range: k={} not in 1..={}", k, RAW_MAX);
        }
        // Largest multiple of k not exceeding RAW_MAX; raw values at or above
        // it would make the residues 0..RAW_MAX%k slightly more likely.
        let limit = RAW_MAX - (RAW_MAX % k);

        #[cfg(feature = "reject_guard")]
        let mut rejects = 0u32;

        loop {
            let r = self.rng.next_raw();
            if r < limit {
                return Ok((r % k) + 1);
            }

            #[cfg(feature = "reject_guard")] {
                rejects += 1;
                if rejects >= MAX_CONSECUTIVE_REJECTS {
                    bail!("Rejection guard tripped: {} consecutive rejects for k={}", rejects, k);
                }
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///

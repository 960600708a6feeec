//! Password generation.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::charset::{self, Pool};
use super::{ConfigurationError, GenerationOptions};
use crate::rand::{sample, shuffle};

/// Generate a single password.
///
/// With `require_each` one character of every non-empty class is placed
/// first, the rest is drawn from the flat union of all pools, and the whole
/// sequence is shuffled. With `no_repeat` a draw already present in the
/// password is thrown away and redrawn.
pub fn generate<R: RngCore + CryptoRng + ?Sized>(
    opts: &GenerationOptions,
    rng: &mut R,
) -> Result<String, ConfigurationError> {
    let pools = charset::build_pools(opts)?;
    let alphabet = charset::union(&pools);

    if opts.no_repeat {
        let available = charset::distinct_size(&pools);
        if available < opts.length {
            return Err(ConfigurationError::NotEnoughUnique {
                needed: opts.length,
                available,
            });
        }
    }

    let mut chars = Vec::with_capacity(opts.length.max(pools.len()));
    if opts.require_each {
        seed_each_class(&pools, opts.no_repeat, &mut chars, rng);
    }

    while chars.len() < opts.length {
        let c = sample(rng, &alphabet);
        if opts.no_repeat && chars.contains(&c) {
            continue;
        }
        chars.push(c);
    }

    chars.truncate(opts.length);
    shuffle(rng, &mut chars);

    let password: String = chars.iter().collect();
    chars.zeroize();
    Ok(password)
}

/// One character per pool. With `no_repeat` a seed is only drawn from values
/// not seeded yet; a pool whose values are all taken is already represented
/// and gets no seed of its own.
#[inline]
fn seed_each_class<R: RngCore + CryptoRng + ?Sized>(
    pools: &[Pool],
    no_repeat: bool,
    chars: &mut Vec<char>,
    rng: &mut R,
) {
    for pool in pools {
        if !no_repeat {
            chars.push(sample(rng, &pool.chars));
            continue;
        }

        let free: Vec<char> = pool
            .chars
            .iter()
            .copied()
            .filter(|c| !chars.contains(c))
            .collect();
        if !free.is_empty() {
            chars.push(sample(rng, &free));
        }
    }
}

// src/core/static_random.rs

use std::cell::RefCell;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

thread_local! {
    // One generator per thread; workers drawing random candidates never
    // contend on a shared source.
    static RNG: RefCell<ChaCha8Rng> = RefCell::new(seeded());
}

fn seeded() -> ChaCha8Rng {
    let mut seed = [0u8; 32];
    rand::thread_rng().fill(&mut seed);
    ChaCha8Rng::from_seed(seed)
}

/// A uniformly distributed value in `[0, max)`.
pub fn below(max: u64) -> u64 {
    RNG.with(|rng| rng.borrow_mut().gen_range(0..max))
}

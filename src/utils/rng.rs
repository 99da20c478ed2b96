use rand::{prelude::*, rngs::StdRng};

/// Fresh rng for a player. Fixed seed in debug builds so local runs
/// reproduce; OS entropy otherwise.
#[cfg(debug_assertions)]
pub fn make_rng() -> StdRng {
    const SEED: u64 = 63;
    StdRng::seed_from_u64(SEED)
}

#[cfg(not(debug_assertions))]
pub fn make_rng() -> StdRng {
    use rand::rngs::SysRng;
    use rand::TryRng;
    let seed = SysRng::try_next_u64(&mut SysRng).unwrap();

    StdRng::seed_from_u64(seed)
}

/// Explicitly seeded rng, for deterministic decisions and tests.
pub fn make_seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

use crate::DIE_SIDES;
use rand::{thread_rng, Rng as _, SeedableRng as _};
use std::collections::VecDeque;

pub type Seed = u64;

/// Source of die faces for simulated rounds
///
/// `External` replays a fixed list of faces instead of rolling, intended for making battles in
/// tests predictable.
#[derive(Debug, Clone)]
pub enum Rng {
    Internal {
        initial_seed: Seed,
        rng: rand_pcg::Pcg32,
    },
    External {
        faces: VecDeque<u8>,
    },
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng {
    pub fn new() -> Self {
        Self::with_seed(thread_rng().gen())
    }

    pub fn with_seed(initial_seed: Seed) -> Self {
        Self::Internal {
            initial_seed,
            rng: rand_pcg::Pcg32::seed_from_u64(initial_seed),
        }
    }

    pub fn new_external(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: VecDeque<u8> = faces.into_iter().collect();
        debug_assert!(
            faces.iter().all(|face| (1..=DIE_SIDES).contains(face)),
            "external faces must be in 1-{DIE_SIDES}"
        );
        Self::External { faces }
    }

    pub fn initial_seed(&self) -> Option<Seed> {
        match self {
            Self::Internal { initial_seed, .. } => Some(*initial_seed),
            Self::External { .. } => None,
        }
    }

    pub fn roll_die(&mut self) -> u8 {
        match self {
            Self::Internal { rng, .. } => rng.gen_range(1..=DIE_SIDES),
            Self::External { faces } => faces
                .pop_front()
                .expect("Ran out of external die faces"),
        }
    }
}

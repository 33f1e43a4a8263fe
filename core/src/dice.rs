use crate::{Side, MAX_ATTACKER_DICE};
use arrayvec::ArrayVec;

/// Die faces thrown by one side in a round, highest first
pub type Roll = ArrayVec<u8, { MAX_ATTACKER_DICE as usize }>;

/// Troops lost by each side in a single round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Losses {
    pub attacker: u8,
    pub defender: u8,
}

pub(crate) fn sort_descending(roll: &mut Roll) {
    roll.sort_unstable_by(|a, b| b.cmp(a));
}

// returns which side loses a troop for a single pair of dice
pub(crate) fn pair_loser(attack: u8, defend: u8) -> Side {
    // ties go to the defender
    if attack > defend {
        Side::Defender
    } else {
        Side::Attacker
    }
}

// both rolls must already be sorted highest first
// extra dice on the longer side are ignored
pub(crate) fn compare(attack: &[u8], defend: &[u8]) -> Losses {
    debug_assert!(attack.windows(2).all(|w| w[0] >= w[1]));
    debug_assert!(defend.windows(2).all(|w| w[0] >= w[1]));

    let mut losses = Losses::default();
    for (&a, &d) in attack.iter().zip(defend) {
        match pair_loser(a, d) {
            Side::Attacker => losses.attacker += 1,
            Side::Defender => losses.defender += 1,
        }
    }
    losses
}

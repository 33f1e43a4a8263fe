#[cfg_attr(not(feature = "logging"), path = "logging_noop.rs")]
#[macro_use]
mod logging;
mod metrics;

mod battle;
mod dice;
mod display;
mod outcome;
mod resolver;
mod rng;
mod scan;

pub use battle::{resolve_round, simulate_battle, Battle, BattleReport, Event, Round};
pub use dice::{Losses, Roll};
pub use metrics::Metrics;
pub use outcome::{outcome_distribution, Distribution, Shape};
pub use resolver::{shared_metrics, win_probability, Resolver};
pub use rng::{Rng, Seed};
pub use scan::{scan, Scan, ScanEntry};

/*****************************************************************************************
 * Error Types
 */

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    NegativeTroops { side: Side, count: i64 },
    TooManyTroops { side: Side, count: i64 },
    InvalidDice { attacker_dice: u8, defender_dice: u8 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NegativeTroops { side, count } => {
                write!(f, "{side} troop count can't be negative, got {count}")
            }
            Error::TooManyTroops { side, count } => {
                write!(f, "{side} troop count {count} is too large")
            }
            Error::InvalidDice {
                attacker_dice,
                defender_dice,
            } => {
                write!(
                    f,
                    "Can't roll {attacker_dice} attacking dice against {defender_dice} defending \
                     dice, expected 1-{MAX_ATTACKER_DICE} against 1-{MAX_DEFENDER_DICE}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/*****************************************************************************************
 * Common Types / Constants
 */

pub const DIE_SIDES: u8 = 6;
pub const MAX_ATTACKER_DICE: u8 = 3;
pub const MAX_DEFENDER_DICE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Attacker,
    Defender,
}

// validates a troop count coming from outside the crate
pub(crate) fn troops(side: Side, count: i64) -> Result<u32> {
    if count < 0 {
        return Err(Error::NegativeTroops { side, count });
    }
    u32::try_from(count).map_err(|_| Error::TooManyTroops { side, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Side::Attacker, 0 => Ok(0))]
    #[test_case(Side::Defender, 12 => Ok(12))]
    #[test_case(Side::Attacker, -1 => Err(Error::NegativeTroops { side: Side::Attacker, count: -1 }))]
    #[test_case(Side::Defender, -30 => Err(Error::NegativeTroops { side: Side::Defender, count: -30 }))]
    #[test_case(Side::Attacker, i64::MAX => Err(Error::TooManyTroops { side: Side::Attacker, count: i64::MAX }))]
    fn troops(side: Side, count: i64) -> Result<u32> {
        super::troops(side, count)
    }

    #[test]
    fn error_messages() {
        let err = Error::NegativeTroops {
            side: Side::Defender,
            count: -2,
        };
        pretty_assertions::assert_eq!(
            err.to_string(),
            "Defender troop count can't be negative, got -2"
        );

        let err = Error::InvalidDice {
            attacker_dice: 4,
            defender_dice: 2,
        };
        pretty_assertions::assert_eq!(
            err.to_string(),
            "Can't roll 4 attacking dice against 2 defending dice, expected 1-3 against 1-2"
        );
    }
}

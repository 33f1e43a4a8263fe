use crate::dice::{compare, pair_loser, sort_descending, Losses, Roll};
use crate::outcome::Shape;
use crate::rng::Rng;
use crate::{troops, Result, Side};

/// The dice thrown in a single round and what they cost each side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub attack_roll: Roll,
    pub defend_roll: Roll,
    pub losses: Losses,
}

impl Round {
    /// Each compared pair of dice, highest first, along with the side that lost a troop to it
    pub fn comparisons(&self) -> impl Iterator<Item = (u8, u8, Side)> + '_ {
        self.attack_roll
            .iter()
            .zip(&self.defend_roll)
            .map(|(&attack, &defend)| (attack, defend, pair_loser(attack, defend)))
    }
}

/// Throws the given number of dice for each side and compares them
pub fn resolve_round(attacker_dice: u8, defender_dice: u8, rng: &mut Rng) -> Result<Round> {
    let shape = Shape::new(attacker_dice, defender_dice)?;
    Ok(roll(shape, rng))
}

fn roll(shape: Shape, rng: &mut Rng) -> Round {
    let mut attack_roll: Roll = (0..shape.attacker_dice()).map(|_| rng.roll_die()).collect();
    let mut defend_roll: Roll = (0..shape.defender_dice()).map(|_| rng.roll_die()).collect();
    sort_descending(&mut attack_roll);
    sort_descending(&mut defend_roll);

    let losses = compare(&attack_roll, &defend_roll);
    Round {
        attack_roll,
        defend_roll,
        losses,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Fight { attackers: u32, defenders: u32 },
    Round(Round),
    Over { winner: Side, remaining: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub winner: Side,
    /// Attacking troops left standing, always 0 when the defender wins
    pub remaining: u32,
    pub rounds: usize,
    pub events: Vec<Event>,
}

/// A fight over a single territory that keeps going until one side runs out of troops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battle {
    attackers: u32,
    defenders: u32,
}

impl Battle {
    pub fn new(attackers: i64, defenders: i64) -> Result<Self> {
        Ok(Self {
            attackers: troops(Side::Attacker, attackers)?,
            defenders: troops(Side::Defender, defenders)?,
        })
    }

    pub fn attackers(&self) -> u32 {
        self.attackers
    }

    pub fn defenders(&self) -> u32 {
        self.defenders
    }

    pub fn run(mut self, rng: &mut Rng) -> BattleReport {
        let _scope = scope!("battle {} v {}", self.attackers, self.defenders);

        let mut events = Vec::new();
        let mut rounds = 0;

        // every round costs at least one troop so this always terminates
        while let Some(shape) = Shape::for_troops(self.attackers, self.defenders) {
            events.push(Event::Fight {
                attackers: self.attackers,
                defenders: self.defenders,
            });

            let round = roll(shape, rng);
            trace!("{round}");

            self.attackers -= u32::from(round.losses.attacker);
            self.defenders -= u32::from(round.losses.defender);
            rounds += 1;
            events.push(Event::Round(round));
        }

        let (winner, remaining) = if self.attackers > 0 && self.defenders == 0 {
            (Side::Attacker, self.attackers)
        } else {
            (Side::Defender, 0)
        };
        events.push(Event::Over { winner, remaining });

        trace!("{winner} wins after {rounds} rounds");

        BattleReport {
            winner,
            remaining,
            rounds,
            events,
        }
    }
}

/// Simulates one battle and returns how many attacking troops survive it
pub fn simulate_battle(attackers: i64, defenders: i64, rng: &mut Rng) -> Result<u32> {
    Ok(Battle::new(attackers, defenders)?.run(rng).remaining)
}

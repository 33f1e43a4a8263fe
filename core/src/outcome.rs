use crate::dice::{compare, sort_descending, Roll};
use crate::{Error, Result, DIE_SIDES, MAX_ATTACKER_DICE, MAX_DEFENDER_DICE};
use arrayvec::ArrayVec;
use once_cell::sync::Lazy;

/// How many dice each side throws in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    ThreeVsTwo,
    TwoVsTwo,
    ThreeVsOne,
    TwoVsOne,
    OneVsTwo,
    OneVsOne,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::ThreeVsTwo,
        Shape::TwoVsTwo,
        Shape::ThreeVsOne,
        Shape::TwoVsOne,
        Shape::OneVsTwo,
        Shape::OneVsOne,
    ];

    pub fn new(attacker_dice: u8, defender_dice: u8) -> Result<Self> {
        match (attacker_dice, defender_dice) {
            (3, 2) => Ok(Shape::ThreeVsTwo),
            (2, 2) => Ok(Shape::TwoVsTwo),
            (3, 1) => Ok(Shape::ThreeVsOne),
            (2, 1) => Ok(Shape::TwoVsOne),
            (1, 2) => Ok(Shape::OneVsTwo),
            (1, 1) => Ok(Shape::OneVsOne),
            _ => Err(Error::InvalidDice {
                attacker_dice,
                defender_dice,
            }),
        }
    }

    /// The shape rolled when both sides throw as many dice as they're allowed
    ///
    /// Returns None once either side has no troops left
    pub fn for_troops(attackers: u32, defenders: u32) -> Option<Self> {
        if attackers == 0 || defenders == 0 {
            return None;
        }
        let attacker_dice = attackers.min(u32::from(MAX_ATTACKER_DICE)) as u8;
        let defender_dice = defenders.min(u32::from(MAX_DEFENDER_DICE)) as u8;
        Shape::new(attacker_dice, defender_dice).ok()
    }

    pub const fn attacker_dice(self) -> u8 {
        match self {
            Shape::ThreeVsTwo | Shape::ThreeVsOne => 3,
            Shape::TwoVsTwo | Shape::TwoVsOne => 2,
            Shape::OneVsTwo | Shape::OneVsOne => 1,
        }
    }

    pub const fn defender_dice(self) -> u8 {
        match self {
            Shape::ThreeVsTwo | Shape::TwoVsTwo | Shape::OneVsTwo => 2,
            Shape::ThreeVsOne | Shape::TwoVsOne | Shape::OneVsOne => 1,
        }
    }

    /// Number of dice compared, which is also the number of troops lost in total
    pub const fn pairs(self) -> u8 {
        match self {
            Shape::ThreeVsTwo | Shape::TwoVsTwo => 2,
            _ => 1,
        }
    }

    const fn index(self) -> usize {
        match self {
            Shape::ThreeVsTwo => 0,
            Shape::TwoVsTwo => 1,
            Shape::ThreeVsOne => 2,
            Shape::TwoVsOne => 3,
            Shape::OneVsTwo => 4,
            Shape::OneVsOne => 5,
        }
    }
}

/// Chances of the attacker losing 0, 1 (or 2) troops in a round of a given shape
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    shape: Shape,
    total: u32,
    tallies: ArrayVec<u32, 3>,
    probabilities: ArrayVec<f64, 3>,
}

impl Distribution {
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of equally likely face combinations that were enumerated
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Probabilities in ascending order of attacker losses
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn probability(&self, attacker_losses: u8) -> f64 {
        self.probabilities
            .get(attacker_losses as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// The exact probability as (favorable combinations, total combinations)
    pub fn fraction(&self, attacker_losses: u8) -> (u32, u32) {
        let favorable = self
            .tallies
            .get(attacker_losses as usize)
            .copied()
            .unwrap_or(0);
        (favorable, self.total)
    }
}

static TABLES: Lazy<[Distribution; 6]> = Lazy::new(|| Shape::ALL.map(enumerate));

/// Outcome distribution of a single round, enumerated once per process
pub fn outcome_distribution(shape: Shape) -> &'static Distribution {
    &TABLES[shape.index()]
}

// walks every combination of faces for the shape and tallies the attacker's losses
fn enumerate(shape: Shape) -> Distribution {
    let sides = u32::from(DIE_SIDES);
    let attacker_dice = shape.attacker_dice();
    let defender_dice = shape.defender_dice();
    let total = sides.pow(u32::from(attacker_dice + defender_dice));

    let mut tallies: ArrayVec<u32, 3> = (0..=shape.pairs()).map(|_| 0).collect();

    // each combination is a base-6 number with one digit per die
    for combination in 0..total {
        let mut digits = combination;
        let mut next_face = || {
            let face = (digits % sides) as u8 + 1;
            digits /= sides;
            face
        };

        let mut attack: Roll = (0..attacker_dice).map(|_| next_face()).collect();
        let mut defend: Roll = (0..defender_dice).map(|_| next_face()).collect();
        sort_descending(&mut attack);
        sort_descending(&mut defend);

        let losses = compare(&attack, &defend);
        tallies[losses.attacker as usize] += 1;
    }

    trace!("enumerated {shape}: {tallies:?} of {total}");

    let probabilities = tallies
        .iter()
        .map(|&tally| f64::from(tally) / f64::from(total))
        .collect();

    Distribution {
        shape,
        total,
        tallies,
        probabilities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn assert_eq<T, U>(expected: T) -> impl Fn(U)
    where
        T: std::fmt::Debug,
        U: PartialEq<T> + std::fmt::Debug,
    {
        move |actual| pretty_assertions::assert_eq!(actual, expected)
    }

    #[test_case(Shape::ThreeVsTwo => using assert_eq((7776u32, vec![2890u32, 2611, 2275])))]
    #[test_case(Shape::TwoVsTwo => using assert_eq((1296u32, vec![295u32, 420, 581])))]
    #[test_case(Shape::ThreeVsOne => using assert_eq((1296u32, vec![855u32, 441])))]
    #[test_case(Shape::TwoVsOne => using assert_eq((216u32, vec![125u32, 91])))]
    #[test_case(Shape::OneVsTwo => using assert_eq((216u32, vec![55u32, 161])))]
    #[test_case(Shape::OneVsOne => using assert_eq((36u32, vec![15u32, 21])))]
    fn exact_tallies(shape: Shape) -> (u32, Vec<u32>) {
        let dist = outcome_distribution(shape);
        let tallies = (0..=shape.pairs()).map(|l| dist.fraction(l).0).collect();
        (dist.total(), tallies)
    }

    #[test]
    fn distributions_sum_to_one() {
        for shape in Shape::ALL {
            let dist = outcome_distribution(shape);
            pretty_assertions::assert_eq!(dist.shape(), shape);
            pretty_assertions::assert_eq!(dist.probabilities().len(), shape.pairs() as usize + 1);

            let sum: f64 = dist.probabilities().iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{shape:?} sums to {sum}");
            assert!(dist.probabilities().iter().all(|p| (0.0..=1.0).contains(p)));
        }
    }

    #[test]
    fn tables_are_computed_once() {
        let first = outcome_distribution(Shape::ThreeVsTwo) as *const Distribution;
        let second = outcome_distribution(Shape::ThreeVsTwo) as *const Distribution;
        assert_eq!(first, second);
    }

    #[test]
    fn losses_outside_the_shape_have_no_probability() {
        let dist = outcome_distribution(Shape::OneVsOne);
        pretty_assertions::assert_eq!(dist.probability(2), 0.0);
        pretty_assertions::assert_eq!(dist.fraction(2), (0, 36));
    }

    #[test_case(3, 2 => Ok(Shape::ThreeVsTwo))]
    #[test_case(1, 2 => Ok(Shape::OneVsTwo))]
    #[test_case(2, 1 => Ok(Shape::TwoVsOne))]
    #[test_case(0, 1 => Err(Error::InvalidDice { attacker_dice: 0, defender_dice: 1 }))]
    #[test_case(4, 2 => Err(Error::InvalidDice { attacker_dice: 4, defender_dice: 2 }))]
    #[test_case(3, 3 => Err(Error::InvalidDice { attacker_dice: 3, defender_dice: 3 }))]
    fn new(attacker_dice: u8, defender_dice: u8) -> Result<Shape> {
        Shape::new(attacker_dice, defender_dice)
    }

    #[test_case(5, 5 => Some(Shape::ThreeVsTwo))]
    #[test_case(2, 7 => Some(Shape::TwoVsTwo))]
    #[test_case(1, 7 => Some(Shape::OneVsTwo))]
    #[test_case(9, 1 => Some(Shape::ThreeVsOne))]
    #[test_case(2, 1 => Some(Shape::TwoVsOne))]
    #[test_case(1, 1 => Some(Shape::OneVsOne))]
    #[test_case(0, 3 => None)]
    #[test_case(3, 0 => None)]
    fn for_troops(attackers: u32, defenders: u32) -> Option<Shape> {
        Shape::for_troops(attackers, defenders)
    }

    #[test]
    fn shape_dice_counts_round_trip() {
        for shape in Shape::ALL {
            let rebuilt = Shape::new(shape.attacker_dice(), shape.defender_dice());
            pretty_assertions::assert_eq!(rebuilt, Ok(shape));
            pretty_assertions::assert_eq!(
                shape.pairs(),
                shape.attacker_dice().min(shape.defender_dice())
            );
        }
    }
}

use crate::resolver::{with_shared, Resolver};
use crate::{troops, Result, Side};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanEntry {
    pub attackers: u32,
    pub defenders: u32,
    pub probability: f64,
}

/// Win probabilities for every pair from (1, 1) up to the given troop counts
///
/// Entries are ordered by attackers first, then defenders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scan {
    pub max_attackers: u32,
    pub max_defenders: u32,
    pub entries: Vec<ScanEntry>,
}

impl Scan {
    pub fn with_resolver(resolver: &mut Resolver, max_attackers: u32, max_defenders: u32) -> Self {
        // one fill covers the whole rectangle, the rest are cache hits
        resolver.win_probability(max_attackers, max_defenders);

        let mut entries = Vec::with_capacity(max_attackers as usize * max_defenders as usize);
        for attackers in 1..=max_attackers {
            for defenders in 1..=max_defenders {
                entries.push(ScanEntry {
                    attackers,
                    defenders,
                    probability: resolver.win_probability(attackers, defenders),
                });
            }
        }

        Self {
            max_attackers,
            max_defenders,
            entries,
        }
    }

    pub fn get(&self, attackers: u32, defenders: u32) -> Option<f64> {
        if attackers == 0 || defenders == 0 {
            return None;
        }
        if attackers > self.max_attackers || defenders > self.max_defenders {
            return None;
        }
        let index = (attackers - 1) as usize * self.max_defenders as usize + (defenders - 1) as usize;
        self.entries.get(index).map(|entry| entry.probability)
    }
}

/// Tabulates win probabilities using the process-wide cache
pub fn scan(max_attackers: i64, max_defenders: i64) -> Result<Scan> {
    let max_attackers = troops(Side::Attacker, max_attackers)?;
    let max_defenders = troops(Side::Defender, max_defenders)?;
    Ok(with_shared(|resolver| {
        Scan::with_resolver(resolver, max_attackers, max_defenders)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{win_probability, Error};
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_are_attacker_major() {
        let scan = scan(3, 2).unwrap();
        let pairs: Vec<_> = scan
            .entries
            .iter()
            .map(|entry| (entry.attackers, entry.defenders))
            .collect();
        assert_eq!(pairs, vec![(1, 1), (1, 2), (2, 1), (2, 2), (3, 1), (3, 2)]);
    }

    #[test]
    fn entries_match_single_queries() {
        let scan = scan(6, 4).unwrap();
        for entry in &scan.entries {
            let expected =
                win_probability(i64::from(entry.attackers), i64::from(entry.defenders)).unwrap();
            assert_eq!(entry.probability.to_bits(), expected.to_bits());
            assert_eq!(scan.get(entry.attackers, entry.defenders), Some(entry.probability));
        }
    }

    #[test]
    fn get_outside_the_table() {
        let scan = Scan::with_resolver(&mut Resolver::new(), 2, 2);
        assert_eq!(scan.get(0, 1), None);
        assert_eq!(scan.get(3, 1), None);
        assert_eq!(scan.get(1, 3), None);
    }

    #[test]
    fn empty_ranges() {
        assert!(scan(0, 5).unwrap().entries.is_empty());
        assert!(scan(5, 0).unwrap().entries.is_empty());
    }

    #[test]
    fn negative_ranges_are_rejected() {
        assert_eq!(
            scan(-2, 5),
            Err(Error::NegativeTroops {
                side: Side::Attacker,
                count: -2
            })
        );
    }
}

use crate::metrics::Metrics;
use crate::outcome::{outcome_distribution, Shape};
use crate::{troops, Result, Side};
use std::cell::RefCell;
use std::collections::HashMap;

const TOLERANCE: f64 = 1e-9;

/// Win probabilities for (attackers, defenders) states, cached as they're computed
///
/// Every state is a pure function of its troop counts so cached entries never go stale. The cache
/// is filled bottom-up, so arbitrarily large troop counts don't grow the stack.
#[derive(Debug, Clone)]
pub struct Resolver {
    cache: HashMap<(u32, u32), f64>,
    metrics: Metrics,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            metrics: Metrics::new("resolver"),
        }
    }

    /// Probability that `attackers` eventually destroy every one of `defenders`
    ///
    /// Both sides always roll as many dice as they're allowed and the attack only stops once
    /// either side has no troops left. With no attackers the defender always holds, even when
    /// there are no defenders either.
    pub fn win_probability(&mut self, attackers: u32, defenders: u32) -> f64 {
        // finished battles need no table
        if attackers == 0 {
            return 0.0;
        }
        if defenders == 0 {
            return 1.0;
        }

        if let Some(probability) = self.cached(attackers, defenders) {
            self.metrics.inc_cache_hits();
            return probability;
        }

        self.fill(attackers, defenders);
        self.lookup(attackers, defenders)
    }

    /// The cached probability for the state, without computing anything
    pub fn cached(&self, attackers: u32, defenders: u32) -> Option<f64> {
        self.cache.get(&(attackers, defenders)).copied()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    // computes every missing state in 0..=attackers x 0..=defenders
    //
    // each round only ever removes troops, so every state a round can lead to has already been
    // visited by the time the loops get to it
    fn fill(&mut self, attackers: u32, defenders: u32) {
        let _scope = scope!("fill {attackers} v {defenders}");
        self.metrics.inc_fills(attackers, defenders);

        for d in 0..=defenders {
            for a in 0..=attackers {
                if self.cache.contains_key(&(a, d)) {
                    continue;
                }

                let probability = self.compute(a, d);
                debug_assert!(
                    (-TOLERANCE..=1.0 + TOLERANCE).contains(&probability),
                    "P({a}, {d}) = {probability} is not a probability"
                );
                // summing the table can round a hair past 1.0
                let probability = probability.clamp(0.0, 1.0);
                trace!("P({a}, {d}) = {probability}");

                self.metrics.inc_states_computed();
                self.cache.insert((a, d), probability);
            }
        }
    }

    fn compute(&self, attackers: u32, defenders: u32) -> f64 {
        let shape = match Shape::for_troops(attackers, defenders) {
            Some(shape) => shape,
            None if attackers == 0 => return 0.0,
            None => return 1.0,
        };

        // a round of this shape removes exactly `pairs` troops split between both sides
        let pairs = shape.pairs();
        let distribution = outcome_distribution(shape);
        (0..=pairs)
            .map(|attacker_losses| {
                let defender_losses = pairs - attacker_losses;
                let next = self.lookup(
                    attackers - u32::from(attacker_losses),
                    defenders - u32::from(defender_losses),
                );
                distribution.probability(attacker_losses) * next
            })
            .sum()
    }

    fn lookup(&self, attackers: u32, defenders: u32) -> f64 {
        self.cached(attackers, defenders)
            .expect("state should be filled before it's looked up")
    }
}

thread_local! {
    static SHARED: RefCell<Resolver> = RefCell::new(Resolver::new());
}

// runs `f` against the resolver whose cache lives for the rest of the process
pub(crate) fn with_shared<T>(f: impl FnOnce(&mut Resolver) -> T) -> T {
    SHARED.with(|resolver| f(&mut resolver.borrow_mut()))
}

/// Probability that the attacker captures the territory, see [`Resolver::win_probability`]
///
/// Results are cached for the lifetime of the process.
pub fn win_probability(attackers: i64, defenders: i64) -> Result<f64> {
    let attackers = troops(Side::Attacker, attackers)?;
    let defenders = troops(Side::Defender, defenders)?;
    Ok(with_shared(|resolver| {
        resolver.win_probability(attackers, defenders)
    }))
}

/// Snapshot of the work done by the process-wide resolver so far
pub fn shared_metrics() -> Metrics {
    with_shared(|resolver| resolver.metrics().clone())
}

#![allow(dead_code)]

pub use inner::*;

#[cfg(feature = "metrics")]
mod inner {
    /// Counters describing how much work a resolver has done
    #[derive(Debug, Default, Clone)]
    pub struct Metrics {
        name: &'static str,
        number_of_fills: usize,
        number_of_states_computed: usize,
        number_of_cache_hits: usize,
        largest_fill: (u32, u32),
    }

    impl Metrics {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                ..Default::default()
            }
        }

        pub fn inc_fills(&mut self, attackers: u32, defenders: u32) {
            self.number_of_fills += 1;
            let (max_a, max_d) = self.largest_fill;
            self.largest_fill = (max_a.max(attackers), max_d.max(defenders));
        }

        pub fn inc_states_computed(&mut self) {
            self.number_of_states_computed += 1;
        }

        pub fn inc_cache_hits(&mut self) {
            self.number_of_cache_hits += 1;
        }

        pub fn print_report(&self) {
            eprintln!("{:#?}", self);
        }
    }
}

#[cfg(not(feature = "metrics"))]
mod inner {
    #[derive(Debug, Default, Clone)]
    pub struct Metrics;

    impl Metrics {
        pub fn new(_name: &'static str) -> Self {
            Self
        }

        pub fn inc_fills(&mut self, _attackers: u32, _defenders: u32) {}

        pub fn inc_states_computed(&mut self) {}

        pub fn inc_cache_hits(&mut self) {}

        pub fn print_report(&self) {}
    }
}

// Display impls for the shapes, tables and battle events
use crate::{Distribution, Event, Losses, Round, Scan, ScanEntry, Shape, Side};
use std::fmt::Display;

struct DisplayList<T>(std::cell::RefCell<T>);

impl<T> DisplayList<T> {
    fn new(inner: T) -> Self {
        Self(std::cell::RefCell::new(inner))
    }
}

impl<T> Display for DisplayList<T>
where
    T: Iterator,
    T::Item: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::ops::DerefMut;

        let mut iter = self.0.borrow_mut();

        write!(f, "[")?;
        if let Some(item) = iter.next() {
            write!(f, "{item}")?;
            for item in iter.deref_mut() {
                write!(f, " {item}")?;
            }
        }
        write!(f, "]")
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Attacker => write!(f, "Attacker"),
            Side::Defender => write!(f, "Defender"),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.attacker_dice(), self.defender_dice())
    }
}

impl Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = self.shape();
        write!(
            f,
            "Probabilities for {} attacking {}:",
            shape.attacker_dice(),
            shape.defender_dice()
        )?;
        for losses in 0..=shape.pairs() {
            let (favorable, total) = self.fraction(losses);
            write!(
                f,
                "\n  Attacker loses {losses}: ({favorable}/{total}) = {:.6}",
                self.probability(losses)
            )?;
        }
        Ok(())
    }
}

impl Display for Losses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attacker:{} defender:{}", self.attacker, self.defender)
    }
}

impl Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round attack:{} defend:{} lost({})",
            DisplayList::new(self.attack_roll.iter()),
            DisplayList::new(self.defend_roll.iter()),
            self.losses
        )
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Fight {
                attackers,
                defenders,
            } => write!(f, "Fight({attackers} v {defenders})"),
            Event::Round(round) => write!(f, "{round}"),
            Event::Over { winner, remaining } => {
                write!(f, "Over(winner:{winner} remaining:{remaining})")
            }
        }
    }
}

impl Display for ScanEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Prob({}, {}) = {:.6e}",
            self.attackers, self.defenders, self.probability
        )
    }
}

impl Display for Scan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = self.entries.iter();
        if let Some(entry) = entries.next() {
            write!(f, "{entry}")?;
        }
        for entry in entries {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}

// Nested trace output, written to stderr so it never mixes with results on stdout

use std::fmt::Arguments;
use std::sync::atomic::{AtomicUsize, Ordering::SeqCst};
use std::time::{Duration, Instant};

const DEPTH_WIDTH: usize = 2;

static DEPTH: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn emit(args: Arguments) {
    let depth = DEPTH.load(SeqCst);
    eprintln!("{:width$}{args}", "", width = depth * DEPTH_WIDTH);
}

/// Nests every trace line emitted while it's alive one level deeper
///
/// Dropping the scope closes the level again and reports how long it was open for.
pub(crate) struct Scope {
    started: Instant,
}

impl Scope {
    pub(crate) fn enter(args: Arguments) -> Self {
        emit(args);
        DEPTH.fetch_add(1, SeqCst);
        Self {
            started: Instant::now(),
        }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        // never underflows, so the closure always returns Some
        let _ = DEPTH.fetch_update(SeqCst, SeqCst, |x| Some(x.saturating_sub(1)));
        emit(format_args!("done in {:?}", self.elapsed()));
    }
}

macro_rules! trace {
    ($($tt:tt)*) => {
        $crate::logging::emit(format_args!($($tt)*))
    };
}

macro_rules! scope {
    ($($tt:tt)*) => {
        $crate::logging::Scope::enter(format_args!($($tt)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_scopes_time_themselves() {
        let outer = scope!("outer");
        let inner = scope!("inner {}", 1);
        trace!("two levels deep");
        assert!(inner.elapsed() <= outer.elapsed());
    }
}

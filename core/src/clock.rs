use web_time::{Duration, Instant};

use crate::*;

const TICK: Duration = Duration::from_secs(1);

/// Cancellable periodic tick source driving [`GameEngine::on_tick`].
///
/// The embedding arms the clock when a round starts, disarms it when one is
/// abandoned, and polls it from whatever scheduling primitive it has (an
/// interval callback, a frame loop). Each poll converts whole elapsed
/// seconds into engine ticks. The clock disarms itself the moment the round
/// stops running, and a poll that races a round transition discards the
/// pending ticks instead of applying them, so imperfect cancellation timing
/// never corrupts state.
#[derive(Copy, Clone, Debug, Default)]
pub struct TickClock {
    /// Instant the next pending tick is measured from, `None` when disarmed
    armed: Option<Instant>,
}

impl TickClock {
    pub const fn new() -> Self {
        Self { armed: None }
    }

    pub fn arm(&mut self) {
        self.arm_at(Instant::now());
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    pub const fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn poll(&mut self, engine: &mut GameEngine) -> TickOutcome {
        self.poll_at(engine, Instant::now())
    }

    fn arm_at(&mut self, now: Instant) {
        self.armed = Some(now);
    }

    fn poll_at(&mut self, engine: &mut GameEngine, now: Instant) -> TickOutcome {
        let Some(mut last) = self.armed else {
            return TickOutcome::NoChange;
        };

        if !engine.state().is_running() {
            // the round ended between polls; drop the pending ticks
            self.disarm();
            return TickOutcome::NoChange;
        }

        let mut outcome = TickOutcome::NoChange;
        while now.duration_since(last) >= TICK {
            last += TICK;
            outcome = engine.on_tick();
            if !engine.state().is_running() {
                self.disarm();
                return outcome;
            }
        }
        self.armed = Some(last);
        outcome
    }
}

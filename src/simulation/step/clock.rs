//! Fixed-rate tick clock - decouples simulation rate from the host frame rate.
//!
//! The host reports elapsed wall time, the clock banks it and pays out whole
//! ticks. A cap on ticks per call keeps a stalled tab from spiralling.

use super::WorldCore;

#[derive(Clone, Debug, PartialEq)]
pub struct TickClock {
    tick_ms: f64,
    max_ticks: u32,
    accumulated_ms: f64,
}

impl TickClock {
    pub fn new(tick_ms: f64, max_ticks: u32) -> Self {
        Self {
            tick_ms,
            max_ticks: max_ticks.max(1),
            accumulated_ms: 0.0,
        }
    }

    pub fn tick_ms(&self) -> f64 { self.tick_ms }

    pub fn max_ticks(&self) -> u32 { self.max_ticks }

    /// Banked time not yet paid out as a tick
    pub fn accumulated_ms(&self) -> f64 { self.accumulated_ms }

    pub(super) fn set_tick_ms(&mut self, tick_ms: f64) {
        self.tick_ms = tick_ms;
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }

    /// Bank elapsed time. Negative or non-finite input is ignored.
    pub fn accumulate(&mut self, elapsed_ms: f64) {
        if !elapsed_ms.is_finite() || elapsed_ms < 0.0 {
            log::warn!("ignoring invalid elapsed time {} ms", elapsed_ms);
            return;
        }
        self.accumulated_ms += elapsed_ms;
    }

    /// Take one tick's worth of time if available
    pub fn try_consume(&mut self) -> bool {
        if self.accumulated_ms >= self.tick_ms {
            self.accumulated_ms -= self.tick_ms;
            true
        } else {
            false
        }
    }

    /// Drop whole ticks that did not fit under the cap, keep the fractional rest
    fn drop_backlog(&mut self) -> u64 {
        let dropped = (self.accumulated_ms / self.tick_ms).floor();
        self.accumulated_ms -= dropped * self.tick_ms;
        dropped as u64
    }
}

pub(super) fn advance(world: &mut WorldCore, elapsed_ms: f64) -> u32 {
    world.clock.accumulate(elapsed_ms);

    let mut ticks = 0u32;
    while ticks < world.clock.max_ticks && world.clock.try_consume() {
        world.step();
        ticks += 1;
    }

    if ticks == world.clock.max_ticks {
        let dropped = world.clock.drop_backlog();
        if dropped > 0 {
            log::warn!("tick backlog: dropped {} tick(s) after running {}", dropped, ticks);
        }
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pays_out_whole_ticks_and_keeps_remainder() {
        let mut clock = TickClock::new(10.0, 8);
        clock.accumulate(25.0);
        assert!(clock.try_consume());
        assert!(clock.try_consume());
        assert!(!clock.try_consume());
        assert_eq!(clock.accumulated_ms(), 5.0);
    }

    #[test]
    fn ignores_negative_and_nan() {
        let mut clock = TickClock::new(10.0, 8);
        clock.accumulate(-5.0);
        clock.accumulate(f64::NAN);
        assert_eq!(clock.accumulated_ms(), 0.0);
    }

    #[test]
    fn backlog_past_cap_is_dropped() {
        let mut clock = TickClock::new(10.0, 2);
        clock.accumulate(55.0);
        assert!(clock.try_consume());
        assert!(clock.try_consume());
        assert_eq!(clock.drop_backlog(), 3);
        assert_eq!(clock.accumulated_ms(), 5.0);
    }
}

//! Frame-driven timeline of short-lived entities
//!
//! Each entity counts down once per tick and, when its countdown reaches zero,
//! hands back an explicit action value for the owner to execute. Actions are
//! plain data (usually an enum) instead of stored closures, so pending work can
//! be inspected, compared and tested.

use tracing::trace;

/// A scheduled action with its remaining lifetime in ticks
#[derive(Debug, Clone, PartialEq)]
pub struct TimedEntity<A> {
    /// Ticks left before the action fires
    pub ticks_remaining: u32,
    /// Continuation executed by the owner when the countdown expires
    pub action: A,
}

/// Ordered list of timed entities processed once per frame
#[derive(Debug, Clone)]
pub struct Timeline<A> {
    entities: Vec<TimedEntity<A>>,
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Timeline<A> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Schedule `action` to fire after `delay` ticks. A delay of zero is
    /// treated as one: nothing fires in the tick that scheduled it.
    pub fn schedule(&mut self, delay: u32, action: A) {
        self.entities.push(TimedEntity {
            ticks_remaining: delay.max(1),
            action,
        });
    }

    /// Advance every entity by one tick and return the expired actions in
    /// the order they were scheduled.
    pub fn tick(&mut self) -> Vec<A> {
        let mut expired = Vec::new();
        let mut pending = Vec::with_capacity(self.entities.len());

        for mut entity in self.entities.drain(..) {
            entity.ticks_remaining -= 1;
            if entity.ticks_remaining == 0 {
                expired.push(entity.action);
            } else {
                pending.push(entity);
            }
        }

        self.entities = pending;
        if !expired.is_empty() {
            trace!(
                "timeline tick: {} expired, {} pending",
                expired.len(),
                self.entities.len()
            );
        }
        expired
    }

    /// Pending entities in scheduling order
    pub fn pending(&self) -> &[TimedEntity<A>] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl<A: PartialEq> Timeline<A> {
    /// Schedule `action`, dropping any pending entity carrying an equal action.
    pub fn schedule_unique(&mut self, delay: u32, action: A) {
        self.entities.retain(|e| e.action != action);
        self.schedule(delay, action);
    }
}

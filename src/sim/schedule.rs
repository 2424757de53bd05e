//! Timer events consumed by the simulation step
//!
//! Spawning, the difficulty ramp and the fire cooldown are not wall-clock
//! callbacks. Each is an event due at a tick and tagged with the session
//! epoch that scheduled it; the tick drains due events and ignores any whose
//! epoch no longer matches the live session.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// What a timer does when it comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimerEvent {
    /// Fire becomes available again
    FireCooldownExpired,
    /// Bump the global speed multiplier (repeats)
    SpeedRamp,
    /// Drop a new target (repeats)
    SpawnTarget,
}

/// A timer event pinned to a tick and a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScheduledEvent {
    pub due_tick: u64,
    /// Insertion order, breaks ties between events due on the same tick
    pub seq: u64,
    pub epoch: u32,
    pub event: TimerEvent,
}

/// Min-heap of pending events ordered by (due tick, insertion order)
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<ScheduledEvent>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn schedule(&mut self, due_tick: u64, epoch: u32, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(ScheduledEvent {
            due_tick,
            seq,
            epoch,
            event,
        }));
    }

    /// Pop the next event due at or before `now` that belongs to `epoch`.
    ///
    /// Due events from other epochs are dropped on the way.
    pub fn pop_due(&mut self, now: u64, epoch: u32) -> Option<TimerEvent> {
        while let Some(Reverse(next)) = self.queue.peek() {
            if next.due_tick > now {
                return None;
            }
            let Reverse(due) = self.queue.pop()?;
            if due.epoch == epoch {
                return Some(due.event);
            }
            log::trace!(
                "Discarding stale {:?} from session {} (live session {})",
                due.event,
                due.epoch,
                epoch
            );
        }
        None
    }

    /// Number of pending events, stale ones included
    #[cfg(test)]
    fn len(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Count pending events of a kind for a session
    #[cfg(test)]
    fn pending(&self, epoch: u32, event: TimerEvent) -> usize {
        self.queue
            .iter()
            .filter(|Reverse(e)| e.epoch == epoch && e.event == event)
            .count()
    }
}

//! Delayed-transition scheduler for the Reef OS shell
//!
//! Every simulated latency in the shell (wifi connect, app install, transfer
//! progress, boot timing) is a scheduled, cancellable, single-fire state
//! change. This crate provides the one primitive they all share.
//!
//! The scheduler is deterministic and single-threaded: it never spawns
//! threads or arms OS timers. The owner advances it by passing the current
//! time in milliseconds, and due events come back in fire order.
//!
//! Timers are keyed by purpose. Scheduling a new timer under a key that
//! already has one pending replaces the old timer, so an entity can never
//! have two outstanding transitions for the same purpose.

use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// Identifies one scheduled timer for targeted cancellation.
pub type TimerId = u64;

/// Heap entry ordered by fire time, ties broken by schedule order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    fire_at_ms: u64,
    seq: u64,
    id: TimerId,
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the BinaryHeap pops the earliest slot first
        (other.fire_at_ms, other.seq).cmp(&(self.fire_at_ms, self.seq))
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Keyed single-fire timer queue.
///
/// `K` is the timer key (the purpose of the transition), `E` the event
/// payload delivered when the timer fires.
pub struct Scheduler<K, E> {
    queue: BinaryHeap<Slot>,
    /// Live timers; a slot whose id is absent here was cancelled or replaced.
    live: HashMap<TimerId, (K, E)>,
    by_key: HashMap<K, TimerId>,
    next_id: TimerId,
    next_seq: u64,
}

impl<K, E> Default for Scheduler<K, E>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E> Scheduler<K, E>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            live: HashMap::new(),
            by_key: HashMap::new(),
            next_id: 1,
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire `delay_ms` after `now_ms`.
    ///
    /// A pending timer under the same key is cancelled first; the entity
    /// ends up with exactly one outstanding transition for this purpose.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, key: K, event: E) -> TimerId {
        self.cancel_key(&key);

        let id = self.next_id;
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;

        self.queue.push(Slot {
            fire_at_ms: now_ms.saturating_add(delay_ms),
            seq,
            id,
        });
        self.by_key.insert(key.clone(), id);
        self.live.insert(id, (key, event));

        id
    }

    /// Cancel a timer by id. Returns false if it already fired or was
    /// cancelled; cancelling twice is harmless.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.live.remove(&id) {
            Some((key, _)) => {
                if self.by_key.get(&key) == Some(&id) {
                    self.by_key.remove(&key);
                }
                true
            }
            None => false,
        }
    }

    /// Cancel the pending timer for a key, if any.
    pub fn cancel_key(&mut self, key: &K) -> bool {
        match self.by_key.remove(key) {
            Some(id) => self.live.remove(&id).is_some(),
            None => false,
        }
    }

    /// Whether a timer is pending for this key.
    pub fn is_pending(&self, key: &K) -> bool {
        self.by_key.contains_key(key)
    }

    /// Drain every event due at or before `now_ms`, in fire order.
    ///
    /// Cancelled and replaced timers are skipped; each surviving event is
    /// delivered exactly once.
    pub fn advance(&mut self, now_ms: u64) -> Vec<E> {
        let mut fired = Vec::new();

        while let Some(slot) = self.queue.peek().copied() {
            if slot.fire_at_ms > now_ms {
                break;
            }
            self.queue.pop();
            if let Some((key, event)) = self.live.remove(&slot.id) {
                if self.by_key.get(&key) == Some(&slot.id) {
                    self.by_key.remove(&key);
                }
                fired.push(event);
            }
        }

        fired
    }

    /// Drop every pending timer. Used when the owning subsystem is torn
    /// down so no transition can fire into discarded state.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.live.clear();
        self.by_key.clear();
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

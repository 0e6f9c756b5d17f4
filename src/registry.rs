/*!
 * Signal Registry
 * Type-keyed publish-subscribe registry with per-shard locking
 */

use crate::stats::AtomicBusStats;
use crate::subscribers::{ident_of, Callback, ErasedSubscriber, SubscriberList};
use crate::traits::{SignalPublish, SignalSubscribe};
use crate::types::{BusStats, Signal};
use ahash::RandomState;
use dashmap::DashMap;
use log::{debug, warn};
use std::any::{type_name, Any, TypeId};
use std::sync::Arc;

/// Type-keyed signal registry.
///
/// One ordered subscriber list per payload `TypeId`. The map is sharded, so
/// mutation and snapshot-reads for one signal type only contend with other
/// operations on the same shard; publishes of unrelated types proceed in
/// parallel.
///
/// Handles are cheap to clone and share the same underlying registry.
#[derive(Clone)]
pub struct SignalRegistry {
    subscribers: Arc<DashMap<TypeId, SubscriberList, RandomState>>,
    stats: Arc<AtomicBusStats>,
}

impl SignalRegistry {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(DashMap::with_hasher(RandomState::new())),
            stats: Arc::new(AtomicBusStats::new()),
        }
    }

    /// Number of live registrations for signal type `S`
    pub fn subscriber_count<S: Signal>(&self) -> usize {
        self.subscribers
            .get(&TypeId::of::<S>())
            .map(|list| list.len())
            .unwrap_or(0)
    }

    /// Check if signal type `S` has any subscribers
    pub fn has_subscribers<S: Signal>(&self) -> bool {
        self.subscribers.contains_key(&TypeId::of::<S>())
    }

    /// Number of signal types with at least one subscriber.
    ///
    /// Empty lists are pruned eagerly, so every counted entry is live.
    pub fn signal_type_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Get bus statistics
    pub fn stats(&self) -> BusStats {
        self.stats.snapshot()
    }
}

impl Default for SignalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalSubscribe for SignalRegistry {
    fn subscribe<S: Signal>(&self, callback: Callback<S>) {
        let ident = ident_of(&callback);

        self.subscribers
            .entry(TypeId::of::<S>())
            .or_default()
            .push(ErasedSubscriber::new(callback));

        self.stats.inc_subscribed();
        debug!("Subscribed callback {:#x} to {}", ident, type_name::<S>());
    }

    fn unsubscribe<S: Signal>(&self, callback: &Callback<S>) {
        let type_id = TypeId::of::<S>();
        let ident = ident_of(callback);

        // Guard is dropped before pruning: removal on the same shard while a
        // RefMut is live would deadlock.
        let removed = {
            let Some(mut list) = self.subscribers.get_mut(&type_id) else {
                return;
            };
            list.remove_first(ident)
        };

        if !removed {
            return;
        }

        self.stats.inc_unsubscribed();
        debug!(
            "Unsubscribed callback {:#x} from {}",
            ident,
            type_name::<S>()
        );

        // Prune the entry if it is still empty; the predicate re-checks under
        // the shard lock so a concurrent subscribe is never lost.
        if self
            .subscribers
            .remove_if(&type_id, |_, list| list.is_empty())
            .is_some()
        {
            debug!("Pruned empty subscriber list for {}", type_name::<S>());
        }
    }
}

impl SignalPublish for SignalRegistry {
    /// Deliver one signal to every callback subscribed to its exact type.
    ///
    /// The subscriber list is snapshotted under the shard lock and the lock is
    /// released before any callback runs, so callbacks may freely subscribe,
    /// unsubscribe, or publish. Registrations made during delivery are first
    /// seen by the next publish; removals during delivery do not unskip
    /// callbacks already in the snapshot.
    ///
    /// A panicking callback propagates to the caller and aborts delivery to
    /// the rest of the snapshot.
    fn publish<S: Signal>(&self, signal: S) {
        self.stats.inc_published();

        let snapshot = match self.subscribers.get(&TypeId::of::<S>()) {
            Some(list) => list.snapshot(),
            None => return,
        };

        let payload: &(dyn Any + Send + Sync) = &signal;
        for subscriber in &snapshot {
            match subscriber.deliver(payload) {
                Ok(()) => self.stats.inc_invoked(),
                // Unreachable while entries are keyed by TypeId; skip rather
                // than poison the whole publish.
                Err(e) => warn!("Dropped delivery of {}: {}", type_name::<S>(), e),
            }
        }
    }
}

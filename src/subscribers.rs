/*!
 * Subscriber Storage
 * Type-erased, insertion-ordered subscriber collections
 */

use crate::types::{Signal, SignalError, SignalResult};
use std::any::{type_name, Any};
use std::sync::Arc;

/// Subscriber callback function type for signal payload `S`
pub type Callback<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Erased invocation closure: downcasts the payload and calls the typed callback
type ErasedInvoke = Arc<dyn Fn(&(dyn Any + Send + Sync)) -> SignalResult<()> + Send + Sync>;

/// Callback identity token.
///
/// Clones of the same `Arc` share one allocation and therefore one identity;
/// separately constructed callbacks never compare equal. This is what makes
/// removal-by-callback-value work without requiring closures to be `PartialEq`.
pub(crate) fn ident_of<S: Signal>(callback: &Callback<S>) -> usize {
    Arc::as_ptr(callback) as *const () as usize
}

/// A single registered subscription: identity plus erased invocation.
///
/// The typed downcast is paid once here, at registration, so the registry's
/// storage layer never needs to be generic over payload types.
#[derive(Clone)]
pub(crate) struct ErasedSubscriber {
    ident: usize,
    invoke: ErasedInvoke,
}

impl ErasedSubscriber {
    pub fn new<S: Signal>(callback: Callback<S>) -> Self {
        let ident = ident_of(&callback);
        let invoke: ErasedInvoke = Arc::new(move |payload| {
            let signal =
                payload
                    .downcast_ref::<S>()
                    .ok_or_else(|| SignalError::PayloadTypeMismatch {
                        expected: type_name::<S>().to_string(),
                    })?;
            callback(signal);
            Ok(())
        });
        Self { ident, invoke }
    }

    pub fn ident(&self) -> usize {
        self.ident
    }

    /// Deliver one payload to this subscriber
    pub fn deliver(&self, payload: &(dyn Any + Send + Sync)) -> SignalResult<()> {
        (self.invoke)(payload)
    }
}

/// Ordered subscriber collection for one signal type.
///
/// Insertion order is invocation order. Duplicates are allowed: subscribing
/// the same callback twice yields two invocations per publish, and each
/// addition needs its own matching removal.
#[derive(Clone, Default)]
pub(crate) struct SubscriberList {
    entries: Vec<ErasedSubscriber>,
}

impl SubscriberList {
    pub fn push(&mut self, subscriber: ErasedSubscriber) {
        self.entries.push(subscriber);
    }

    /// Remove the first entry with the given identity
    pub fn remove_first(&mut self, ident: usize) -> bool {
        match self.entries.iter().position(|e| e.ident() == ident) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Copy of the current entries, cheap to take under a lock (`Arc` clones)
    pub fn snapshot(&self) -> Vec<ErasedSubscriber> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

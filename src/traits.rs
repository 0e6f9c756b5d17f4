/*!
 * Signal Bus Traits
 * Subscription and publication abstractions
 */

use crate::subscribers::Callback;
use crate::types::Signal;

/// Subscription management interface
pub trait SignalSubscribe: Send + Sync {
    /// Append a callback to the subscriber list for signal type `S`
    fn subscribe<S: Signal>(&self, callback: Callback<S>);

    /// Remove the first registration of an equal callback for signal type `S`.
    /// Unknown types and absent callbacks are a no-op.
    fn unsubscribe<S: Signal>(&self, callback: &Callback<S>);
}

/// Signal publication interface
pub trait SignalPublish: Send + Sync {
    /// Deliver one signal to every callback currently subscribed to its type
    fn publish<S: Signal>(&self, signal: S);
}

/// Combined signal bus trait
pub trait SignalBus: SignalSubscribe + SignalPublish + Clone + Send + Sync {}

/// Implement SignalBus for types that implement all required traits
impl<T> SignalBus for T where T: SignalSubscribe + SignalPublish + Clone + Send + Sync {}

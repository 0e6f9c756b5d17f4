/*!
 * Process-Wide Default Registry
 * Lazily-initialized shared instance with free-function sugar
 */

use crate::registry::SignalRegistry;
use crate::subscribers::Callback;
use crate::traits::{SignalPublish, SignalSubscribe};
use crate::types::Signal;
use std::sync::OnceLock;

static REGISTRY: OnceLock<SignalRegistry> = OnceLock::new();

/// The process-wide default registry.
///
/// Created on first use and never torn down. Components that want an
/// injectable bus should take a [`SignalRegistry`] handle instead; this
/// instance is convenience sugar for callers with no wiring of their own.
pub fn global() -> &'static SignalRegistry {
    REGISTRY.get_or_init(SignalRegistry::new)
}

/// Subscribe a callback to signal type `S` on the default registry
pub fn subscribe<S: Signal>(callback: Callback<S>) {
    global().subscribe(callback);
}

/// Remove a callback from signal type `S` on the default registry
pub fn unsubscribe<S: Signal>(callback: &Callback<S>) {
    global().unsubscribe(callback);
}

/// Publish a signal through the default registry
pub fn publish<S: Signal>(signal: S) {
    global().publish(signal);
}

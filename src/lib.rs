/*!
 * Signal Bus Library
 * Process-local, type-keyed publish-subscribe for decoupled components
 */

pub mod global;
mod registry;
mod stats;
mod subscribers;
pub mod traits;
pub mod types;

// Re-export public API
pub use global::{global, publish, subscribe, unsubscribe};
pub use registry::SignalRegistry;
pub use subscribers::Callback;
pub use traits::{SignalBus, SignalPublish, SignalSubscribe};
pub use types::{BusStats, Signal, SignalError, SignalResult};

/*!
 * Signal Bus Types
 * Signal marker trait, error taxonomy, and stats snapshot types
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Signal bus operation result
pub type SignalResult<T> = Result<T, SignalError>;

/// Signal bus errors
///
/// Null callbacks are unrepresentable (subscription takes a live `Arc`), and
/// unsubscribing an unknown callback or type is a silent no-op, so the only
/// error class left is internal corruption of the type-erased storage.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SignalError {
    #[error("payload type mismatch: subscriber expected {expected}")]
    PayloadTypeMismatch { expected: String },
}

/// Marker trait for signal payload types.
///
/// A signal kind is declared by implementing this trait on a payload type;
/// no members are required. The payload's `TypeId` is the dispatch key, so
/// exact-type matching applies: subscribers to `T` receive only values
/// published as `T`.
///
/// ```
/// use signal_bus::Signal;
///
/// #[derive(Debug)]
/// struct PointsScored {
///     pub amount: i32,
/// }
///
/// impl Signal for PointsScored {}
/// ```
pub trait Signal: Send + Sync + 'static {}

/// Bus statistics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusStats {
    pub signals_published: u64,
    pub callbacks_invoked: u64,
    pub subscriptions_added: u64,
    pub subscriptions_removed: u64,
    pub active_subscriptions: usize,
}

//! Observer capability the start page reads application state through.

use std::sync::Arc;

use crate::model::AppSnapshot;

/// Callback invoked with the latest snapshot after every state change.
pub type Listener = Arc<dyn Fn(&AppSnapshot) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

pub trait StateSource {
    fn snapshot(&self) -> AppSnapshot;

    fn subscribe(&self, listener: Listener) -> SubscriptionId;

    /// Returns `false` when the id was already released.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

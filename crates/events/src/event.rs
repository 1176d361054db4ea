use chrono::{DateTime, Utc};

/// A change notification.
///
/// Events are facts: immutable, named, and stamped with the time the change was
/// applied.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "inventory.component.added").
    fn event_type(&self) -> &'static str;

    /// When the change was applied.
    fn occurred_at(&self) -> DateTime<Utc>;
}

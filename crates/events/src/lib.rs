//! Change notifications for the inventory store.
//!
//! The store publishes one event per successful mutation; views subscribe and
//! re-render from the latest snapshot when something arrives.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};

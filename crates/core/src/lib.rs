//! `stockwise-core`: shared building blocks for the inventory dashboard.
//!
//! Pure types only: identifiers, the domain error model, the entity trait and a
//! cancellation token used by the suspending operations (login, forecast).

pub mod cancel;
pub mod entity;
pub mod error;
pub mod id;

pub use cancel::CancelToken;
pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{AlertId, ComponentId, PurchaseOrderId, SupplierId, UserId};

//! Core types and traits for the hoplink redirect service.
//!
//! This crate defines the shared vocabulary of the resolution path: the
//! [`ShortCode`] identifier, the [`LinkRecord`] stored alongside it, the
//! [`ClickEvent`] emitted on each successful resolution, and the traits
//! implemented by the storage, cache, and analytics backends.

pub mod cache;
pub mod error;
pub mod event;
pub mod record;
pub mod shortcode;
pub mod sink;
pub mod store;

pub use cache::UrlCache;
pub use error::{CacheError, CoreError, EmitError, StorageError};
pub use event::ClickEvent;
pub use record::LinkRecord;
pub use shortcode::ShortCode;
pub use sink::EventSink;
pub use store::LinkStore;

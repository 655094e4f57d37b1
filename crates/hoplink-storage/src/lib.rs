//! [`LinkStore`] implementations.
//!
//! [`MySqlLinkStore`] is the production backend over an sqlx pool;
//! [`InMemoryLinkStore`] backs tests and the in-memory deployment mode.
//!
//! [`LinkStore`]: hoplink_core::LinkStore

pub mod memory;
pub mod mysql;

pub use memory::InMemoryLinkStore;
pub use mysql::MySqlLinkStore;
